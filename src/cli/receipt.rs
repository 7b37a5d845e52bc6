//! Receipt CLI commands
//!
//! One-shot create-and-print and render commands. Each invocation works in a
//! fresh session store, so the receipt only lives as long as the command.
//! Rendering builds the receipt without storing it.

use std::io::Write;

use clap::Args;

use crate::config::paths::ReceiptPaths;
use crate::config::settings::{PrintBackend, Settings};
use crate::controller::{NoticeLevel, ReceiptForm, SubmissionController, SubmitOutcome};
use crate::display::format_receipt_details;
use crate::error::{ReceiptError, ReceiptResult};
use crate::models::{Receipt, ReceiptId};
use crate::render::{surface_for, PrintOutcome, PrintSurface, RenderOptions, Renderer};
use crate::storage::Storage;

/// Arguments for `receipt print`
#[derive(Args, Debug)]
pub struct PrintArgs {
    /// Receipt title
    pub title: String,
    /// Free-form note, may span several lines
    #[arg(short, long, default_value = "")]
    pub note: String,
    /// Where to send the document (defaults to the configured backend)
    #[arg(short, long, value_enum)]
    pub backend: Option<PrintBackend>,
    /// Escape title and note in the document
    #[arg(long)]
    pub escape: bool,
}

/// Arguments for `receipt render`
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Receipt title
    pub title: String,
    /// Free-form note, may span several lines
    #[arg(short, long, default_value = "")]
    pub note: String,
    /// Escape title and note in the document
    #[arg(long)]
    pub escape: bool,
}

fn render_options(escape: bool, settings: &Settings) -> RenderOptions {
    RenderOptions {
        escape_html: escape || settings.escape_html,
    }
}

/// Create a receipt from the given fields and print it through `renderer`
pub fn submit_receipt<S: PrintSurface>(
    storage: &Storage,
    renderer: Renderer<S>,
    title: &str,
    note: &str,
) -> ReceiptResult<SubmitOutcome> {
    let mut controller = SubmissionController::new(storage, renderer);
    controller.form = ReceiptForm::new(title, note);
    controller.submit()
}

/// Handle `receipt print`
pub fn handle_print_command(
    storage: &Storage,
    paths: &ReceiptPaths,
    settings: &Settings,
    args: PrintArgs,
) -> ReceiptResult<()> {
    let backend = args.backend.unwrap_or(settings.print_backend);
    let renderer = Renderer::new(
        surface_for(backend, paths, settings),
        render_options(args.escape, settings),
    );

    let outcome = submit_receipt(storage, renderer, &args.title, &args.note)?;

    // The document itself went to stdout; keep it clean
    if backend == PrintBackend::Stdout {
        return Ok(());
    }

    for notice in outcome.notices() {
        match notice.level {
            NoticeLevel::Warning => eprintln!("{}: {}", notice.title, notice.description),
            _ => println!("{} {}", notice.title, notice.description),
        }
    }
    println!();
    print!("{}", format_receipt_details(&outcome.receipt));
    if let PrintOutcome::Dispatched {
        location: Some(path),
    } = &outcome.print
    {
        println!("Файл:     {}", path.display());
    }

    Ok(())
}

/// Render a receipt's document into `out` without storing or printing it
pub fn render_receipt(
    storage: &Storage,
    options: RenderOptions,
    title: &str,
    note: &str,
    out: &mut impl Write,
) -> ReceiptResult<()> {
    let receipt = Receipt::new(ReceiptId::new(), title, note, storage.clock().now());
    receipt
        .validate()
        .map_err(|e| ReceiptError::Validation(e.to_string()))?;
    let document = crate::render::render_document(&receipt, options);
    out.write_all(document.html.as_bytes())
        .map_err(|e| ReceiptError::Io(format!("Failed to write document: {}", e)))?;
    Ok(())
}

/// Handle `receipt render`
pub fn handle_render_command(
    storage: &Storage,
    settings: &Settings,
    args: RenderArgs,
) -> ReceiptResult<()> {
    let mut stdout = std::io::stdout().lock();
    render_receipt(
        storage,
        render_options(args.escape, settings),
        &args.title,
        &args.note,
        &mut stdout,
    )?;
    stdout.flush()?;
    Ok(())
}
