use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use receipt::cli::{
    handle_audit_command, handle_config_command, handle_print_command, handle_render_command,
    PrintArgs, RenderArgs,
};
use receipt::config::paths::{ReceiptPaths, DATA_DIR_ENV};
use receipt::config::settings::Settings;
use receipt::storage::Storage;

/// Environment variable overriding the configured log filter
const LOG_ENV: &str = "RECEIPT_LOG";

#[derive(Parser)]
#[command(
    name = "receipt",
    version,
    about = "Create and print simple receipts from the terminal",
    long_about = "Receipt CLI creates small receipts (a title, a note, and the \
                  moment they were made) and prints them through the browser's \
                  print dialog, a file, or standard output."
)]
struct Cli {
    /// Directory for settings, logs and printed documents
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (default)
    #[command(alias = "ui")]
    Tui,

    /// Create a receipt and print it
    Print(PrintArgs),

    /// Write a receipt's HTML document to stdout
    Render(RenderArgs),

    /// Show current configuration and paths
    Config,

    /// Show recent audit trail entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

/// Send diagnostics to the log file so the TUI screen stays clean
fn init_tracing(paths: &ReceiptPaths, settings: &Settings) -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(&settings.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(paths.log_file())?;

    // A second init (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = match cli.data_dir {
        Some(dir) => ReceiptPaths::with_base_dir(dir),
        None => ReceiptPaths::new()?,
    };
    paths.ensure_directories()?;
    let settings = Settings::load_or_create(&paths)?;
    init_tracing(&paths, &settings)?;

    // Receipts live for this process only
    let storage = Storage::with_settings(paths.clone(), &settings)?;

    match cli.command {
        None | Some(Commands::Tui) => {
            receipt::tui::run_tui(&storage, &settings, &paths)?;
        }
        Some(Commands::Print(args)) => {
            handle_print_command(&storage, &paths, &settings, args)?;
        }
        Some(Commands::Render(args)) => {
            handle_render_command(&storage, &settings, args)?;
        }
        Some(Commands::Config) => {
            handle_config_command(&paths, &settings)?;
        }
        Some(Commands::Audit { limit }) => {
            handle_audit_command(&storage, limit)?;
        }
    }

    Ok(())
}
