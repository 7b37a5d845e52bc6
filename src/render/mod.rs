//! Receipt rendering and printing
//!
//! [`render_document`] turns one receipt into a printable HTML page and a
//! [`PrintSurface`] carries it to the printer. [`Renderer`] ties the two
//! together; it holds no receipt state, so printing the same receipt twice
//! produces two identical, independent dispatches.

pub mod document;
pub mod surface;

pub use document::{escape_html, render_document, ReceiptDocument, RenderOptions};
pub use surface::{BrowserSurface, FileSurface, PrintOutcome, PrintSurface, StdoutSurface};

use tracing::info;

use crate::config::paths::ReceiptPaths;
use crate::config::settings::{PrintBackend, Settings};
use crate::models::Receipt;

/// Renders receipts and dispatches them to a print surface
pub struct Renderer<S> {
    surface: S,
    options: RenderOptions,
}

impl<S: PrintSurface> Renderer<S> {
    /// Create a renderer over a surface
    pub fn new(surface: S, options: RenderOptions) -> Self {
        Self { surface, options }
    }

    /// Render options in use
    pub fn options(&self) -> RenderOptions {
        self.options
    }

    /// The underlying surface
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Render a receipt without dispatching it
    pub fn render(&self, receipt: &Receipt) -> ReceiptDocument {
        render_document(receipt, self.options)
    }

    /// Render a receipt and send it to the surface
    pub fn print(&self, receipt: &Receipt) -> PrintOutcome {
        let document = self.render(receipt);
        let outcome = self.surface.dispatch(&document);
        info!(
            id = %receipt.id,
            dispatched = outcome.is_dispatched(),
            "receipt sent to print"
        );
        outcome
    }
}

/// Build the surface selected by `backend`
pub fn surface_for(
    backend: PrintBackend,
    paths: &ReceiptPaths,
    settings: &Settings,
) -> Box<dyn PrintSurface> {
    match backend {
        PrintBackend::Browser => Box::new(BrowserSurface::new(
            paths.print_dir(),
            settings.open_command.clone(),
        )),
        PrintBackend::File => Box::new(FileSurface::new(paths.print_dir())),
        PrintBackend::Stdout => Box::new(StdoutSurface),
    }
}

/// Build a renderer from the user's settings
pub fn renderer_from_settings(
    backend: PrintBackend,
    paths: &ReceiptPaths,
    settings: &Settings,
) -> Renderer<Box<dyn PrintSurface>> {
    Renderer::new(
        surface_for(backend, paths, settings),
        RenderOptions {
            escape_html: settings.escape_html,
        },
    )
}
