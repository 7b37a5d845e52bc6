//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use tracing::{info, warn};

use crate::config::paths::ReceiptPaths;
use crate::config::settings::{PrintBackend, Settings};
use crate::controller::{Notice, NoticeLevel};
use crate::render::renderer_from_settings;
use crate::storage::Storage;

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    // Set up panic hook to restore terminal on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal before printing panic info
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Print backend the TUI can use for the configured one
///
/// Standard output belongs to the terminal screen while the TUI runs, so
/// documents go to files instead.
pub fn tui_print_backend(configured: PrintBackend) -> PrintBackend {
    match configured {
        PrintBackend::Stdout => PrintBackend::File,
        other => other,
    }
}

/// Run the TUI application
pub fn run_tui(storage: &Storage, settings: &Settings, paths: &ReceiptPaths) -> Result<()> {
    let backend = tui_print_backend(settings.print_backend);
    let renderer = renderer_from_settings(backend, paths, settings);
    let mut app = App::new(storage, settings, paths, renderer);

    if backend != settings.print_backend {
        warn!(configured = ?settings.print_backend, used = ?backend, "print backend replaced in tui");
        app.notify(Notice::new(
            NoticeLevel::Warning,
            "Печать в файл",
            format!(
                "Вывод в stdout недоступен в интерфейсе, чеки сохраняются в {}",
                paths.print_dir().display()
            ),
        ));
    }

    let mut terminal = init_terminal()?;
    let events = EventHandler::default();
    info!("tui started");

    // Restore the terminal even when the loop fails
    let result = run_loop(&mut terminal, &mut app, &events);
    restore_terminal()?;

    info!("tui stopped");
    result
}

fn run_loop(terminal: &mut Tui, app: &mut App, events: &EventHandler) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| {
            super::views::render(frame, app);
        })?;

        handle_event(app, events.next()?);
    }
    Ok(())
}
