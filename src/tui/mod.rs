//! Terminal User Interface module
//!
//! A two-view TUI built on ratatui: a form that creates or edits a receipt
//! and prints it, and a history list with print, edit and delete actions.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
