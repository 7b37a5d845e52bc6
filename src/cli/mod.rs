//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod audit;
pub mod config;
pub mod receipt;

pub use audit::handle_audit_command;
pub use config::handle_config_command;
pub use receipt::{handle_print_command, handle_render_command, PrintArgs, RenderArgs};
