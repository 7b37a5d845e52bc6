//! Configuration module
//!
//! This module provides configuration management including:
//! - Platform path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::ReceiptPaths;
pub use settings::{PrintBackend, Settings};
