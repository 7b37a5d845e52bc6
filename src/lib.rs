//! Receipt CLI - create, keep, and print simple receipts from the terminal
//!
//! A receipt is a title, an optional free-form note, and the date, time and
//! short id stamped at creation. Receipts live in memory for the session; each
//! one can be printed as a self-contained HTML document.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Receipt, id and clock types
//! - `storage`: In-memory receipt repository and the edit target
//! - `services`: Business logic layer
//! - `render`: HTML document rendering and print surfaces
//! - `controller`: Form submission flow shared by the TUI and CLI
//! - `audit`: Audit logging system
//! - `display`: Plain-text formatting
//! - `cli`: Command handlers
//! - `tui`: Interactive terminal interface
//!
//! # Example
//!
//! ```rust,ignore
//! use receipt::config::{paths::ReceiptPaths, settings::Settings};
//! use receipt::services::ReceiptService;
//! use receipt::storage::Storage;
//!
//! let paths = ReceiptPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::with_settings(paths, &settings)?;
//! let receipt = ReceiptService::new(&storage).create("Groceries", "Milk\nEggs")?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod controller;
pub mod display;
pub mod error;
pub mod models;
pub mod render;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::ReceiptError;
