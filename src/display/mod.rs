//! Display formatting for terminal output
//!
//! Provides utilities for formatting receipts for terminal display.

pub mod receipt;

pub use receipt::{format_receipt_details, note_preview, truncate};
