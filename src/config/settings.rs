//! User settings for the receipt tool
//!
//! Manages how printed receipts are dispatched, whether the audit trail is
//! written, and the diagnostic log level.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::paths::ReceiptPaths;
use crate::error::ReceiptError;

/// Where rendered receipt documents are sent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PrintBackend {
    /// Write the document to a file and open it in the default browser
    #[default]
    Browser,
    /// Write the document to a file only
    File,
    /// Write the document to standard output
    Stdout,
}

impl fmt::Display for PrintBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Browser => write!(f, "browser"),
            Self::File => write!(f, "file"),
            Self::Stdout => write!(f, "stdout"),
        }
    }
}

/// User settings for the receipt tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Print backend used by the TUI and `receipt print`
    #[serde(default)]
    pub print_backend: PrintBackend,

    /// Command used to open rendered documents (platform opener when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_command: Option<String>,

    /// Escape title and note before embedding them in the document
    #[serde(default)]
    pub escape_html: bool,

    /// Whether create/update/delete operations are appended to the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,

    /// Diagnostic log filter (overridden by `RECEIPT_LOG`)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_audit_enabled() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            print_backend: PrintBackend::default(),
            open_command: None,
            escape_html: false,
            audit_enabled: default_audit_enabled(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &ReceiptPaths) -> Result<Self, ReceiptError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| ReceiptError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ReceiptError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ReceiptPaths) -> Result<(), ReceiptError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ReceiptError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| ReceiptError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
