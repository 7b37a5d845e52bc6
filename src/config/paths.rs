//! Path management for the receipt tool
//!
//! Resolves where settings, the audit trail, diagnostics, and rendered print
//! documents live.
//!
//! ## Path Resolution Order
//!
//! 1. `RECEIPT_CLI_DATA_DIR` environment variable (if set)
//! 2. The platform config directory for `receipt-cli`
//!    (`~/.config/receipt-cli` on Linux, `~/Library/Application Support/receipt-cli`
//!    on macOS, `%APPDATA%\receipt-cli\config` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::ReceiptError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "RECEIPT_CLI_DATA_DIR";

/// Manages all paths used by the receipt tool
#[derive(Debug, Clone)]
pub struct ReceiptPaths {
    /// Base directory for all receipt-cli files
    base_dir: PathBuf,
}

impl ReceiptPaths {
    /// Create a new ReceiptPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no platform config directory can be determined.
    pub fn new() -> Result<Self, ReceiptError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create ReceiptPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the directory rendered print documents are written to
    pub fn print_dir(&self) -> PathBuf {
        self.base_dir.join("prints")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to the diagnostic log
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("receipt.log")
    }

    /// Ensure the base and print directories exist
    pub fn ensure_directories(&self) -> Result<(), ReceiptError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ReceiptError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.print_dir())
            .map_err(|e| ReceiptError::Io(format!("Failed to create print directory: {}", e)))?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, ReceiptError> {
    let dirs = ProjectDirs::from("", "", "receipt-cli").ok_or_else(|| {
        ReceiptError::Config("Could not determine a home directory for receipt-cli".into())
    })?;
    Ok(dirs.config_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ReceiptPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.print_dir(), temp_dir.path().join("prints"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ReceiptPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
        assert!(paths.print_dir().exists());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ReceiptPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.audit_log(), temp_dir.path().join("audit.log"));
        assert_eq!(paths.log_file(), temp_dir.path().join("receipt.log"));
    }
}
