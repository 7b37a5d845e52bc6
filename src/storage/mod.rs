//! Storage layer
//!
//! Receipts are kept in memory for the session. The storage coordinator also
//! owns the clock receipts are stamped with and the audit trail that records
//! every change.

pub mod receipts;

pub use receipts::ReceiptRepository;

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::ReceiptPaths;
use crate::config::settings::Settings;
use crate::error::ReceiptError;
use crate::models::{Clock, SystemClock};

/// Main storage coordinator
pub struct Storage {
    paths: ReceiptPaths,
    pub receipts: ReceiptRepository,
    audit: Option<AuditLogger>,
    clock: Box<dyn Clock>,
}

impl Storage {
    /// Create a new Storage instance with auditing enabled
    pub fn new(paths: ReceiptPaths) -> Result<Self, ReceiptError> {
        paths.ensure_directories()?;

        Ok(Self {
            receipts: ReceiptRepository::new(),
            audit: Some(AuditLogger::new(paths.audit_log())),
            clock: Box::new(SystemClock),
            paths,
        })
    }

    /// Create a Storage instance honouring the user's settings
    pub fn with_settings(paths: ReceiptPaths, settings: &Settings) -> Result<Self, ReceiptError> {
        let mut storage = Self::new(paths)?;
        if !settings.audit_enabled {
            storage.audit = None;
        }
        Ok(storage)
    }

    /// Replace the clock receipts are stamped with
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &ReceiptPaths {
        &self.paths
    }

    /// Get the clock
    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Get the audit logger, if auditing is enabled
    pub fn audit(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Append an entry to the audit trail, if auditing is enabled
    pub fn record(&self, entry: &AuditEntry) -> Result<(), ReceiptError> {
        match &self.audit {
            Some(logger) => logger.log(entry),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::models::{Receipt, ReceiptId};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn receipt() -> Receipt {
        let stamp = NaiveDate::from_ymd_opt(2026, 10, 16)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        Receipt::new(ReceiptId::new(), "Groceries", "", stamp)
    }

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ReceiptPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("prints").exists());
        assert_eq!(storage.receipts.count().unwrap(), 0);
        assert!(storage.audit().is_some());
    }

    #[test]
    fn test_record_appends_entry() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ReceiptPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        storage.record(&AuditEntry::deleted(&receipt())).unwrap();

        let entries = storage.audit().unwrap().read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].operation, Operation::Delete);
    }

    #[test]
    fn test_audit_disabled() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ReceiptPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings {
            audit_enabled: false,
            ..Settings::default()
        };
        let storage = Storage::with_settings(paths.clone(), &settings).unwrap();

        storage.record(&AuditEntry::created(&receipt())).unwrap();

        assert!(storage.audit().is_none());
        assert!(!paths.audit_log().exists());
    }
}
