//! Receipt service
//!
//! Business logic for the receipt lifecycle: validation, id and timestamp
//! assignment, ordering, the edit target, and the audit trail.

use tracing::{debug, info, warn};

use crate::audit::AuditEntry;
use crate::error::{ReceiptError, ReceiptResult};
use crate::models::receipt::validate_title;
use crate::models::{Receipt, ReceiptId};
use crate::storage::Storage;

/// Service for receipt management
pub struct ReceiptService<'a> {
    storage: &'a Storage,
}

impl<'a> ReceiptService<'a> {
    /// Create a new receipt service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a receipt and place it at the head of the list
    pub fn create(&self, title: &str, note: &str) -> ReceiptResult<Receipt> {
        validate_title(title).map_err(|e| ReceiptError::Validation(e.to_string()))?;

        let id = self.storage.receipts.fresh_id()?;
        let receipt = Receipt::new(id, title, note, self.storage.clock().now());
        self.storage.receipts.insert_front(receipt.clone())?;

        info!(id = %receipt.id, title = %receipt.title, "receipt created");
        self.audit(self.storage.record(&AuditEntry::created(&receipt)));

        Ok(receipt)
    }

    /// Replace the title and note of an existing receipt
    pub fn update(&self, id: &ReceiptId, title: &str, note: &str) -> ReceiptResult<Receipt> {
        validate_title(title).map_err(|e| ReceiptError::Validation(e.to_string()))?;

        let mut receipt = self
            .storage
            .receipts
            .get(id)?
            .ok_or_else(|| ReceiptError::receipt_not_found(id.to_string()))?;
        receipt.edit(title, note);

        let before = self
            .storage
            .receipts
            .replace(receipt.clone())?
            .ok_or_else(|| ReceiptError::receipt_not_found(id.to_string()))?;

        info!(id = %receipt.id, title = %receipt.title, "receipt updated");
        self.audit(self.storage.record(&AuditEntry::updated(&before, &receipt)));

        Ok(receipt)
    }

    /// Delete a receipt. Deleting an unknown id is a no-op.
    ///
    /// Returns whether a receipt was removed.
    pub fn delete(&self, id: &ReceiptId) -> ReceiptResult<bool> {
        let Some(removed) = self.storage.receipts.remove(id)? else {
            debug!(id = %id, "delete of unknown receipt ignored");
            return Ok(false);
        };

        if self.storage.receipts.edit_target()?.as_ref() == Some(id) {
            self.storage.receipts.set_edit_target(None)?;
        }

        info!(id = %removed.id, "receipt deleted");
        self.audit(self.storage.record(&AuditEntry::deleted(&removed)));

        Ok(true)
    }

    /// All receipts, newest first
    pub fn list(&self) -> ReceiptResult<Vec<Receipt>> {
        self.storage.receipts.get_all()
    }

    /// Get a receipt by id
    pub fn get(&self, id: &ReceiptId) -> ReceiptResult<Option<Receipt>> {
        self.storage.receipts.get(id)
    }

    /// Number of stored receipts
    pub fn count(&self) -> ReceiptResult<usize> {
        self.storage.receipts.count()
    }

    /// Mark a receipt as the active edit target
    pub fn begin_edit(&self, id: &ReceiptId) -> ReceiptResult<Receipt> {
        let receipt = self
            .storage
            .receipts
            .get(id)?
            .ok_or_else(|| ReceiptError::receipt_not_found(id.to_string()))?;
        self.storage.receipts.set_edit_target(Some(id.clone()))?;
        debug!(id = %id, "editing receipt");
        Ok(receipt)
    }

    /// Clear the active edit target
    pub fn cancel_edit(&self) -> ReceiptResult<()> {
        self.storage.receipts.set_edit_target(None)
    }

    /// The active edit target, if any
    pub fn edit_target(&self) -> ReceiptResult<Option<ReceiptId>> {
        self.storage.receipts.edit_target()
    }

    // The store is already mutated by the time the trail is written
    fn audit(&self, result: ReceiptResult<()>) {
        if let Err(e) = result {
            warn!(error = %e, "failed to write audit entry");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::config::paths::ReceiptPaths;
    use crate::models::FixedClock;
    use chrono::NaiveDate;
    use proptest::prelude::*;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ReceiptPaths::with_base_dir(temp_dir.path().to_path_buf());
        let stamp = NaiveDate::from_ymd_opt(2026, 10, 16)
            .unwrap()
            .and_hms_opt(14, 5, 9)
            .unwrap();
        let storage = Storage::new(paths).unwrap().with_clock(FixedClock(stamp));
        (temp_dir, storage)
    }

    fn titles(service: &ReceiptService) -> Vec<String> {
        service.list().unwrap().into_iter().map(|r| r.title).collect()
    }

    #[test]
    fn test_create_receipt() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ReceiptService::new(&storage);

        let receipt = service.create("Groceries", "Milk\nEggs").unwrap();

        assert_eq!(receipt.title, "Groceries");
        assert_eq!(receipt.note, "Milk\nEggs");
        assert!(!receipt.id.as_str().is_empty());
        assert_eq!(receipt.date, "16.10.2026");
        assert_eq!(receipt.time, "14:05:09");
        assert_eq!(service.list().unwrap(), vec![receipt]);
    }

    #[test]
    fn test_create_with_system_clock_stamps_today() {
        let temp_dir = TempDir::new().unwrap();
        let storage =
            Storage::new(ReceiptPaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();
        let service = ReceiptService::new(&storage);

        let before = chrono::Local::now().naive_local();
        let receipt = service.create("Now", "").unwrap();
        let after = chrono::Local::now().naive_local();

        let dates = [
            before.format("%d.%m.%Y").to_string(),
            after.format("%d.%m.%Y").to_string(),
        ];
        assert!(dates.contains(&receipt.date));
        assert_eq!(receipt.time.len(), 8);
    }

    #[test]
    fn test_create_empty_title_fails() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ReceiptService::new(&storage);
        service.create("Existing", "").unwrap();
        let before = service.list().unwrap();

        for title in ["", "   ", "\t\n"] {
            let err = service.create(title, "note").unwrap_err();
            assert!(err.is_validation());
        }

        assert_eq!(service.list().unwrap(), before);
    }

    #[test]
    fn test_newest_first() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ReceiptService::new(&storage);

        service.create("A", "").unwrap();
        service.create("B", "").unwrap();

        assert_eq!(titles(&service), vec!["B", "A"]);
    }

    #[test]
    fn test_update_changes_only_title_and_note() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ReceiptService::new(&storage);

        let a = service.create("A", "first").unwrap();
        service.create("B", "").unwrap();

        let updated = service.update(&a.id, "A2", "second").unwrap();

        assert_eq!(updated.id, a.id);
        assert_eq!(updated.date, a.date);
        assert_eq!(updated.time, a.time);
        assert_eq!(updated.title, "A2");
        assert_eq!(updated.note, "second");
        assert_eq!(titles(&service), vec!["B", "A2"]);
    }

    #[test]
    fn test_update_unknown_id() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ReceiptService::new(&storage);

        let err = service.update(&ReceiptId::new(), "T", "").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_update_empty_title_leaves_record() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ReceiptService::new(&storage);
        let a = service.create("A", "note").unwrap();

        let err = service.update(&a.id, " ", "changed").unwrap_err();

        assert!(err.is_validation());
        assert_eq!(service.get(&a.id).unwrap(), Some(a));
    }

    #[test]
    fn test_delete_is_idempotent() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ReceiptService::new(&storage);
        let a = service.create("A", "").unwrap();
        let b = service.create("B", "").unwrap();

        assert!(service.delete(&a.id).unwrap());
        let after_first = service.list().unwrap();
        assert!(!service.delete(&a.id).unwrap());

        assert_eq!(service.list().unwrap(), after_first);
        assert_eq!(after_first, vec![b]);
    }

    #[test]
    fn test_delete_on_empty_store() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ReceiptService::new(&storage);

        assert!(!service.delete(&ReceiptId::new()).unwrap());
        assert_eq!(service.count().unwrap(), 0);
    }

    #[test]
    fn test_edit_target_lifecycle() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ReceiptService::new(&storage);
        let a = service.create("A", "").unwrap();

        assert_eq!(service.begin_edit(&a.id).unwrap(), a);
        assert_eq!(service.edit_target().unwrap(), Some(a.id.clone()));

        service.cancel_edit().unwrap();
        assert!(service.edit_target().unwrap().is_none());
        assert_eq!(service.count().unwrap(), 1);
    }

    #[test]
    fn test_begin_edit_unknown_keeps_target() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ReceiptService::new(&storage);
        let a = service.create("A", "").unwrap();
        service.begin_edit(&a.id).unwrap();

        assert!(service.begin_edit(&ReceiptId::new()).unwrap_err().is_not_found());
        assert_eq!(service.edit_target().unwrap(), Some(a.id));
    }

    #[test]
    fn test_deleting_edit_target_clears_it() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ReceiptService::new(&storage);
        let a = service.create("A", "").unwrap();
        service.begin_edit(&a.id).unwrap();

        service.delete(&a.id).unwrap();

        assert!(service.edit_target().unwrap().is_none());
    }

    #[test]
    fn test_audit_trail() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ReceiptService::new(&storage);

        let a = service.create("X", "").unwrap();
        service.update(&a.id, "Y", "").unwrap();
        service.delete(&a.id).unwrap();
        service.delete(&a.id).unwrap();

        let entries = storage.audit().unwrap().read_all().unwrap();
        let ops: Vec<_> = entries.iter().map(|e| e.operation).collect();
        assert_eq!(ops, vec![Operation::Create, Operation::Update, Operation::Delete]);
        assert_eq!(entries[1].changes.as_deref(), Some("title: \"X\" -> \"Y\""));
        assert!(entries.iter().all(|e| e.receipt_id == a.id.to_string()));
    }

    proptest! {
        #[test]
        fn prop_list_is_reverse_insertion_order(
            raw in proptest::collection::vec("[a-zA-Zа-я0-9 ]{0,12}", 0..20)
        ) {
            let (_temp_dir, storage) = create_test_storage();
            let service = ReceiptService::new(&storage);

            let mut created = Vec::new();
            for (i, title) in raw.iter().enumerate() {
                // Prefix keeps every title non-empty
                let title = format!("{}{}", i, title);
                created.push(service.create(&title, "").unwrap().id);
            }

            created.reverse();
            let listed: Vec<_> = service.list().unwrap().into_iter().map(|r| r.id).collect();
            prop_assert_eq!(listed, created);
        }
    }
}
