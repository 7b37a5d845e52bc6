//! In-memory receipt repository
//!
//! Holds the session's receipts newest first together with the active edit
//! target. Nothing here touches disk; the collection lives as long as the
//! repository does.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::ReceiptError;
use crate::models::{Receipt, ReceiptId};

/// Repository for the session's receipts
#[derive(Default)]
pub struct ReceiptRepository {
    /// Receipts, newest first
    data: RwLock<Vec<Receipt>>,
    /// Receipt currently being edited, if any
    edit_target: RwLock<Option<ReceiptId>>,
}

impl ReceiptRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Receipt>>, ReceiptError> {
        self.data
            .read()
            .map_err(|e| ReceiptError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Receipt>>, ReceiptError> {
        self.data
            .write()
            .map_err(|e| ReceiptError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Generate an id not used by any stored receipt
    pub fn fresh_id(&self) -> Result<ReceiptId, ReceiptError> {
        let data = self.read()?;
        loop {
            let id = ReceiptId::new();
            if !data.iter().any(|r| r.id == id) {
                return Ok(id);
            }
        }
    }

    /// Insert a receipt at the head of the collection
    pub fn insert_front(&self, receipt: Receipt) -> Result<(), ReceiptError> {
        self.write()?.insert(0, receipt);
        Ok(())
    }

    /// Replace the stored receipt with the same id, keeping its position.
    /// Returns the previous value, or `None` if no receipt has that id.
    pub fn replace(&self, receipt: Receipt) -> Result<Option<Receipt>, ReceiptError> {
        let mut data = self.write()?;
        Ok(data
            .iter_mut()
            .find(|r| r.id == receipt.id)
            .map(|slot| std::mem::replace(slot, receipt)))
    }

    /// Remove a receipt by id, returning it if it was present
    pub fn remove(&self, id: &ReceiptId) -> Result<Option<Receipt>, ReceiptError> {
        let mut data = self.write()?;
        let removed = data
            .iter()
            .position(|r| &r.id == id)
            .map(|index| data.remove(index));
        Ok(removed)
    }

    /// Get a receipt by id
    pub fn get(&self, id: &ReceiptId) -> Result<Option<Receipt>, ReceiptError> {
        Ok(self.read()?.iter().find(|r| &r.id == id).cloned())
    }

    /// Snapshot of all receipts, newest first
    pub fn get_all(&self) -> Result<Vec<Receipt>, ReceiptError> {
        Ok(self.read()?.clone())
    }

    /// Number of stored receipts
    pub fn count(&self) -> Result<usize, ReceiptError> {
        Ok(self.read()?.len())
    }

    /// Current edit target
    pub fn edit_target(&self) -> Result<Option<ReceiptId>, ReceiptError> {
        let target = self
            .edit_target
            .read()
            .map_err(|e| ReceiptError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(target.clone())
    }

    /// Set or clear the edit target
    pub fn set_edit_target(&self, id: Option<ReceiptId>) -> Result<(), ReceiptError> {
        let mut target = self
            .edit_target
            .write()
            .map_err(|e| ReceiptError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *target = id;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn receipt(title: &str) -> Receipt {
        let stamp = NaiveDate::from_ymd_opt(2026, 10, 16)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        Receipt::new(ReceiptId::new(), title, "", stamp)
    }

    #[test]
    fn test_insert_front_orders_newest_first() {
        let repo = ReceiptRepository::new();
        repo.insert_front(receipt("A")).unwrap();
        repo.insert_front(receipt("B")).unwrap();

        let titles: Vec<_> = repo.get_all().unwrap().into_iter().map(|r| r.title).collect();
        assert_eq!(titles, vec!["B", "A"]);
        assert_eq!(repo.count().unwrap(), 2);
    }

    #[test]
    fn test_replace_keeps_position() {
        let repo = ReceiptRepository::new();
        let a = receipt("A");
        repo.insert_front(a.clone()).unwrap();
        repo.insert_front(receipt("B")).unwrap();

        let mut edited = a.clone();
        edited.edit("A2", "note");
        let previous = repo.replace(edited).unwrap();

        assert_eq!(previous, Some(a));
        let all = repo.get_all().unwrap();
        assert_eq!(all[1].title, "A2");
    }

    #[test]
    fn test_replace_missing_returns_none() {
        let repo = ReceiptRepository::new();
        assert!(repo.replace(receipt("ghost")).unwrap().is_none());
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_remove() {
        let repo = ReceiptRepository::new();
        let a = receipt("A");
        repo.insert_front(a.clone()).unwrap();

        assert_eq!(repo.remove(&a.id).unwrap(), Some(a.clone()));
        assert_eq!(repo.remove(&a.id).unwrap(), None);
        assert!(repo.get(&a.id).unwrap().is_none());
    }

    #[test]
    fn test_snapshot_is_detached() {
        let repo = ReceiptRepository::new();
        repo.insert_front(receipt("A")).unwrap();
        let snapshot = repo.get_all().unwrap();

        repo.insert_front(receipt("B")).unwrap();
        assert_eq!(snapshot.len(), 1);
    }

    #[test]
    fn test_fresh_id_not_taken() {
        let repo = ReceiptRepository::new();
        let a = receipt("A");
        repo.insert_front(a.clone()).unwrap();
        assert_ne!(repo.fresh_id().unwrap(), a.id);
    }

    #[test]
    fn test_edit_target() {
        let repo = ReceiptRepository::new();
        assert!(repo.edit_target().unwrap().is_none());

        let id = ReceiptId::new();
        repo.set_edit_target(Some(id.clone())).unwrap();
        assert_eq!(repo.edit_target().unwrap(), Some(id));

        repo.set_edit_target(None).unwrap();
        assert!(repo.edit_target().unwrap().is_none());
    }
}
