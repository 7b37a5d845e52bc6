//! Audit entries
//!
//! One line of the audit trail: what happened to which receipt, with the
//! receipt as it was before and after.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Receipt;

use super::diff::generate_diff;

/// What was done to the receipt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Operation::Create => "CREATE",
            Operation::Update => "UPDATE",
            Operation::Delete => "DELETE",
        };
        f.write_str(label)
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub receipt_id: String,

    /// Title after the operation, or the removed receipt's title
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<Receipt>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<Receipt>,

    /// Changed fields, for updates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changes: Option<String>,
}

impl AuditEntry {
    fn new(
        operation: Operation,
        subject: &Receipt,
        before: Option<&Receipt>,
        after: Option<&Receipt>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            receipt_id: subject.id.to_string(),
            title: subject.title.clone(),
            before: before.cloned(),
            after: after.cloned(),
            changes: None,
        }
    }

    /// Entry for a newly stored receipt
    pub fn created(receipt: &Receipt) -> Self {
        Self::new(Operation::Create, receipt, None, Some(receipt))
    }

    /// Entry for an edit, summarizing the changed fields
    pub fn updated(before: &Receipt, after: &Receipt) -> Self {
        let mut entry = Self::new(Operation::Update, after, Some(before), Some(after));
        entry.changes = summarize_changes(before, after);
        entry
    }

    /// Entry for a removed receipt
    pub fn deleted(receipt: &Receipt) -> Self {
        Self::new(Operation::Delete, receipt, Some(receipt), None)
    }
}

fn summarize_changes(before: &Receipt, after: &Receipt) -> Option<String> {
    let before = serde_json::to_value(before).ok()?;
    let after = serde_json::to_value(after).ok()?;
    generate_diff(&before, &after)
}

impl fmt::Display for AuditEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} Receipt {} ({})",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.receipt_id.to_uppercase(),
            self.title
        )?;
        if let Some(changes) = &self.changes {
            write!(f, "\n  Changes: {}", changes)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ReceiptId;
    use chrono::NaiveDate;

    fn receipt(title: &str, note: &str) -> Receipt {
        let stamp = NaiveDate::from_ymd_opt(2026, 10, 16)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap();
        Receipt::new("k3j9x0a1b".parse::<ReceiptId>().unwrap(), title, note, stamp)
    }

    #[test]
    fn test_created_entry() {
        let r = receipt("Groceries", "Milk");
        let entry = AuditEntry::created(&r);

        assert_eq!(entry.operation, Operation::Create);
        assert_eq!(entry.receipt_id, "k3j9x0a1b");
        assert!(entry.before.is_none());
        assert_eq!(entry.after, Some(r));
        assert!(entry.changes.is_none());
    }

    #[test]
    fn test_updated_entry_summarizes_changes() {
        let before = receipt("Taxi", "");
        let mut after = before.clone();
        after.edit("Такси", "");

        let entry = AuditEntry::updated(&before, &after);

        assert_eq!(entry.title, "Такси");
        assert_eq!(entry.changes.as_deref(), Some("title: \"Taxi\" -> \"Такси\""));
        assert_eq!(
            entry.to_string().lines().nth(1),
            Some("  Changes: title: \"Taxi\" -> \"Такси\"")
        );
    }

    #[test]
    fn test_deleted_entry_keeps_before() {
        let r = receipt("Groceries", "");
        let entry = AuditEntry::deleted(&r);

        assert_eq!(entry.operation, Operation::Delete);
        assert_eq!(entry.before, Some(r));
        assert!(entry.after.is_none());
    }

    #[test]
    fn test_serialized_line() {
        let entry = AuditEntry::created(&receipt("Groceries", ""));
        let json = serde_json::to_string(&entry).unwrap();

        assert!(json.contains("\"operation\":\"create\""));
        assert!(!json.contains("before"));
        assert!(!json.contains("changes"));

        let text = entry.to_string();
        assert!(text.contains("CREATE Receipt K3J9X0A1B (Groceries)"));
    }
}
