//! Receipt model
//!
//! A receipt is a titled note stamped with the local date and time at which it
//! was created. The stamp uses a fixed day-month-year / 24-hour convention so
//! output does not depend on the host locale.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ReceiptId;

/// Date format printed on receipts (`16.10.2026`)
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Time format printed on receipts (`14:05:09`)
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// A stored receipt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// Identifier assigned at creation
    pub id: ReceiptId,

    /// Display title (required)
    pub title: String,

    /// Free-form body, may span several lines
    #[serde(default)]
    pub note: String,

    /// Creation date, `DD.MM.YYYY`
    pub date: String,

    /// Creation time, `HH:MM:SS`
    pub time: String,
}

impl Receipt {
    /// Create a receipt stamped with `created_at`
    pub fn new(
        id: ReceiptId,
        title: impl Into<String>,
        note: impl Into<String>,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            note: note.into(),
            date: created_at.format(DATE_FORMAT).to_string(),
            time: created_at.format(TIME_FORMAT).to_string(),
        }
    }

    /// Replace the editable fields. Id and stamp stay as they were.
    pub fn edit(&mut self, title: impl Into<String>, note: impl Into<String>) {
        self.title = title.into();
        self.note = note.into();
    }

    /// Validate the receipt
    pub fn validate(&self) -> Result<(), ReceiptValidationError> {
        validate_title(&self.title)
    }
}

/// Check a submitted title
///
/// A byte order mark counts as blank alongside Unicode whitespace.
pub fn validate_title(title: &str) -> Result<(), ReceiptValidationError> {
    let blank = title
        .chars()
        .all(|c| c.is_whitespace() || c == '\u{feff}');
    if blank {
        return Err(ReceiptValidationError::EmptyTitle);
    }
    Ok(())
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} {})", self.title, self.date, self.time)
    }
}

/// Validation errors for receipts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReceiptValidationError {
    EmptyTitle,
}

impl fmt::Display for ReceiptValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "Введите название чека"),
        }
    }
}

impl std::error::Error for ReceiptValidationError {}
