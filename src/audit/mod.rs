//! Audit trail for receipt changes
//!
//! Records every create, update, and delete of a receipt with before/after
//! values in an append-only log. Receipts themselves live only in memory; the
//! trail is what remains of a session afterwards.
//!
//! - `AuditEntry`: one operation with timestamp, receipt id and title, and the
//!   receipt before and/or after.
//! - `AuditLogger`: appends entries to the log file as JSON lines.
//! - `generate_diff`: short human-readable summary of changed fields.
//!
//! ```rust,ignore
//! use receipt::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::updated(&before, &after))?;
//! ```

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
