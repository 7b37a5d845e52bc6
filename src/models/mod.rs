//! Core data models
//!
//! The receipt entity, its identifier, and the clock receipts are stamped with.

pub mod clock;
pub mod ids;
pub mod receipt;

pub use clock::{Clock, FixedClock, SystemClock};
pub use ids::ReceiptId;
pub use receipt::{Receipt, ReceiptValidationError};
