//! Service layer
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, id and timestamp assignment, and auditing.

pub mod receipt;

pub use receipt::ReceiptService;
