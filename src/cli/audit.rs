//! Audit CLI commands

use crate::error::ReceiptResult;
use crate::storage::Storage;

/// Handle `receipt audit`
pub fn handle_audit_command(storage: &Storage, limit: usize) -> ReceiptResult<()> {
    let Some(logger) = storage.audit() else {
        println!("Audit trail is disabled in settings.");
        return Ok(());
    };

    let entries = logger.read_recent(limit)?;
    if entries.is_empty() {
        println!("No audit entries found.");
        return Ok(());
    }

    println!(
        "Showing {} of {} entries from {}",
        entries.len(),
        logger.entry_count()?,
        logger.path().display()
    );
    println!();
    for entry in entries {
        println!("{}", entry);
    }

    Ok(())
}
