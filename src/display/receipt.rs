//! Receipt display formatting
//!
//! Plain-text renderings of receipts for the CLI and the history view.

use crate::models::Receipt;

/// Single-line preview of a note: first line only, truncated
pub fn note_preview(note: &str, max_len: usize) -> String {
    let mut lines = note.lines();
    let first = lines.next().unwrap_or("");
    if lines.next().is_some() {
        let trimmed = truncate(first, max_len.saturating_sub(1));
        if trimmed.ends_with("...") {
            trimmed
        } else {
            format!("{}…", trimmed)
        }
    } else {
        truncate(first, max_len)
    }
}

/// Format receipt details for display
pub fn format_receipt_details(receipt: &Receipt) -> String {
    let mut output = String::new();

    output.push_str(&format!("Чек №:    {}\n", receipt.id.to_uppercase()));
    output.push_str(&format!("Название: {}\n", receipt.title));
    output.push_str(&format!("Дата:     {}\n", receipt.date));
    output.push_str(&format!("Время:    {}\n", receipt.time));

    if !receipt.note.is_empty() {
        output.push_str("Примечание:\n");
        for line in receipt.note.lines() {
            output.push_str(&format!("  {}\n", line));
        }
    }

    output
}

/// Truncate to at most `max_len` characters, marking the cut with `...`
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}
