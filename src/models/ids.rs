//! Receipt identifiers
//!
//! Receipt ids are short base-36 strings (nine characters) cut from the
//! random bits of a v4 UUID. They are informally unlikely to collide; the
//! repository re-rolls an id that is already taken in the current session.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Number of characters in a generated id
pub const ID_LEN: usize = 9;

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Opaque identifier of a receipt
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptId(String);

impl ReceiptId {
    /// Create a new random ID
    pub fn new() -> Self {
        let mut bits = Uuid::new_v4().as_u128();
        let mut id = String::with_capacity(ID_LEN);
        for _ in 0..ID_LEN {
            id.push(ALPHABET[(bits % 36) as usize] as char);
            bits /= 36;
        }
        Self(id)
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The id as printed on the receipt
    pub fn to_uppercase(&self) -> String {
        self.0.to_uppercase()
    }
}

impl Default for ReceiptId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Error returned when parsing an empty or malformed id
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid receipt id: {0:?}")]
pub struct ParseReceiptIdError(String);

impl FromStr for ReceiptId {
    type Err = ParseReceiptIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || !s.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ParseReceiptIdError(s.to_string()));
        }
        // Printed receipts show the id upper-cased
        Ok(Self(s.to_ascii_lowercase()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_shape() {
        let id = ReceiptId::new();
        assert_eq!(id.as_str().len(), ID_LEN);
        assert!(id
            .as_str()
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn test_ids_differ() {
        let id1 = ReceiptId::new();
        let id2 = ReceiptId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_uppercase() {
        let id: ReceiptId = "k3j9x0a1b".parse().unwrap();
        assert_eq!(id.to_uppercase(), "K3J9X0A1B");
        assert_eq!(id.to_string(), "k3j9x0a1b");
    }

    #[test]
    fn test_parse_accepts_printed_form() {
        let id: ReceiptId = "K3J9X0A1B".parse().unwrap();
        assert_eq!(id.as_str(), "k3j9x0a1b");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<ReceiptId>().is_err());
        assert!("ab-cd".parse::<ReceiptId>().is_err());
    }

    #[test]
    fn test_id_serialization() {
        let id = ReceiptId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id));
    }
}
