//! UPI Models

use std::sync::LazyLock;

use jiff::Timestamp;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// `local-part@handle`: 2-256 chars of letters, digits, `.`, `-`, `_`,
/// then a 2-64 letter payment handle.
static UPI_ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    #[expect(clippy::unwrap_used, reason = "pattern is a literal, exercised by tests")]
    Regex::new(r"^[A-Za-z0-9._-]{2,256}@[A-Za-z]{2,64}$").unwrap()
});

/// Whether `candidate` is an acceptable UPI payment address.
#[must_use]
pub fn is_valid_upi_id(candidate: &str) -> bool {
    UPI_ID_PATTERN.is_match(candidate)
}

/// The singleton record stored under `upi/current`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpiRecord {
    pub upi_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_address() {
        assert!(is_valid_upi_id("user@bank"));
    }

    #[test]
    fn test_accepts_dotted_local_part() {
        assert!(is_valid_upi_id("first.last-01_x@okicici"));
    }

    #[test]
    fn test_rejects_missing_handle() {
        assert!(!is_valid_upi_id("ab"));
    }

    #[test]
    fn test_rejects_empty_local_part() {
        assert!(!is_valid_upi_id("@bank"));
    }

    #[test]
    fn test_rejects_single_letter_handle() {
        assert!(!is_valid_upi_id("user@b"));
    }

    #[test]
    fn test_rejects_digits_in_handle() {
        assert!(!is_valid_upi_id("user@bank1"));
    }
}
