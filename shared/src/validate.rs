//! Field validation rules
//!
//! Format checks applied to records before they are sent to the backend.
//! The backend enforces the same rules; validating here keeps a bad record
//! from costing a round trip.

use once_cell::sync::Lazy;
use regex::Regex;

/// Taxpayer number: exactly 14 digits
pub static INN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{14}$").unwrap());

/// Identity document: two uppercase letters followed by 7 digits
pub static DOCUMENT_ID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]{2}\d{7}$").unwrap());

pub fn is_valid_inn(value: &str) -> bool {
    INN_RE.is_match(value)
}

pub fn is_valid_document_id(value: &str) -> bool {
    DOCUMENT_ID_RE.is_match(value)
}
