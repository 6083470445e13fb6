//! Identifier payloads and format validators
//!
//! Batch numbers are generated server-side and treated as opaque by the
//! client; the validators here exist for display-side checks only.

use serde::{Deserialize, Serialize};

/// Response of `POST /api/generate_batch`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchNumberResponse {
    pub batch_number: String,
}

/// Batch numbers are 8 chars of uppercase letters and digits.
pub fn is_valid_batch_number(s: &str) -> bool {
    s.len() == 8 && s.bytes().all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
}

/// SKUs are 2 uppercase letters followed by 6 digits.
pub fn is_valid_sku(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 8
        && bytes[..2].iter().all(|b| b.is_ascii_uppercase())
        && bytes[2..].iter().all(|b| b.is_ascii_digit())
}

/// UPC-A barcodes are exactly 12 digits.
pub fn is_valid_barcode(s: &str) -> bool {
    s.len() == 12 && s.bytes().all(|b| b.is_ascii_digit())
}
