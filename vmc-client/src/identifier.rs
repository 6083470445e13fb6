//! Identifier generation and lock-state management
//!
//! SKUs and barcodes are generated locally; batch numbers only ever come
//! from the backend. Uniqueness is not guaranteed here - the backend owns
//! that if it matters.

use rand::Rng;

/// The three generated product identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
    Batch,
    Sku,
    Barcode,
}

/// Standard UPC-A mod-10 check digit for an 11-digit prefix.
///
/// Digits at even 0-based indices (odd 1-based positions) are weighted 3.
pub fn upc_check_digit(digits: &[u8; 11]) -> u8 {
    let total: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| u32::from(d) * if i % 2 == 0 { 3 } else { 1 })
        .sum();
    ((10 - (total % 10)) % 10) as u8
}

/// Generate a random UPC-A barcode: 11 random digits plus the check digit.
pub fn generate_barcode() -> String {
    let mut rng = rand::thread_rng();
    let mut digits = [0u8; 11];
    for d in &mut digits {
        *d = rng.gen_range(0..10);
    }
    let mut barcode: String = digits.iter().map(|d| char::from(b'0' + d)).collect();
    barcode.push(char::from(b'0' + upc_check_digit(&digits)));
    barcode
}

/// Generate a random SKU: 2 uppercase letters followed by 6 digits.
pub fn generate_sku() -> String {
    let mut rng = rand::thread_rng();
    let mut sku = String::with_capacity(8);
    for _ in 0..2 {
        sku.push(char::from(b'A' + rng.gen_range(0..26)));
    }
    for _ in 0..6 {
        sku.push(char::from(b'0' + rng.gen_range(0..10)));
    }
    sku
}

/// A form field holding a generated identifier
///
/// Locked (the default) means machine-generated: regeneration is allowed
/// and the latest generated value wins, while direct edits are rejected.
/// Unlocked flips both: the user may type freely and programmatic
/// regeneration is suppressed.
#[derive(Debug, Clone)]
pub struct IdentifierField {
    kind: IdentifierKind,
    value: String,
    locked: bool,
}

impl IdentifierField {
    pub fn new(kind: IdentifierKind) -> Self {
        Self {
            kind,
            value: String::new(),
            locked: true,
        }
    }

    /// Field pre-filled from an existing product (edit page)
    pub fn with_value(kind: IdentifierKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
            locked: true,
        }
    }

    pub fn kind(&self) -> IdentifierKind {
        self.kind
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Toggle the edit checkbox; unlocking disables the regenerate action.
    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    pub fn can_regenerate(&self) -> bool {
        self.locked
    }

    /// Accept a machine-generated value; rejected while unlocked.
    pub fn apply_generated(&mut self, value: impl Into<String>) -> bool {
        if !self.locked {
            tracing::debug!(kind = ?self.kind, "generated value suppressed while unlocked");
            return false;
        }
        self.value = value.into();
        true
    }

    /// Accept a user edit; rejected while locked.
    pub fn set_user_value(&mut self, value: impl Into<String>) -> bool {
        if self.locked {
            return false;
        }
        self.value = value.into();
        true
    }
}
