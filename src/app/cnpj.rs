//! # CNPJ Input Handling
//!
//! Normalizes raw user input into a bare digit string and validates it
//! before a lookup is allowed. Validation is length-only; the CNPJ check
//! digits are not verified.

use crate::app::errors::ValidationError;

/// Number of digits in a full CNPJ
pub const CNPJ_DIGITS: usize = 14;

/// Normalize raw input to at most 14 ASCII digits
///
/// Strips punctuation and anything else that is not a digit, preserving
/// order, then truncates to the first 14 digits. Idempotent.
pub fn normalize(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(CNPJ_DIGITS)
        .collect()
}

/// Validate a normalized CNPJ for lookup
///
/// Accepts exactly 14 ASCII digits and returns the same slice so callers
/// can chain into the lookup client.
pub fn validate(number: &str) -> Result<&str, ValidationError> {
    if number.len() == CNPJ_DIGITS && number.chars().all(|c| c.is_ascii_digit()) {
        Ok(number)
    } else {
        Err(ValidationError::WrongLength {
            found: number.chars().filter(|c| c.is_ascii_digit()).count(),
        })
    }
}
