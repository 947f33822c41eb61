//! Módulo 11 check digit computation
//!
//! Each digit of the body, starting from the least significant one, is
//! multiplied by a weight cycling through 2, 3, 4, 5, 6, 7. The check digit is
//! derived from `11 - (sum mod 11)`.

use crate::core::models::CheckDigit;

/// First weight applied to the rightmost digit
const FIRST_WEIGHT: u32 = 2;

/// Last weight before wrapping back to [`FIRST_WEIGHT`]
const LAST_WEIGHT: u32 = 7;

/// Compute the check digit for a RUT body.
///
/// Returns `None` unless `body` is non-empty and made only of ASCII digits.
///
/// ```
/// use rutcheck::{CheckDigit, compute_check_digit};
///
/// assert_eq!(compute_check_digit("12345678"), CheckDigit::digit(5));
/// assert_eq!(compute_check_digit("10000013"), Some(CheckDigit::K));
/// assert_eq!(compute_check_digit("12a"), None);
/// ```
#[must_use]
pub fn compute_check_digit(body: &str) -> Option<CheckDigit> {
    if body.is_empty() || !body.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    Some(weighted_check_digit(body))
}

/// Módulo 11 over a body already known to be ASCII digits
pub(crate) fn weighted_check_digit(body: &str) -> CheckDigit {
    let mut sum = 0;
    let mut weight = FIRST_WEIGHT;
    for b in body.bytes().rev() {
        let digit = u32::from(b - b'0');
        // Reduced on every step so long bodies cannot overflow
        sum = (sum + digit * weight) % 11;
        weight = if weight == LAST_WEIGHT { FIRST_WEIGHT } else { weight + 1 };
    }

    // sum is in 0..11, so the remainder is always in 1..=11
    CheckDigit::from_remainder(11 - sum).unwrap_or(CheckDigit::K)
}
