//! Shared test fixtures and helpers
//!
//! The reference check digit below is written independently of the library
//! so tests do not just compare the implementation with itself.

/// Weights applied from the rightmost body digit, repeating
const WEIGHTS: [u32; 6] = [2, 3, 4, 5, 6, 7];

/// Reference módulo 11 check character for an all-digit body
pub fn reference_dv(body: &str) -> char {
    let sum: u32 = body
        .chars()
        .rev()
        .zip(WEIGHTS.iter().cycle())
        .map(|(c, w)| c.to_digit(10).expect("body must be digits") * w)
        .sum();

    match 11 - sum % 11 {
        11 => '0',
        10 => 'K',
        n => char::from_digit(n, 10).expect("remainder is a single digit"),
    }
}

/// Every character that can appear as a check digit
pub const CHECK_CHARS: [char; 11] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'K'];

/// Known valid RUTs in canonical dotted form
pub const VALID_RUTS: [&str; 7] = [
    "12.345.678-5",
    "11.111.111-1",
    "76.086.428-5",
    "5.126.663-3",
    "10.000.013-K",
    "7.654.321-6",
    "1-9",
];
