//! RUT formatting and validation
//!
//! Both entry points are total: [`format_rut`] always returns a best-effort
//! string and [`validate_rut`] always returns a boolean, whatever the input.
//! Use [`Rut::parse`] when the reason for rejection matters.

use crate::core::models::{FormatStyle, Rut};

/// Keep only digits and `K`, uppercased.
///
/// ```
/// assert_eq!(rutcheck::clean_rut(" 12.345.678-k "), "12345678K");
/// ```
#[must_use]
pub fn clean_rut(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, 'K' | 'k'))
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Insert a `.` every three characters counting from the right
pub(crate) fn group_thousands(body: &str) -> String {
    let len = body.chars().count();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in body.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

/// Format a RUT as `12.345.678-5`.
///
/// The input is cleaned with [`clean_rut`]; if fewer than two characters
/// survive, the cleaned string is returned as is. The check digit is not
/// verified, so invalid numbers are formatted too.
///
/// ```
/// use rutcheck::format_rut;
///
/// assert_eq!(format_rut("123456785"), "12.345.678-5");
/// assert_eq!(format_rut("7"), "7");
/// assert_eq!(format_rut(""), "");
/// ```
#[must_use]
pub fn format_rut(input: &str) -> String {
    format_rut_with(input, FormatStyle::Dotted)
}

/// Format a RUT in the given [`FormatStyle`]
#[must_use]
pub fn format_rut_with(input: &str, style: FormatStyle) -> String {
    let cleaned = clean_rut(input);
    if cleaned.len() < 2 {
        return cleaned;
    }

    // Cleaned input is ASCII, so byte slicing is on char boundaries
    let (body, check) = cleaned.split_at(cleaned.len() - 1);
    match style {
        FormatStyle::Dotted => format!("{}-{check}", group_thousands(body)),
        FormatStyle::Plain => format!("{body}-{check}"),
    }
}

/// Format an optional RUT; `None` yields an empty string
#[must_use]
pub fn format_rut_opt(input: Option<&str>) -> String {
    input.map_or_else(String::new, format_rut)
}

/// Check whether a RUT's check digit matches its body.
///
/// Dots and hyphens are ignored and the check character is compared
/// case-insensitively. Any malformed input is simply invalid.
///
/// ```
/// use rutcheck::validate_rut;
///
/// assert!(validate_rut("12.345.678-5"));
/// assert!(validate_rut("12345678-5"));
/// assert!(!validate_rut("12.345.678-4"));
/// assert!(!validate_rut(""));
/// ```
#[must_use]
pub fn validate_rut(input: &str) -> bool {
    match Rut::parse(input) {
        Ok(_) => true,
        Err(err) => {
            log::debug!("rejected RUT {input:?}: {err}");
            false
        },
    }
}

/// Validate an optional RUT; `None` is invalid
#[must_use]
pub fn validate_rut_opt(input: Option<&str>) -> bool {
    input.is_some_and(validate_rut)
}
