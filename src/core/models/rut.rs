//! Strongly typed RUT
//!
//! A [`Rut`] can only be built from input whose check digit matches its body,
//! so holding one is proof that the number is valid.
//!
//! # Examples
//!
//! ```
//! use rutcheck::core::models::{CheckDigit, Rut};
//!
//! let rut = Rut::parse("12.345.678-5").unwrap();
//! assert_eq!(rut.body(), "12345678");
//! assert_eq!(rut.check_digit(), CheckDigit::digit(5).unwrap());
//! assert_eq!(rut.to_string(), "12.345.678-5");
//! assert_eq!(rut.plain(), "12345678-5");
//!
//! assert!(Rut::parse("12.345.678-4").is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::CheckDigit;
use crate::core::services::check_digit::{compute_check_digit, weighted_check_digit};
use crate::core::services::rut::group_thousands;

/// Reasons a string is not a valid RUT
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RutError {
    /// Input was empty
    #[error("empty RUT")]
    Empty,

    /// Fewer than two characters left after removing separators
    #[error("RUT too short: need a body and a check digit")]
    TooShort,

    /// Body contains something other than digits
    #[error("invalid RUT body: {0}")]
    InvalidBody(String),

    /// Check character is not 0-9 or K
    #[error("invalid check digit: {0}")]
    InvalidCheckCharacter(char),

    /// Check digit does not match the body
    #[error("check digit mismatch: expected {expected}, found {found}")]
    Mismatch {
        /// Check digit computed from the body
        expected: CheckDigit,
        /// Check digit present in the input
        found: CheckDigit,
    },
}

/// A validated Chilean RUT
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rut {
    /// Body digits exactly as given, without separators
    body: String,
    check_digit: CheckDigit,
}

impl Rut {
    /// Parse and validate a RUT.
    ///
    /// Dots and hyphens anywhere in the input are ignored; everything else
    /// must be a digit except the final check character.
    pub fn parse(input: &str) -> Result<Self, RutError> {
        if input.is_empty() {
            return Err(RutError::Empty);
        }

        let cleaned: String = input.chars().filter(|c| !matches!(c, '.' | '-')).collect();
        let mut chars = cleaned.chars();
        let last = chars.next_back().ok_or(RutError::TooShort)?;
        let body = chars.as_str();
        if body.is_empty() {
            return Err(RutError::TooShort);
        }

        let expected =
            compute_check_digit(body).ok_or_else(|| RutError::InvalidBody(body.to_string()))?;
        let found = CheckDigit::from_char(last).ok_or(RutError::InvalidCheckCharacter(last))?;

        if expected != found {
            return Err(RutError::Mismatch { expected, found });
        }

        Ok(Self {
            body: body.to_string(),
            check_digit: found,
        })
    }

    /// Build a RUT from its body alone, computing the check digit.
    ///
    /// The body may contain thousands separators (`12.345.678`).
    pub fn from_body(body: &str) -> Result<Self, RutError> {
        let digits: String = body.chars().filter(|c| *c != '.').collect();
        if digits.is_empty() {
            return Err(RutError::Empty);
        }
        let check_digit =
            compute_check_digit(&digits).ok_or_else(|| RutError::InvalidBody(digits.clone()))?;

        Ok(Self {
            body: digits,
            check_digit,
        })
    }

    /// Build a RUT from a numeric body
    #[must_use]
    pub fn from_number(number: u64) -> Self {
        let body = number.to_string();
        let check_digit = weighted_check_digit(&body);
        Self { body, check_digit }
    }

    /// Body digits without separators
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// The check digit
    #[must_use]
    pub const fn check_digit(&self) -> CheckDigit {
        self.check_digit
    }

    /// Body and check digit without thousands separators (`12345678-5`)
    #[must_use]
    pub fn plain(&self) -> String {
        format!("{}-{}", self.body, self.check_digit)
    }
}

impl std::fmt::Display for Rut {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", group_thousands(&self.body), self.check_digit)
    }
}

impl std::str::FromStr for Rut {
    type Err = RutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Rut {
    type Error = RutError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Rut> for String {
    fn from(value: Rut) -> Self {
        value.to_string()
    }
}
