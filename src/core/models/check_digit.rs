//! Check digit (dígito verificador)
//!
//! The last character of a RUT: a decimal digit or the letter `K`. The
//! representation is private so only those eleven values can exist.

use serde::{Deserialize, Serialize};

/// Internal value standing for `K`
const K_VALUE: u8 = 10;

/// A RUT check digit
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CheckDigit(u8);

impl CheckDigit {
    /// The letter `K`, used when the módulo 11 remainder is 10
    pub const K: Self = Self(K_VALUE);

    /// A decimal check digit; `None` unless `digit` is in `0..=9`
    #[must_use]
    pub const fn digit(digit: u8) -> Option<Self> {
        if digit < K_VALUE { Some(Self(digit)) } else { None }
    }

    /// Map the módulo 11 result `11 - (sum mod 11)` to a check digit.
    ///
    /// Values outside `1..=11` have no check digit.
    #[must_use]
    pub const fn from_remainder(remainder: u32) -> Option<Self> {
        match remainder {
            11 => Some(Self(0)),
            10 => Some(Self::K),
            #[allow(clippy::cast_possible_truncation)]
            1..=9 => Some(Self(remainder as u8)),
            _ => None,
        }
    }

    /// Parse a single check character, case-insensitively
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'K' | 'k' => Some(Self::K),
            #[allow(clippy::cast_possible_truncation)]
            _ => c.to_digit(10).map(|d| Self(d as u8)),
        }
    }

    /// Numeric value, or `None` for `K`
    #[must_use]
    pub const fn value(self) -> Option<u8> {
        if self.0 < K_VALUE { Some(self.0) } else { None }
    }

    /// Whether this is the letter `K`
    #[must_use]
    pub const fn is_k(self) -> bool {
        self.0 == K_VALUE
    }

    /// The canonical (uppercase) character for this check digit
    #[must_use]
    #[allow(clippy::cast_lossless)]
    pub const fn as_char(self) -> char {
        match char::from_digit(self.0 as u32, 10) {
            Some(c) => c,
            None => 'K',
        }
    }
}

impl std::fmt::Debug for CheckDigit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("CheckDigit").field(&self.as_char()).finish()
    }
}

impl std::fmt::Display for CheckDigit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl std::str::FromStr for CheckDigit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Self::from_char(c).ok_or_else(|| format!("Invalid check digit: {s}. Use: 0-9 or K"))
            },
            _ => Err(format!("Invalid check digit: {s}. Expected a single character")),
        }
    }
}

impl TryFrom<String> for CheckDigit {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CheckDigit> for String {
    fn from(value: CheckDigit) -> Self {
        value.to_string()
    }
}
