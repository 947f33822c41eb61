//! RUT rendering styles

use serde::{Deserialize, Serialize};

/// How a formatted RUT is written out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatStyle {
    /// Thousands separators and hyphen: `12.345.678-5`
    #[default]
    Dotted,
    /// Hyphen only: `12345678-5`
    Plain,
}

impl std::fmt::Display for FormatStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dotted => write!(f, "dotted"),
            Self::Plain => write!(f, "plain"),
        }
    }
}

impl std::str::FromStr for FormatStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dotted" => Ok(Self::Dotted),
            "plain" => Ok(Self::Plain),
            _ => Err(format!("Invalid format style: {s}. Use: dotted, plain")),
        }
    }
}
