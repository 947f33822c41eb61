//! Output formatting for human and JSON modes
//!
//! Command results are plain structs that render either as human-readable
//! text or as machine-parseable JSON.

use serde::Serialize;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// One formatted RUT
#[derive(Debug, Serialize)]
pub struct FormattedRut {
    /// Input as given
    pub input: String,
    /// Formatted result
    pub formatted: String,
}

/// Result of a format operation
#[derive(Debug, Serialize)]
pub struct FormatResult {
    /// Formatted RUTs, in input order
    pub ruts: Vec<FormattedRut>,
}

/// Validation outcome for one RUT
#[derive(Debug, Serialize)]
pub struct RutValidation {
    /// Input as given
    pub input: String,
    /// Whether the check digit matches
    pub valid: bool,
    /// Canonical dotted form, only for valid input
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted: Option<String>,
    /// Why the input was rejected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Result of a validate operation
#[derive(Debug, Serialize)]
pub struct ValidateResult {
    /// True when every input is valid
    pub all_valid: bool,
    /// Number of valid inputs
    pub valid: usize,
    /// Number of invalid inputs
    pub invalid: usize,
    /// Per-input outcomes, in input order
    pub results: Vec<RutValidation>,
}

/// Result of a check digit computation
#[derive(Debug, Serialize)]
pub struct CheckDigitResult {
    /// Body digits without separators
    pub body: String,
    /// Computed check digit
    pub check_digit: String,
    /// Complete RUT in dotted form
    pub rut: String,
}

impl FormatResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        for r in &self.ruts {
            println!("{}", r.formatted);
        }
    }
}

impl ValidateResult {
    /// Build a summary from per-input outcomes
    #[must_use]
    pub fn new(results: Vec<RutValidation>) -> Self {
        let valid = results.iter().filter(|r| r.valid).count();
        let invalid = results.len() - valid;
        Self {
            all_valid: invalid == 0,
            valid,
            invalid,
            results,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        for r in &self.results {
            if r.valid {
                println!("valid    {}", r.formatted.as_deref().unwrap_or(&r.input));
            } else if let Some(reason) = &r.reason {
                println!("invalid  {} ({reason})", r.input);
            } else {
                println!("invalid  {}", r.input);
            }
        }

        if self.results.len() > 1 {
            println!("\n{} valid, {} invalid", self.valid, self.invalid);
        }
    }
}

impl CheckDigitResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.check_digit),
            OutputMode::Json => render_json(self),
        }
    }
}

fn render_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}
