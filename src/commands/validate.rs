//! Validate command - check digit verification

use rutcheck::Rut;
use rutcheck::output::{OutputMode, RutValidation, ValidateResult};

use super::input;

/// Validate each RUT, exiting with status 1 if any is invalid
pub fn validate(ruts: Vec<String>, explain: bool, mode: OutputMode) -> anyhow::Result<()> {
    let inputs = input::collect(ruts)?;
    let with_reason = explain || mode == OutputMode::Json;

    let results = inputs
        .into_iter()
        .map(|input| match Rut::parse(&input) {
            Ok(rut) => RutValidation {
                input,
                valid: true,
                formatted: Some(rut.to_string()),
                reason: None,
            },
            Err(err) => {
                log::debug!("{input}: {err}");
                RutValidation {
                    input,
                    valid: false,
                    formatted: None,
                    reason: with_reason.then(|| err.to_string()),
                }
            },
        })
        .collect();

    let result = ValidateResult::new(results);
    result.render(mode);

    if !result.all_valid {
        std::process::exit(1);
    }

    Ok(())
}
