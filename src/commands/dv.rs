//! Dv command - compute a check digit

use anyhow::Context;
use rutcheck::Rut;
use rutcheck::output::{CheckDigitResult, OutputMode};

/// Print the check digit for a RUT body
pub fn dv(body: &str, mode: OutputMode) -> anyhow::Result<()> {
    let rut = Rut::from_body(body.trim())
        .with_context(|| format!("cannot compute check digit for {body:?}"))?;

    CheckDigitResult {
        body: rut.body().to_string(),
        check_digit: rut.check_digit().to_string(),
        rut: rut.to_string(),
    }
    .render(mode);

    Ok(())
}
