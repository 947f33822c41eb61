//! Format command - canonical rendering of RUTs

use rutcheck::FormatStyle;
use rutcheck::format_rut_with;
use rutcheck::output::{FormatResult, FormattedRut, OutputMode};

use super::input;

/// Format each RUT without checking its check digit
pub fn format(ruts: Vec<String>, style: FormatStyle, mode: OutputMode) -> anyhow::Result<()> {
    let inputs = input::collect(ruts)?;
    log::debug!("formatting {} RUT(s) in {style} style", inputs.len());

    let ruts = inputs
        .into_iter()
        .map(|input| FormattedRut {
            formatted: format_rut_with(&input, style),
            input,
        })
        .collect();

    FormatResult { ruts }.render(mode);
    Ok(())
}
