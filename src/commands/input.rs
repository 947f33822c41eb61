//! Command input collection

use std::io::{self, BufRead};

/// Use the RUT arguments if any were given, otherwise read stdin.
///
/// Entries are trimmed the same way whichever source they come from.
pub fn collect(args: Vec<String>) -> anyhow::Result<Vec<String>> {
    if !args.is_empty() {
        return Ok(args.into_iter().map(|a| a.trim().to_string()).collect());
    }

    log::debug!("no RUT arguments, reading stdin");
    read_lines(io::stdin().lock())
}

/// One trimmed entry per non-blank line
fn read_lines<R: BufRead>(reader: R) -> anyhow::Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }
    Ok(lines)
}
