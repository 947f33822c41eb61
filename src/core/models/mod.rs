//! Domain models for rutcheck
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Rut`] - A RUT whose check digit has been verified
//! - [`CheckDigit`] - The dígito verificador, `0`-`9` or `K`
//! - [`FormatStyle`] - How a RUT is rendered

mod check_digit;
mod format_style;
mod rut;

pub use check_digit::CheckDigit;
pub use format_style::FormatStyle;
pub use rut::{Rut, RutError};
