//! RUT services
//!
//! Pure functions over strings and domain models. No I/O.
//!
//! - [`check_digit`] - Módulo 11 check digit computation
//! - [`rut`] - Cleaning, formatting and validation of RUT strings

pub mod check_digit;
pub mod rut;

pub use check_digit::compute_check_digit;
pub use rut::{clean_rut, format_rut, format_rut_opt, format_rut_with, validate_rut, validate_rut_opt};
