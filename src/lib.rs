//! rutcheck - Format and validate Chilean RUT numbers
//!
//! A RUT (Rol Único Tributario) is a numeric body followed by a check digit
//! computed with the módulo 11 algorithm, conventionally written as
//! `12.345.678-5`.
//!
//! ```
//! use rutcheck::{format_rut, validate_rut};
//!
//! assert_eq!(format_rut("123456785"), "12.345.678-5");
//! assert!(validate_rut("12.345.678-5"));
//! assert!(!validate_rut("12.345.678-K"));
//! ```

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod core;
pub mod output;
pub mod paths;

pub use crate::core::models::{CheckDigit, FormatStyle, Rut, RutError};
pub use crate::core::services::{
    clean_rut, compute_check_digit, format_rut, format_rut_opt, format_rut_with, validate_rut,
    validate_rut_opt,
};
