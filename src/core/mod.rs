//! Core domain logic for rutcheck
//!
//! Pure logic with no I/O dependencies, safe to call from any thread.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Rut, CheckDigit, FormatStyle)
//! - `services/` - Formatting, validation and check digit computation

pub mod models;
pub mod services;
