//! Command implementations

mod dv;
mod format;
mod input;
mod validate;

pub use dv::dv;
pub use format::format;
pub use validate::validate;
