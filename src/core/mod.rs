//! Core domain for RUT handling.
//!
//! Holds the check-digit algorithm, the input normalizer and the [`Rut`]
//! value type. Everything here is pure: no I/O and no shared state.

pub mod check_digit;
pub mod normalize;
pub mod rut;

pub use check_digit::CheckDigit;
pub use normalize::{Normalized, normalize, normalize_body, normalize_rut};
pub use rut::{FormatOptions, Rut, group_thousands};
