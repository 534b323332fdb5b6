//! # rut-chile
//!
//! Validation, check-digit computation and display formatting for the
//! Chilean national identification number (RUT, *Rol Único Tributario*).
//!
//! A RUT is a numeric body followed by a check character computed with a
//! modulus-11 weighted checksum. The check character is a digit or `K`
//! (case-insensitive).
//!
//! ## Features
//!
//! - **Validation**: [`is_valid_rut`] accepts `9868503-0`, `98685030` and `9.868.503-0`
//! - **Check digit**: [`get_verification_digit`] for bodies of any length
//! - **Formatting**: [`format_rut`] with optional thousands grouping and upper-case `K`
//! - **Typed API**: [`Rut`], [`CheckDigit`] and [`FormatOptions`]
//!
//! ```
//! use rut_chile::{format_rut, get_verification_digit, is_valid_rut};
//!
//! assert!(is_valid_rut("12.667.869-k").unwrap());
//! assert_eq!(get_verification_digit("12667869", true).unwrap(), 'K');
//! assert_eq!(format_rut("123456789k", true, true).unwrap(), "123.456.789-K");
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod core;
pub mod engine;
pub mod error;

// Re-export commonly used types at crate root
pub use error::{Error, Result};

// Re-export core domain types
pub use crate::core::{CheckDigit, FormatOptions, Rut, group_thousands};

// Re-export the entry points
pub use engine::{format_rut, get_verification_digit, is_valid_rut};
