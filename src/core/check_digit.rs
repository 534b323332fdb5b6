//! Modulus-11 check digit.
//!
//! The body's digits are weighted from right to left with the cycle
//! `2, 3, 4, 5, 6, 7, 2, 3, ...`. The check value is `11 - (sum mod 11)`,
//! where `11` maps to `0` and `10` maps to the letter `K`.
//!
//! The sum is reduced modulo 11 at every step, so bodies of any length
//! are handled without overflow.

use crate::error::{Error, Result};
use serde::{Serialize, Serializer};
use std::fmt;

/// First weight applied to the rightmost digit.
const FIRST_WEIGHT: u32 = 2;

/// Largest weight before the cycle wraps back to [`FIRST_WEIGHT`].
const LAST_WEIGHT: u32 = 7;

/// Modulus of the checksum.
const MODULUS: u32 = 11;

/// The check character of a RUT.
///
/// Holds a value in `0..=10`, where 10 is rendered as `K`. Letter case is
/// a presentation concern and is chosen at render time, so `k` and `K`
/// parse to the same value.
///
/// # Examples
///
/// ```
/// use rut_chile::CheckDigit;
///
/// assert_eq!(CheckDigit::compute("12667869").unwrap(), CheckDigit::K);
/// assert_eq!(CheckDigit::from_char('k'), Some(CheckDigit::K));
/// assert_eq!(CheckDigit::K.to_char(true), 'K');
/// assert_eq!(CheckDigit::from_value(11), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CheckDigit(u8);

impl CheckDigit {
    /// The letter check digit, value 10.
    pub const K: Self = Self(10);

    /// Builds a check digit from its value, `None` outside `0..=10`.
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        if value <= 10 { Some(Self(value)) } else { None }
    }

    /// Computes the check digit of a body made of ASCII digits.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `body` is empty or contains
    /// anything other than ASCII digits.
    pub fn compute(body: &str) -> Result<Self> {
        if body.is_empty() {
            return Err(Error::invalid_argument("RUT body is empty"));
        }
        if !body.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::invalid_argument(format!(
                "RUT body must contain only digits: {body:?}"
            )));
        }
        Ok(Self::from_digits(body))
    }

    /// Computes the check digit of a body already known to be all digits.
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn from_digits(body: &str) -> Self {
        debug_assert!(body.bytes().all(|b| b.is_ascii_digit()));

        let mut weight = FIRST_WEIGHT;
        let mut sum = 0u32;
        for byte in body.bytes().rev() {
            let digit = u32::from(byte - b'0');
            sum = (sum + digit * weight) % MODULUS;
            weight += 1;
            if weight > LAST_WEIGHT {
                weight = FIRST_WEIGHT;
            }
        }

        // 11 - sum is in 1..=11; 11 wraps to 0
        Self(((MODULUS - sum) % MODULUS) as u8)
    }

    /// Parses a check character, accepting `0`-`9`, `k` and `K`.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => Some(Self(c as u8 - b'0')),
            'k' | 'K' => Some(Self::K),
            _ => None,
        }
    }

    /// Renders the check digit, upper-casing `K` when `upper` is set.
    ///
    /// Decimal digits are unaffected by `upper`.
    #[must_use]
    pub const fn to_char(self, upper: bool) -> char {
        match self.0 {
            10 if upper => 'K',
            10 => 'k',
            d => (b'0' + d) as char,
        }
    }

    /// Returns the numeric value, `10` for `K`.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for CheckDigit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char(false))
    }
}

impl Serialize for CheckDigit {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_char(self.to_char(false))
    }
}
