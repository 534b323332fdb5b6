//! RUT value type.
//!
//! A [`Rut`] is a digit-only body paired with the check digit that was
//! supplied for it. It is not necessarily valid: [`Rut::is_valid`] tells
//! whether the stored check digit matches the one derived from the body.

use crate::core::check_digit::CheckDigit;
use crate::core::normalize::{CHECK_DIGIT_SEPARATOR, THOUSANDS_SEPARATOR, normalize_rut};
use crate::error::{Error, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Number of digits per thousands group.
const GROUP_SIZE: usize = 3;

/// Display options for [`Rut::format`].
///
/// # Examples
///
/// ```
/// use rut_chile::{FormatOptions, Rut};
///
/// let rut: Rut = "12667869k".parse().unwrap();
/// let options = FormatOptions::default().with_dots().upper();
/// assert_eq!(rut.format(options), "12.667.869-K");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatOptions {
    /// Group the body's digits in thousands separated by `.`.
    pub with_dots: bool,
    /// Render the letter check digit as `K` instead of `k`.
    pub upper: bool,
}

impl FormatOptions {
    /// Creates options from the two flags.
    #[must_use]
    pub const fn new(with_dots: bool, upper: bool) -> Self {
        Self { with_dots, upper }
    }

    /// Enables thousands grouping.
    #[must_use]
    pub const fn with_dots(mut self) -> Self {
        self.with_dots = true;
        self
    }

    /// Enables the upper-case `K`.
    #[must_use]
    pub const fn upper(mut self) -> Self {
        self.upper = true;
        self
    }
}

/// A Chilean RUT: numeric body plus check digit.
///
/// The body is kept as a digit string so bodies of any length are
/// supported.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Rut {
    body: String,
    check_digit: CheckDigit,
}

impl Rut {
    /// Parses raw input, keeping the supplied check digit as-is.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for malformed input.
    pub fn parse(raw: &str) -> Result<Self> {
        let (body, check_digit) = normalize_rut(Some(raw))?;
        Ok(Self::from_parts(body, check_digit))
    }

    /// Pairs an already-normalized body with a check digit.
    pub(crate) const fn from_parts(body: String, check_digit: CheckDigit) -> Self {
        Self { body, check_digit }
    }

    /// Builds the valid RUT for a digit-only body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `body` is empty or has
    /// non-digit characters.
    pub fn from_body(body: &str) -> Result<Self> {
        let check_digit = CheckDigit::compute(body)?;
        Ok(Self {
            body: body.to_string(),
            check_digit,
        })
    }

    /// The digit-only body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// The check digit as supplied.
    #[must_use]
    pub const fn check_digit(&self) -> CheckDigit {
        self.check_digit
    }

    /// The check digit derived from the body.
    #[must_use]
    pub fn expected_check_digit(&self) -> CheckDigit {
        CheckDigit::from_digits(&self.body)
    }

    /// Whether the supplied check digit matches the body.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.check_digit == self.expected_check_digit()
    }

    /// Renders the RUT as `body-dv`, optionally grouped with dots.
    ///
    /// The check digit is rendered as supplied; it is not checked against
    /// the body.
    #[must_use]
    pub fn format(&self, options: FormatOptions) -> String {
        let body = if options.with_dots {
            group_thousands(&self.body)
        } else {
            self.body.clone()
        };
        format!(
            "{body}{CHECK_DIGIT_SEPARATOR}{}",
            self.check_digit.to_char(options.upper)
        )
    }
}

impl FromStr for Rut {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Rut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(FormatOptions::default()))
    }
}

/// Groups a digit string in thousands from the right, separated by `.`.
///
/// # Examples
///
/// ```
/// use rut_chile::group_thousands;
///
/// assert_eq!(group_thousands("12345678"), "12.345.678");
/// assert_eq!(group_thousands("123"), "123");
/// ```
#[must_use]
pub fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / GROUP_SIZE);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % GROUP_SIZE == 0 {
            grouped.push(THOUSANDS_SEPARATOR);
        }
        grouped.push(c);
    }
    grouped
}
