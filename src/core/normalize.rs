//! Input normalization.
//!
//! Turns raw, possibly decorated text into a digit-only body and, when
//! required, a check digit. Thousands separators (`.`) are decorative:
//! `9.868.503-0`, `9868503-0` and `98685030` all normalize to the same
//! pair. Dots must still sit on thousands boundaries, and a dotted RUT
//! must spell out its hyphen.
//!
//! The shape patterns below are the actual guard: anything they accept
//! splits into a non-empty digit body and a valid check character, and
//! anything they reject (a bare `k`, `1-`, `.1`, `1.11`) is malformed.

use crate::core::check_digit::CheckDigit;
use crate::error::{Error, Result};
use regex::Regex;
use std::sync::OnceLock;

/// Thousands separator accepted (and stripped) in raw input.
pub const THOUSANDS_SEPARATOR: char = '.';

/// Separator between the body and the check digit.
pub const CHECK_DIGIT_SEPARATOR: char = '-';

/// Shape of a full RUT: either undotted with an optional hyphen, or
/// grouped by thousands with a mandatory hyphen.
const RUT_PATTERN: &str = r"^(?:[0-9]{1,3}(?:\.[0-9]{3})+-|[0-9]+-?)[0-9kK]$";

/// Shape of a bare body: plain digits or thousands-grouped digits.
const BODY_PATTERN: &str = r"^(?:[0-9]{1,3}(?:\.[0-9]{3})+|[0-9]+)$";

/// Result of normalizing raw input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    /// The body with every separator removed. Never empty, digits only.
    pub body: String,
    /// The supplied check digit, present iff one was required.
    pub check_digit: Option<CheckDigit>,
}

macro_rules! static_regex {
    ($name:ident, $pattern:expr) => {{
        static $name: OnceLock<Regex> = OnceLock::new();
        $name.get_or_init(|| Regex::new($pattern).expect("valid regex"))
    }};
}

#[allow(clippy::expect_used)]
fn rut_shape() -> &'static Regex {
    static_regex!(RUT_SHAPE, RUT_PATTERN)
}

#[allow(clippy::expect_used)]
fn body_shape() -> &'static Regex {
    static_regex!(BODY_SHAPE, BODY_PATTERN)
}

fn reject(raw: &str, reason: &str) -> Error {
    tracing::debug!(input = raw, reason, "rejected RUT input");
    Error::invalid_argument(format!("{reason}: {raw:?}"))
}

/// Rejects absent, empty and whitespace-only input.
fn guard_present(raw: Option<&str>) -> Result<&str> {
    let Some(raw) = raw else {
        tracing::debug!("rejected absent RUT input");
        return Err(Error::invalid_argument("RUT is missing"));
    };
    if raw.trim().is_empty() {
        return Err(reject(raw, "RUT is empty"));
    }
    Ok(raw)
}

/// Normalizes raw input into a body and, if `require_check_digit` is set,
/// a check digit.
///
/// With a check digit required, the body and check digit are split at the
/// hyphen, or, when there is no hyphen, the last character is the check
/// digit. Without one, the whole input is the body.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if the input is absent, empty or
/// whitespace-only, if the body is empty or not made of digits, or if a
/// required check digit is missing or not one of `0-9`, `k`, `K`.
///
/// # Examples
///
/// ```
/// use rut_chile::core::normalize::normalize;
/// use rut_chile::CheckDigit;
///
/// let n = normalize(Some("12.667.869-K"), true).unwrap();
/// assert_eq!(n.body, "12667869");
/// assert_eq!(n.check_digit, Some(CheckDigit::K));
///
/// let n = normalize(Some("00"), true).unwrap();
/// assert_eq!(n.body, "0");
///
/// assert!(normalize(Some("k"), true).is_err());
/// ```
pub fn normalize(raw: Option<&str>, require_check_digit: bool) -> Result<Normalized> {
    let raw = guard_present(raw)?;

    if !require_check_digit {
        if !body_shape().is_match(raw) {
            return Err(reject(raw, "RUT body must contain only digits"));
        }
        return Ok(Normalized {
            body: strip_separators(raw),
            check_digit: None,
        });
    }

    let (body, check_digit) = split_rut(raw)?;
    Ok(Normalized {
        body,
        check_digit: Some(check_digit),
    })
}

/// Shape-checks and splits a raw RUT that must carry a check digit.
///
/// Every input the shape pattern accepts has a non-empty digit body and a
/// single `[0-9kK]` check character, so the split itself cannot fail.
fn split_rut(raw: &str) -> Result<(String, CheckDigit)> {
    if !rut_shape().is_match(raw) {
        return Err(reject(raw, "malformed RUT"));
    }

    let stripped = strip_separators(raw);
    let (body, check) = match stripped.split_once(CHECK_DIGIT_SEPARATOR) {
        Some(parts) => parts,
        // ASCII only past the shape check, so the last byte is a char boundary.
        None => stripped.split_at(stripped.len() - 1),
    };
    debug_assert!(!body.is_empty() && body.bytes().all(|b| b.is_ascii_digit()));
    debug_assert_eq!(check.len(), 1);

    let check_digit = check
        .chars()
        .next()
        .and_then(CheckDigit::from_char)
        .ok_or_else(|| reject(raw, "malformed check digit"))?;

    tracing::trace!(body, %check_digit, "normalized RUT");
    Ok((body.to_string(), check_digit))
}

/// Normalizes input that must carry a check digit.
///
/// # Errors
///
/// See [`normalize`].
pub fn normalize_rut(raw: Option<&str>) -> Result<(String, CheckDigit)> {
    split_rut(guard_present(raw)?)
}

/// Normalizes input that is a bare body.
///
/// # Errors
///
/// See [`normalize`].
pub fn normalize_body(raw: Option<&str>) -> Result<String> {
    normalize(raw, false).map(|n| n.body)
}

fn strip_separators(raw: &str) -> String {
    raw.chars().filter(|&c| c != THOUSANDS_SEPARATOR).collect()
}
