//! Public entry points.
//!
//! Thin wrappers over [`crate::core`] taking optional text, so an absent
//! value is rejected the same way as an empty one.

use crate::core::{CheckDigit, FormatOptions, Rut, normalize_body, normalize_rut};
use crate::error::Result;

/// Checks a RUT's check digit against its body.
///
/// Accepts hyphenated (`9868503-0`), undashed (`98685030`) and dotted
/// (`9.868.503-0`) input. The check digit is compared case-insensitively.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidArgument`] for malformed input. A
/// well-formed RUT with the wrong check digit is `Ok(false)`.
///
/// # Examples
///
/// ```
/// use rut_chile::is_valid_rut;
///
/// assert!(is_valid_rut("9868503-0").unwrap());
/// assert!(!is_valid_rut("9868503-1").unwrap());
/// assert!(is_valid_rut(None::<&str>).is_err());
/// ```
pub fn is_valid_rut<'a>(raw: impl Into<Option<&'a str>>) -> Result<bool> {
    let (body, supplied) = normalize_rut(raw.into())?;
    let expected = CheckDigit::from_digits(&body);
    tracing::debug!(%body, %supplied, %expected, "checked RUT");
    Ok(supplied == expected)
}

/// Computes the check digit for a body.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidArgument`] if the body is absent, empty
/// or not made of digits.
///
/// # Examples
///
/// ```
/// use rut_chile::get_verification_digit;
///
/// assert_eq!(get_verification_digit("9868503", false).unwrap(), '0');
/// assert_eq!(get_verification_digit("12667869", true).unwrap(), 'K');
/// ```
pub fn get_verification_digit<'a>(
    body: impl Into<Option<&'a str>>,
    upper: bool,
) -> Result<char> {
    let body = normalize_body(body.into())?;
    let digit = CheckDigit::from_digits(&body);
    tracing::debug!(%body, %digit, "computed check digit");
    Ok(digit.to_char(upper))
}

/// Formats a RUT for display.
///
/// The supplied check digit is kept as-is apart from its case; it is not
/// checked against the body.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidArgument`] for malformed input.
///
/// # Examples
///
/// ```
/// use rut_chile::format_rut;
///
/// assert_eq!(format_rut("12345678", true, false).unwrap(), "1.234.567-8");
/// assert_eq!(format_rut("123456789k", false, true).unwrap(), "123456789-K");
/// ```
pub fn format_rut<'a>(
    raw: impl Into<Option<&'a str>>,
    with_dots: bool,
    upper: bool,
) -> Result<String> {
    let (body, check_digit) = normalize_rut(raw.into())?;
    let rut = Rut::from_parts(body, check_digit);
    Ok(rut.format(FormatOptions::new(with_dots, upper)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_rut() {
        assert!(is_valid_rut("9868503-0").unwrap());
        assert!(!is_valid_rut("9868503-1").unwrap());
        assert!(is_valid_rut(Some("12667869-K")).unwrap());
    }

    #[test]
    fn test_is_valid_rut_absent() {
        let err = is_valid_rut(None::<&str>).unwrap_err();
        assert_eq!(err.to_string(), "invalid argument: RUT is missing");
    }

    #[test]
    fn test_get_verification_digit_casing() {
        assert_eq!(get_verification_digit("12667869", false).unwrap(), 'k');
        assert_eq!(get_verification_digit("12667869", true).unwrap(), 'K');
        assert_eq!(get_verification_digit("9868503", true).unwrap(), '0');
    }

    #[test]
    fn test_get_verification_digit_accepts_grouped_body() {
        assert_eq!(get_verification_digit("9.868.503", false).unwrap(), '0');
    }

    #[test]
    fn test_format_rut_keeps_wrong_check_digit() {
        assert_eq!(format_rut("9868503-1", true, false).unwrap(), "9.868.503-1");
    }

    #[test]
    fn test_format_rut_rejects_malformed() {
        assert!(format_rut("ab", false, false).is_err());
        assert!(format_rut(None::<&str>, true, true).is_err());
    }
}
