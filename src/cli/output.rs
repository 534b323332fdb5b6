//! Output formatting for CLI commands.
//!
//! Supports text and JSON output formats.

use crate::core::{CheckDigit, Rut};
use crate::error::Error;
use serde::Serialize;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output.
    Json,
}

impl OutputFormat {
    /// Parses format from string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Outcome of checking one RUT.
#[derive(Debug, Clone, Serialize)]
pub struct Validation {
    /// The input exactly as given.
    pub input: String,
    /// The parsed RUT.
    pub rut: Rut,
    /// The check digit the body calls for.
    pub expected_check_digit: CheckDigit,
    /// Whether the supplied check digit matches.
    pub valid: bool,
}

impl Validation {
    /// Checks a parsed RUT.
    #[must_use]
    pub fn new(input: &str, rut: Rut) -> Self {
        let expected_check_digit = rut.expected_check_digit();
        Self {
            input: input.to_string(),
            valid: rut.check_digit() == expected_check_digit,
            rut,
            expected_check_digit,
        }
    }
}

/// Formats a validation result.
#[must_use]
pub fn format_validation(result: &Validation, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format_validation_text(result),
        OutputFormat::Json => format_json(result),
    }
}

fn format_validation_text(result: &Validation) -> String {
    if result.valid {
        format!("{}: valid\n", result.input)
    } else {
        format!(
            "{}: invalid (expected check digit {})\n",
            result.input, result.expected_check_digit
        )
    }
}

/// Formats a computed check digit.
#[must_use]
pub fn format_digit(body: &str, digit: char, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format!("{digit}\n"),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct DigitOutput<'a> {
                body: &'a str,
                check_digit: char,
            }
            format_json(&DigitOutput {
                body,
                check_digit: digit,
            })
        }
    }
}

/// Formats a reformatted RUT.
#[must_use]
pub fn format_formatted(input: &str, formatted: &str, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format!("{formatted}\n"),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct FormatOutput<'a> {
                input: &'a str,
                formatted: &'a str,
            }
            format_json(&FormatOutput { input, formatted })
        }
    }
}

/// Formats an error.
#[must_use]
pub fn format_error(error: &Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => error.to_string(),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct ErrorOutput {
                error: String,
            }
            format_json(&ErrorOutput {
                error: error.to_string(),
            })
        }
    }
}

fn format_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}
