//! CLI command implementations.
//!
//! Each command produces its rendered output as a string; printing is
//! left to the binary.

use crate::cli::output::{OutputFormat, Validation, format_digit, format_formatted, format_validation};
use crate::cli::parser::{Cli, Commands};
use crate::core::Rut;
use crate::engine::{format_rut, get_verification_digit};
use crate::error::Result;

/// Rendered output of a command and whether it succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Text to print on stdout.
    pub text: String,
    /// `false` when the command ran but its answer is negative.
    pub success: bool,
}

impl CommandOutput {
    fn ok(text: String) -> Self {
        Self {
            text,
            success: true,
        }
    }
}

/// Executes the CLI command.
///
/// # Arguments
///
/// * `cli` - Parsed CLI arguments.
///
/// # Errors
///
/// Returns an error if the input is malformed.
pub fn execute(cli: &Cli) -> Result<CommandOutput> {
    let format = OutputFormat::parse(&cli.format);

    match &cli.command {
        Commands::Validate { rut } => cmd_validate(rut, format),
        Commands::Digit { body, upper } => cmd_digit(body, *upper, format),
        Commands::Format { rut, dots, upper } => cmd_format(rut, *dots, *upper, format),
    }
}

fn cmd_validate(input: &str, format: OutputFormat) -> Result<CommandOutput> {
    let result = Validation::new(input, Rut::parse(input)?);
    tracing::debug!(input, valid = result.valid, "validated RUT");

    Ok(CommandOutput {
        text: format_validation(&result, format),
        success: result.valid,
    })
}

fn cmd_digit(body: &str, upper: bool, format: OutputFormat) -> Result<CommandOutput> {
    let digit = get_verification_digit(body, upper)?;
    Ok(CommandOutput::ok(format_digit(body, digit, format)))
}

fn cmd_format(input: &str, dots: bool, upper: bool, format: OutputFormat) -> Result<CommandOutput> {
    let formatted = format_rut(input, dots, upper)?;
    Ok(CommandOutput::ok(format_formatted(input, &formatted, format)))
}
