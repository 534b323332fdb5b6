//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use clap::{Parser, Subcommand};

/// rut: validate, compute and format Chilean RUTs.
#[derive(Parser, Debug)]
#[command(name = "rut")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging on stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (text, json). Defaults to `$RUT_FORMAT`, then text.
    #[arg(long, default_value = "text", env = "RUT_FORMAT", global = true)]
    pub format: String,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check that a RUT's check digit matches its body.
    ///
    /// Exits with a failure status if the RUT is invalid or malformed.
    #[command(alias = "check")]
    Validate {
        /// RUT to check (`12.345.678-5`, `12345678-5` or `123456785`).
        rut: String,
    },

    /// Compute the check digit of a RUT body.
    #[command(alias = "dv")]
    Digit {
        /// Body digits, without check digit.
        body: String,

        /// Print `K` instead of `k`.
        #[arg(short, long)]
        upper: bool,
    },

    /// Reformat a RUT for display.
    Format {
        /// RUT to format.
        rut: String,

        /// Group the body in thousands with dots.
        #[arg(short, long)]
        dots: bool,

        /// Print `K` instead of `k`.
        #[arg(short, long)]
        upper: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_format_subcommand() {
        let cli = Cli::try_parse_from(["rut", "format", "12345678", "--dots", "-u"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Format {
                dots: true,
                upper: true,
                ..
            }
        ));
    }

    #[test]
    fn test_validate_takes_exactly_one_rut() {
        assert!(Cli::try_parse_from(["rut", "validate"]).is_err());
        assert!(Cli::try_parse_from(["rut", "validate", "1-9", "0-0"]).is_err());
        assert!(Cli::try_parse_from(["rut", "validate", "1-9"]).is_ok());
    }

    #[test]
    fn test_digit_alias() {
        let cli = Cli::try_parse_from(["rut", "dv", "9868503"]).unwrap();
        assert!(matches!(cli.command, Commands::Digit { upper: false, .. }));
    }
}
