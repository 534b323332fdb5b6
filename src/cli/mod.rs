//! CLI layer for the `rut` binary.
//!
//! Provides the command-line interface using clap, with commands for
//! validating, computing and formatting RUTs.

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::{CommandOutput, execute};
pub use output::OutputFormat;
pub use parser::{Cli, Commands};
