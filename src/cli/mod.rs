//! Command-line interface definitions and handlers.

/// CLI argument parsing with clap.
pub mod args;

/// Subcommand implementations.
pub mod commands;

pub use args::{Args, Command};

use crate::errors::{ConfigError, TranslateError};

/// Maps an error chain to a sysexits-style process status.
///
/// The first recognised cause, from the outermost inwards, decides.
pub fn exit_code(err: &anyhow::Error) -> exitcode::ExitCode {
    for cause in err.chain() {
        if cause.is::<ConfigError>() {
            return exitcode::USAGE;
        }
        if cause.is::<TranslateError>() {
            return exitcode::UNAVAILABLE;
        }
        if cause.is::<serde_json::Error>() {
            return exitcode::DATAERR;
        }
        if cause.is::<std::io::Error>() {
            return exitcode::IOERR;
        }
    }
    exitcode::SOFTWARE
}
