//! Subcommand implementations.

/// `nbtl config`: show the configuration in effect.
pub mod config;

/// Notebook and directory translation.
pub mod translate;
