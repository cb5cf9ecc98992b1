//! Typed errors for the translation pipeline.
//!
//! Command handlers work with `anyhow::Result`; these types sit underneath so
//! `main` can tell a usage problem from a translation outage when picking the
//! exit status.

use std::path::PathBuf;

use thiserror::Error;

/// A single failed call to a translation backend.
///
/// Every variant is treated as transient by the retry loop.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Transport-level failure (DNS, TLS, timeout, connection reset).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend answered with a non-success HTTP status.
    #[error("API responded with status {status}: {body}")]
    Status { status: u16, body: String },

    /// The body could not be interpreted.
    #[error("unexpected response: {0}")]
    Malformed(String),

    /// The backend accepted the request but refused to translate it
    /// (quota exhausted, unsupported pair, ...).
    #[error("translation rejected: {0}")]
    Rejected(String),
}

/// Terminal failure of a resilient translation call.
#[derive(Error, Debug)]
pub enum TranslateError {
    #[error("Failed to translate after {attempts} attempts: {last}")]
    RetriesExhausted {
        attempts: u32,
        #[source]
        last: ProviderError,
    },
}

/// Problems detected before any translation work starts.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(
        "Missing required configuration: 'target' (target language)\n\n\
         Please provide it via:\n  \
         - CLI option: nbtl --target <lang> <notebook>\n  \
         - Config file: [defaults] target = \"<lang>\""
    )]
    MissingTarget,

    #[error("Missing notebook path\n\nUsage: nbtl [OPTIONS] --target <LANG> <PATH>")]
    MissingPath,

    #[error("No support for the provided language '{code}' with {backend}\n\nSupported languages: {available}")]
    UnsupportedLanguage {
        backend: String,
        code: String,
        available: String,
    },

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("No notebooks (*.ipynb) found under {}", .0.display())]
    NoNotebooks(PathBuf),
}
