use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::errors::ConfigError;
use crate::paths;
use crate::translation::{Backend, BackendOptions, DEFAULT_DELAY, DEFAULT_RETRIES, RetryPolicy};

/// Built-in source language.
pub const DEFAULT_SOURCE: &str = "en";

/// Default settings in the `[defaults]` section of config.toml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defaults {
    /// Source language (code or English name).
    pub source: Option<String>,
    /// Target language (code or English name).
    pub target: Option<String>,
    /// Translation backend.
    pub translator: Option<Backend>,
    /// Seconds to wait between attempts.
    pub delay: Option<u64>,
    /// Attempts per text unit.
    pub retries: Option<u32>,
}

/// The `[mymemory]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MyMemoryConfig {
    /// Contact address that raises the anonymous daily quota.
    pub email: Option<String>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/nbtl/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub mymemory: MyMemoryConfig,
}

/// Options from the command line; they win over the config file.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub source: Option<String>,
    pub target: Option<String>,
    pub translator: Option<Backend>,
    pub delay: Option<u64>,
    pub retries: Option<u32>,
}

/// Settings for one run after merging CLI options, file and built-ins.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub source: String,
    pub target: String,
    pub backend: Backend,
    pub policy: RetryPolicy,
    pub backend_options: BackendOptions,
}

/// Merges CLI options with config file settings.
///
/// Priority: CLI option, then config file, then built-in default. The target
/// language has no built-in default. Language codes are checked later, when
/// the backend is built.
///
/// # Errors
///
/// Returns [`ConfigError::MissingTarget`] if no target language is set
/// anywhere.
pub fn resolve_config(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<ResolvedConfig, ConfigError> {
    let defaults = &config_file.defaults;

    let target = options
        .target
        .as_ref()
        .or(defaults.target.as_ref())
        .cloned()
        .ok_or(ConfigError::MissingTarget)?;

    let source = options
        .source
        .as_ref()
        .or(defaults.source.as_ref())
        .cloned()
        .unwrap_or_else(|| DEFAULT_SOURCE.to_string());

    let backend = options
        .translator
        .or(defaults.translator)
        .unwrap_or_default();

    let delay = options
        .delay
        .or(defaults.delay)
        .map_or(DEFAULT_DELAY, Duration::from_secs);

    let retries = options
        .retries
        .or(defaults.retries)
        .unwrap_or(DEFAULT_RETRIES);

    Ok(ResolvedConfig {
        source,
        target,
        backend,
        policy: RetryPolicy { retries, delay },
        backend_options: BackendOptions {
            mymemory_email: config_file.mymemory.email.clone(),
        },
    })
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/nbtl/config.toml`
    /// or `~/.config/nbtl/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    pub fn with_path(config_path: &Path) -> Self {
        Self {
            config_path: config_path.to_path_buf(),
        }
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile = toml::from_str(&contents).with_context(|| {
            format!("Failed to parse config file: {}", self.config_path.display())
        })?;

        Ok(config_file)
    }

    /// Loads the config file, treating a missing file as an empty config.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        match fs::metadata(&self.config_path) {
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("no config file at {}", self.config_path.display());
                Ok(ConfigFile::default())
            }
            _ => self.load(),
        }
    }
}
