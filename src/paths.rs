//! XDG-style locations for the configuration file and the translation cache.
//!
//! XDG variables win over OS-specific directories on every platform.

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_DIR: &str = "nbtl";

/// Returns the configuration directory for nbtl.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/nbtl` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/nbtl` otherwise
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn config_dir() -> Result<PathBuf> {
    xdg_or_home("XDG_CONFIG_HOME", ".config")
}

/// Returns the cache directory for nbtl.
///
/// Resolution order:
/// 1. `$XDG_CACHE_HOME/nbtl` if `XDG_CACHE_HOME` is set
/// 2. `~/.cache/nbtl` otherwise
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn cache_dir() -> Result<PathBuf> {
    xdg_or_home("XDG_CACHE_HOME", ".cache")
}

fn xdg_or_home(var: &str, fallback: &str) -> Result<PathBuf> {
    match std::env::var(var) {
        Ok(xdg) if !xdg.is_empty() => Ok(PathBuf::from(xdg).join(APP_DIR)),
        _ => {
            let home = dirs::home_dir().context("Failed to determine home directory")?;
            Ok(home.join(fallback).join(APP_DIR))
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn with_var<F: FnOnce()>(name: &str, value: Option<&str>, f: F) {
        let original = std::env::var(name).ok();
        match value {
            Some(value) => unsafe { std::env::set_var(name, value) },
            None => unsafe { std::env::remove_var(name) },
        }

        f();

        match original {
            Some(val) => unsafe { std::env::set_var(name, val) },
            None => unsafe { std::env::remove_var(name) },
        }
    }

    #[test]
    #[serial]
    fn test_config_dir_default() {
        with_var("XDG_CONFIG_HOME", None, || {
            assert!(config_dir().unwrap().ends_with(".config/nbtl"));
        });
    }

    #[test]
    #[serial]
    fn test_config_dir_xdg_override() {
        with_var("XDG_CONFIG_HOME", Some("/custom/config"), || {
            assert_eq!(config_dir().unwrap(), PathBuf::from("/custom/config/nbtl"));
        });
    }

    #[test]
    #[serial]
    fn test_cache_dir_default() {
        with_var("XDG_CACHE_HOME", None, || {
            assert!(cache_dir().unwrap().ends_with(".cache/nbtl"));
        });
    }

    #[test]
    #[serial]
    fn test_cache_dir_xdg_override() {
        with_var("XDG_CACHE_HOME", Some("/custom/cache"), || {
            assert_eq!(cache_dir().unwrap(), PathBuf::from("/custom/cache/nbtl"));
        });
    }

    #[test]
    #[serial]
    fn test_empty_xdg_value_falls_back_to_home() {
        with_var("XDG_CACHE_HOME", Some(""), || {
            assert!(cache_dir().unwrap().ends_with(".cache/nbtl"));
        });
    }
}
