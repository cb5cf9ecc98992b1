use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::google::GoogleTranslate;
use super::language::resolve_language;
use super::mymemory::MyMemory;
use super::provider::TranslationProvider;
use crate::errors::{ConfigError, ProviderError};

/// The supported translation backends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// General web translation (translate.googleapis.com)
    #[default]
    Google,
    /// Community translation memory (mymemory.translated.net)
    #[value(name = "mymemory")]
    MyMemory,
}

impl Backend {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::MyMemory => "mymemory",
        }
    }

    /// Whether the backend accepts `auto` as the source language.
    pub const fn detects_source(self) -> bool {
        matches!(self, Self::Google)
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Backend-specific settings that do not belong to the language pair.
#[derive(Debug, Clone, Default)]
pub struct BackendOptions {
    /// Contact address sent to MyMemory to raise the anonymous quota.
    pub mymemory_email: Option<String>,
}

/// A constructed backend, bound to one source/target language pair.
#[derive(Debug, Clone)]
pub enum BackendClient {
    Google(GoogleTranslate),
    MyMemory(MyMemory),
}

impl BackendClient {
    /// Builds the client for `backend`, validating both language codes first.
    pub fn new(
        backend: Backend,
        source: &str,
        target: &str,
        options: &BackendOptions,
    ) -> Result<Self, ConfigError> {
        let source = resolve_language(backend, source, true)?;
        let target = resolve_language(backend, target, false)?;

        log::debug!("using {backend} backend ({source} -> {target})");

        Ok(match backend {
            Backend::Google => Self::Google(GoogleTranslate::new(source, target)),
            Backend::MyMemory => Self::MyMemory(MyMemory::new(
                source,
                target,
                options.mymemory_email.clone(),
            )),
        })
    }

    pub const fn backend(&self) -> Backend {
        match self {
            Self::Google(_) => Backend::Google,
            Self::MyMemory(_) => Backend::MyMemory,
        }
    }

    pub fn source(&self) -> &str {
        match self {
            Self::Google(client) => client.source(),
            Self::MyMemory(client) => client.source(),
        }
    }

    pub fn target(&self) -> &str {
        match self {
            Self::Google(client) => client.target(),
            Self::MyMemory(client) => client.target(),
        }
    }
}

impl TranslationProvider for BackendClient {
    async fn translate(&self, text: &str) -> Result<String, ProviderError> {
        match self {
            Self::Google(client) => client.translate(text).await,
            Self::MyMemory(client) => client.translate(text).await,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_builds_each_backend() {
        let options = BackendOptions::default();

        let google = BackendClient::new(Backend::Google, "en", "pt", &options).unwrap();
        assert_eq!(google.backend(), Backend::Google);
        assert_eq!(google.source(), "en");
        assert_eq!(google.target(), "pt");

        let mymemory = BackendClient::new(Backend::MyMemory, "english", "fr", &options).unwrap();
        assert_eq!(mymemory.backend(), Backend::MyMemory);
        assert_eq!(mymemory.source(), "en");
    }

    #[test]
    fn test_factory_rejects_unsupported_language() {
        let result = BackendClient::new(Backend::Google, "en", "xx", &BackendOptions::default());
        assert!(matches!(
            result,
            Err(ConfigError::UnsupportedLanguage { ref code, .. }) if code == "xx"
        ));
    }

    #[test]
    fn test_backend_names_roundtrip_through_clap() {
        assert_eq!(Backend::from_str("google", true).unwrap(), Backend::Google);
        assert_eq!(Backend::from_str("mymemory", true).unwrap(), Backend::MyMemory);
        assert!(Backend::from_str("deepl", true).is_err());
    }
}
