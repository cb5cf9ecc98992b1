//! Deterministic, network-free translation provider.
//!
//! Used by the test suites to drive the pipeline without a backend, and to
//! observe exactly which strings would have left the process.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::provider::TranslationProvider;
use crate::errors::ProviderError;

/// What the mock does with text that has no explicit mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockMode {
    /// Return the text unchanged.
    Identity,
    /// Upper-case the text (also upper-cases any placeholder tokens).
    Upper,
    /// Append a `_tr` suffix to every line.
    Suffix,
    /// Fail every call.
    Fail,
}

#[derive(Debug)]
pub struct MockProvider {
    mode: MockMode,
    mappings: HashMap<String, String>,
    fail_first: usize,
    attempts: AtomicUsize,
    calls: Mutex<Vec<String>>,
}

impl MockProvider {
    pub fn new(mode: MockMode) -> Self {
        Self {
            mode,
            mappings: HashMap::new(),
            fail_first: 0,
            attempts: AtomicUsize::new(0),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Translate `from` to `to` exactly, ahead of the fallback mode.
    #[must_use]
    pub fn with_mapping(mut self, from: &str, to: &str) -> Self {
        self.mappings.insert(from.to_string(), to.to_string());
        self
    }

    /// Fail the first `n` calls before behaving normally.
    #[must_use]
    pub const fn failing_first(mut self, n: usize) -> Self {
        self.fail_first = n;
        self
    }

    /// Every text the provider was asked to translate, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }

    fn respond(&self, text: &str) -> Result<String, ProviderError> {
        if let Some(mapped) = self.mappings.get(text) {
            return Ok(mapped.clone());
        }
        match self.mode {
            MockMode::Identity => Ok(text.to_string()),
            MockMode::Upper => Ok(text.to_uppercase()),
            MockMode::Suffix => Ok(text
                .split('\n')
                .map(|line| {
                    if line.trim().is_empty() {
                        line.to_string()
                    } else {
                        format!("{line}_tr")
                    }
                })
                .collect::<Vec<_>>()
                .join("\n")),
            MockMode::Fail => Err(ProviderError::Malformed("mock failure".to_string())),
        }
    }
}

impl TranslationProvider for MockProvider {
    async fn translate(&self, text: &str) -> Result<String, ProviderError> {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(text.to_string());
        }
        if attempt < self.fail_first {
            return Err(ProviderError::Rejected("scripted failure".to_string()));
        }
        self.respond(text)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mapping_takes_priority() {
        let mock = MockProvider::new(MockMode::Upper).with_mapping("Hello", "Bonjour");
        assert_eq!(mock.translate("Hello").await.unwrap(), "Bonjour");
        assert_eq!(mock.translate("other").await.unwrap(), "OTHER");
    }

    #[tokio::test]
    async fn test_suffix_mode_per_line() {
        let mock = MockProvider::new(MockMode::Suffix);
        assert_eq!(mock.translate("a\n\nb").await.unwrap(), "a_tr\n\nb_tr");
    }

    #[tokio::test]
    async fn test_scripted_failures_are_recorded() {
        let mock = MockProvider::new(MockMode::Identity).failing_first(2);
        assert!(mock.translate("x").await.is_err());
        assert!(mock.translate("x").await.is_err());
        assert_eq!(mock.translate("x").await.unwrap(), "x");
        assert_eq!(mock.call_count(), 3);
        assert_eq!(mock.calls().len(), 3);
    }
}
