//! Translation cache management using `SQLite`.

mod sqlite;

pub use sqlite::{CacheKey, CacheManager};

use crate::errors::ProviderError;
use crate::translation::TranslationProvider;

/// A provider that answers repeated requests from the cache.
///
/// Cache failures never fail a translation: they are logged and the call
/// goes to the wrapped provider.
pub struct CachedProvider<P> {
    inner: P,
    cache: CacheManager,
    backend: String,
    source: String,
    target: String,
}

impl<P> CachedProvider<P> {
    pub fn new(inner: P, cache: CacheManager, backend: &str, source: &str, target: &str) -> Self {
        Self {
            inner,
            cache,
            backend: backend.to_string(),
            source: source.to_string(),
            target: target.to_string(),
        }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }

    fn key<'a>(&'a self, text: &'a str) -> CacheKey<'a> {
        CacheKey {
            backend: &self.backend,
            source: &self.source,
            target: &self.target,
            text,
        }
    }
}

impl<P: TranslationProvider> TranslationProvider for CachedProvider<P> {
    async fn translate(&self, text: &str) -> Result<String, ProviderError> {
        let key = self.key(text);

        match self.cache.get(&key) {
            Ok(Some(cached)) => {
                log::debug!("cache hit ({} chars)", text.chars().count());
                return Ok(cached);
            }
            Ok(None) => {}
            Err(e) => log::warn!("translation cache unavailable: {e:#}"),
        }

        let translated = self.inner.translate(text).await?;

        if let Err(e) = self.cache.put(&key, &translated) {
            log::warn!("failed to store translation in cache: {e:#}");
        }

        Ok(translated)
    }
}
