//! Bounded retry around a translation provider.

use std::future::Future;
use std::time::Duration;

use super::provider::TranslationProvider;
use crate::errors::TranslateError;

pub const DEFAULT_RETRIES: u32 = 3;
pub const DEFAULT_DELAY: Duration = Duration::from_secs(10);

/// How many attempts a unit gets and how long to wait after each failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub retries: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            retries: DEFAULT_RETRIES,
            delay: DEFAULT_DELAY,
        }
    }
}

/// The wait between two attempts.
///
/// Injected so tests can observe waits without real time passing.
pub trait Delay {
    fn wait(&self, duration: Duration) -> impl Future<Output = ()>;
}

/// Sleeps on the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioDelay;

impl Delay for TokioDelay {
    async fn wait(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

impl<D: Delay + ?Sized> Delay for &D {
    fn wait(&self, duration: Duration) -> impl Future<Output = ()> {
        (**self).wait(duration)
    }
}

/// A provider handle wrapped with the retry policy of one translation job.
pub struct ResilientTranslator<P, D = TokioDelay> {
    provider: P,
    policy: RetryPolicy,
    delay: D,
}

impl<P: TranslationProvider> ResilientTranslator<P> {
    pub const fn new(provider: P, policy: RetryPolicy) -> Self {
        Self {
            provider,
            policy,
            delay: TokioDelay,
        }
    }
}

impl<P: TranslationProvider, D: Delay> ResilientTranslator<P, D> {
    pub const fn with_delay(provider: P, policy: RetryPolicy, delay: D) -> Self {
        Self {
            provider,
            policy,
            delay,
        }
    }

    pub const fn policy(&self) -> RetryPolicy {
        self.policy
    }

    /// Translates `text`, retrying failed provider calls.
    ///
    /// Empty or whitespace-only text is returned as is without calling the
    /// provider. Every failure is followed by one wait; after `retries`
    /// consecutive failures the last provider error is returned inside
    /// [`TranslateError::RetriesExhausted`].
    pub async fn translate(&self, text: &str) -> Result<String, TranslateError> {
        if text.trim().is_empty() {
            return Ok(text.to_string());
        }

        let attempts = self.policy.retries.max(1);
        let mut attempt = 0;
        loop {
            attempt += 1;
            match self.provider.translate(text).await {
                Ok(translated) => return Ok(translated),
                Err(err) => {
                    if attempt < attempts {
                        crate::warn!("Error translating. Trying again ({attempt}/{attempts})...");
                    }
                    log::debug!("provider error on attempt {attempt}: {err}");
                    self.delay.wait(self.policy.delay).await;
                    if attempt >= attempts {
                        return Err(TranslateError::RetriesExhausted {
                            attempts,
                            last: err,
                        });
                    }
                }
            }
        }
    }
}
