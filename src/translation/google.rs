//! Google web translation backend.
//!
//! Talks to the keyless `translate_a/single` endpoint used by the public web
//! widget. The response is an untyped nested array:
//!
//! ```text
//! [[["Olá mundo","Hello world",null,null,10], ...], null, "en", ...]
//! ```
//!
//! where the first element lists translated segments in order.

use std::time::Duration;

use reqwest::{Client, Url};
use serde_json::Value;

use super::chunk::translate_in_chunks;
use super::provider::TranslationProvider;
use crate::errors::ProviderError;

const ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

/// Longest text accepted per request.
const MAX_CHARS: usize = 5000;

#[derive(Debug, Clone)]
pub struct GoogleTranslate {
    client: Client,
    endpoint: String,
    source: String,
    target: String,
}

impl GoogleTranslate {
    pub fn new(source: String, target: String) -> Self {
        Self::with_endpoint(ENDPOINT.to_string(), source, target)
    }

    pub fn with_endpoint(endpoint: String, source: String, target: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|e| {
                log::warn!("failed to build HTTP client ({e}), using defaults");
                Client::new()
            });

        Self {
            client,
            endpoint,
            source,
            target,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    async fn request(&self, text: String) -> Result<String, ProviderError> {
        let url = Url::parse_with_params(
            &self.endpoint,
            &[
                ("client", "gtx"),
                ("dt", "t"),
                ("sl", self.source.as_str()),
                ("tl", self.target.as_str()),
                ("q", text.as_str()),
            ],
        )
        .map_err(|e| ProviderError::Malformed(format!("invalid endpoint URL: {e}")))?;

        log::debug!("google: translating {} chars", text.chars().count());

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body: Value = response.json().await?;
        parse_response(&body)
    }
}

impl TranslationProvider for GoogleTranslate {
    async fn translate(&self, text: &str) -> Result<String, ProviderError> {
        translate_in_chunks(text, MAX_CHARS, |chunk| self.request(chunk)).await
    }
}

fn parse_response(body: &Value) -> Result<String, ProviderError> {
    let segments = body
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| ProviderError::Malformed("missing translation segments".to_string()))?;

    let translated: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    if translated.is_empty() {
        return Err(ProviderError::Malformed(
            "translation segments are empty".to_string(),
        ));
    }

    Ok(translated)
}
