//! MyMemory community translation-memory backend.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::Deserialize;
use serde_json::Value;

use super::chunk::translate_in_chunks;
use super::provider::TranslationProvider;
use crate::errors::ProviderError;

const ENDPOINT: &str = "https://api.mymemory.translated.net/get";

/// MyMemory rejects queries longer than this.
const MAX_CHARS: usize = 500;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GetResponse {
    response_data: Option<ResponseData>,
    /// Sent as a number on success and sometimes as a string on errors.
    #[serde(default)]
    response_status: Value,
    #[serde(default)]
    response_details: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponseData {
    translated_text: Option<String>,
}

#[derive(Debug, Clone)]
pub struct MyMemory {
    client: Client,
    endpoint: String,
    source: String,
    target: String,
    email: Option<String>,
}

impl MyMemory {
    pub fn new(source: String, target: String, email: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|e| {
                log::warn!("failed to build HTTP client ({e}), using defaults");
                Client::new()
            });

        Self {
            client,
            endpoint: ENDPOINT.to_string(),
            source,
            target,
            email,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    async fn request(&self, text: String) -> Result<String, ProviderError> {
        let langpair = format!("{}|{}", self.source, self.target);
        let mut params = vec![("q", text.as_str()), ("langpair", langpair.as_str())];
        if let Some(email) = &self.email {
            params.push(("de", email.as_str()));
        }

        let url = Url::parse_with_params(&self.endpoint, &params)
            .map_err(|e| ProviderError::Malformed(format!("invalid endpoint URL: {e}")))?;

        log::debug!("mymemory: translating {} chars", text.chars().count());

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body: GetResponse = response.json().await?;
        parse_response(body)
    }
}

impl TranslationProvider for MyMemory {
    async fn translate(&self, text: &str) -> Result<String, ProviderError> {
        translate_in_chunks(text, MAX_CHARS, |chunk| self.request(chunk)).await
    }
}

fn parse_response(body: GetResponse) -> Result<String, ProviderError> {
    let status = match &body.response_status {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    };

    if status != Some(200) {
        return Err(ProviderError::Rejected(
            body.response_details
                .unwrap_or_else(|| format!("status {}", body.response_status)),
        ));
    }

    body.response_data
        .and_then(|data| data.translated_text)
        .filter(|text| !text.is_empty())
        .ok_or_else(|| ProviderError::Malformed("missing translatedText".to_string()))
}
