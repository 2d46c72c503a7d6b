// Google Translate implementation.
//
// Calls the unofficial translate_a/single endpoint (client=gtx) — no
// API key required, but the endpoint throttles heavy traffic. It is
// wrapped behind the Translator trait so a paid provider (or a
// self-hosted proxy, via STARGAUGE_TRANSLATE_URL) can be swapped in.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::traits::Translator;

/// Public Google Translate endpoint used when no override is configured.
pub const DEFAULT_TRANSLATE_URL: &str = "https://translate.googleapis.com/translate_a/single";

/// Translator backed by Google's web translation endpoint.
pub struct GoogleTranslator {
    client: Client,
    base_url: String,
}

impl GoogleTranslator {
    /// Create a translator against `base_url` with a per-request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(&self, text: &str, source: &str, target: &str) -> Result<String> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("client", "gtx"),
                ("sl", source),
                ("tl", target),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .context("Failed to call translation endpoint")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            bail!("Translation endpoint returned {status}: {body}");
        }

        let body: serde_json::Value = response
            .json()
            .await
            .context("Failed to parse translation response")?;

        // The endpoint returns a bare JSON array; the translation is
        // split into segments at [0][*][0], concatenated here.
        let Some(segments) = body.get(0).and_then(|v| v.as_array()) else {
            bail!("Translation response missing segment array");
        };

        let mut translated = String::new();
        for segment in segments {
            if let Some(part) = segment.get(0).and_then(|v| v.as_str()) {
                translated.push_str(part);
            }
        }

        if translated.is_empty() {
            bail!("Translation endpoint returned an empty translation ({source} -> {target})");
        }

        debug!(
            source,
            target,
            chars = text.chars().count(),
            "Translated text"
        );

        Ok(translated)
    }
}
