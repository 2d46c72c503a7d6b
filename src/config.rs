use std::env;

use anyhow::{Context, Result};

use crate::analysis::translate::DEFAULT_TRANSLATE_URL;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy.
/// Everything has a default — the service runs with no configuration
/// at all against the public translation endpoint.
pub struct Config {
    /// Address the HTTP server binds to (STARGAUGE_BIND, default 127.0.0.1)
    pub bind: String,
    /// Port the HTTP server listens on (STARGAUGE_PORT, default 8000)
    pub port: u16,
    /// Translation endpoint (defaults to the public Google endpoint).
    /// Point this at a self-hosted proxy to dodge upstream throttling.
    pub translate_url: String,
    /// Timeout for outbound translation calls, in seconds
    pub http_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let port = match env::var("STARGAUGE_PORT") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("STARGAUGE_PORT must be a port number, got {raw:?}"))?,
            Err(_) => 8000,
        };

        let http_timeout_secs = match env::var("STARGAUGE_HTTP_TIMEOUT_SECS") {
            Ok(raw) => raw.parse().with_context(|| {
                format!("STARGAUGE_HTTP_TIMEOUT_SECS must be a number of seconds, got {raw:?}")
            })?,
            Err(_) => 10,
        };

        Ok(Self {
            bind: env::var("STARGAUGE_BIND").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port,
            translate_url: env::var("STARGAUGE_TRANSLATE_URL")
                .unwrap_or_else(|_| DEFAULT_TRANSLATE_URL.to_string()),
            http_timeout_secs,
        })
    }
}
