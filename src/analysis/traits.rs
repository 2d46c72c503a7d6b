// Analyzer traits — the swap-ready abstractions.
//
// Implementations are async because a provider may sit behind an HTTP
// API (the default translator does). The bundled detector, sentiment
// scorer, and profanity filter are local and never leave the process.

use anyhow::Result;
use async_trait::async_trait;

/// Identifies the language of a text as an ISO 639-1 code ("en", "uk").
#[async_trait]
pub trait LanguageDetector: Send + Sync {
    /// Detect the language of `text`. Fails when no language can be
    /// identified with any confidence.
    async fn detect(&self, text: &str) -> Result<String>;
}

/// Translates text between two languages given as ISO 639-1 codes.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str, source: &str, target: &str) -> Result<String>;
}

/// Scores the sentiment of a text as a polarity in [-1.0, 1.0],
/// negative to positive.
#[async_trait]
pub trait SentimentScorer: Send + Sync {
    async fn polarity(&self, text: &str) -> Result<f64>;
}

/// Flags text that contains offensive terms.
#[async_trait]
pub trait ProfanityFilter: Send + Sync {
    async fn is_profane(&self, text: &str) -> Result<bool>;
}
