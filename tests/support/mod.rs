// Stub analyzers shared by the integration tests.
//
// Each stub either returns a fixed value or fails, so a test can steer
// every branch of the pipeline without network access.

#![allow(dead_code)]

use anyhow::{bail, Result};
use async_trait::async_trait;

use stargauge::analysis::traits::{
    LanguageDetector, ProfanityFilter, SentimentScorer, Translator,
};
use stargauge::pipeline::RatingPipeline;

pub struct FixedDetector(pub &'static str);

#[async_trait]
impl LanguageDetector for FixedDetector {
    async fn detect(&self, _text: &str) -> Result<String> {
        Ok(self.0.to_string())
    }
}

pub struct FailingDetector;

#[async_trait]
impl LanguageDetector for FailingDetector {
    async fn detect(&self, _text: &str) -> Result<String> {
        bail!("detector down")
    }
}

/// Returns the input unchanged, as a translation would for text already
/// in the target language.
pub struct EchoTranslator;

#[async_trait]
impl Translator for EchoTranslator {
    async fn translate(&self, text: &str, _source: &str, _target: &str) -> Result<String> {
        Ok(text.to_string())
    }
}

pub struct FixedTranslator(pub &'static str);

#[async_trait]
impl Translator for FixedTranslator {
    async fn translate(&self, _text: &str, _source: &str, _target: &str) -> Result<String> {
        Ok(self.0.to_string())
    }
}

pub struct FailingTranslator;

#[async_trait]
impl Translator for FailingTranslator {
    async fn translate(&self, _text: &str, _source: &str, _target: &str) -> Result<String> {
        bail!("translator down")
    }
}

pub struct FixedSentiment(pub f64);

#[async_trait]
impl SentimentScorer for FixedSentiment {
    async fn polarity(&self, _text: &str) -> Result<f64> {
        Ok(self.0)
    }
}

pub struct FailingSentiment;

#[async_trait]
impl SentimentScorer for FailingSentiment {
    async fn polarity(&self, _text: &str) -> Result<f64> {
        bail!("sentiment down")
    }
}

pub struct FixedProfanity(pub bool);

#[async_trait]
impl ProfanityFilter for FixedProfanity {
    async fn is_profane(&self, _text: &str) -> Result<bool> {
        Ok(self.0)
    }
}

pub struct FailingProfanity;

#[async_trait]
impl ProfanityFilter for FailingProfanity {
    async fn is_profane(&self, _text: &str) -> Result<bool> {
        bail!("filter down")
    }
}

/// Assemble a pipeline from stubs.
pub fn pipeline(
    detector: impl LanguageDetector + 'static,
    translator: impl Translator + 'static,
    sentiment: impl SentimentScorer + 'static,
    profanity: impl ProfanityFilter + 'static,
) -> RatingPipeline {
    RatingPipeline::new(
        Box::new(detector),
        Box::new(translator),
        Box::new(sentiment),
        Box::new(profanity),
    )
}
