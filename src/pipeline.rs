// The rating pipeline — detect, translate, screen, score.
//
// Two passes over the input. The profanity screen runs on a best-effort
// English rendering: a detection or translation failure there falls
// back to the raw text and the request carries on. The rating stage
// re-runs detection and translation on the original text independently
// and is strict — any failure after the profanity screen surfaces to
// the caller instead of degrading into a made-up rating.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::warn;

use crate::analysis::traits::{LanguageDetector, ProfanityFilter, SentimentScorer, Translator};

/// All input is normalized into this language before analysis.
pub const TARGET_LANG: &str = "en";

/// The outcome of rating one review.
///
/// `review` is always the original, untranslated input. A profanity
/// rejection is a normal outcome: `status` false, `rating` 0.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewResult {
    pub review: String,
    pub status: bool,
    pub rating: f64,
}

/// Composes the four analyzers into the rate() call.
pub struct RatingPipeline {
    detector: Box<dyn LanguageDetector>,
    translator: Box<dyn Translator>,
    sentiment: Box<dyn SentimentScorer>,
    profanity: Box<dyn ProfanityFilter>,
}

impl RatingPipeline {
    pub fn new(
        detector: Box<dyn LanguageDetector>,
        translator: Box<dyn Translator>,
        sentiment: Box<dyn SentimentScorer>,
        profanity: Box<dyn ProfanityFilter>,
    ) -> Self {
        Self {
            detector,
            translator,
            sentiment,
            profanity,
        }
    }

    /// Rate a review: reject it for profanity or map its sentiment to a
    /// 1-5 star rating. An `Err` means the rating stage failed.
    pub async fn rate(&self, text: &str) -> Result<ReviewResult> {
        let screened = match self.to_target_language(text).await {
            Ok(rendered) => rendered,
            Err(e) => {
                warn!(error = %e, "Normalization failed, screening the raw text");
                text.to_string()
            }
        };

        // A filter error counts as "not profane" — the screen is an
        // extra gate, not a reason to drop the review.
        let profane = self.profanity.is_profane(&screened).await.unwrap_or(false);
        if profane {
            return Ok(ReviewResult {
                review: text.to_string(),
                status: false,
                rating: 0.0,
            });
        }

        // Second, independent detect+translate pass over the original
        // text. Redundant when the first pass succeeded, but the two
        // passes fail differently and are kept separate.
        let normalized = self
            .to_target_language(text)
            .await
            .context("Failed to normalize review for rating")?;

        let polarity = self
            .sentiment
            .polarity(&normalized)
            .await
            .context("Sentiment scoring failed")?;

        Ok(ReviewResult {
            review: text.to_string(),
            status: true,
            rating: f64::from(star_rating(polarity)),
        })
    }

    /// Detect the language of `text` and translate it into the target
    /// language. Input already in the target language passes through
    /// untouched.
    async fn to_target_language(&self, text: &str) -> Result<String> {
        let lang = self
            .detector
            .detect(text)
            .await
            .context("Language detection failed")?;

        if lang == TARGET_LANG {
            return Ok(text.to_string());
        }

        self.translator
            .translate(text, &lang, TARGET_LANG)
            .await
            .with_context(|| format!("Translation {lang} -> {TARGET_LANG} failed"))
    }
}

/// Map a polarity in [-1, 1] to a whole star rating in [1, 5].
/// Ties round half away from zero.
pub fn star_rating(polarity: f64) -> u8 {
    let scaled = (polarity + 1.0) * 2.0;
    let stars = scaled.round() as i64 + 1;
    stars.clamp(1, 5) as u8
}
