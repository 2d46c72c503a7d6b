// Lexicon sentiment scorer.
//
// An AFINN-style weighted word list is embedded at compile time and
// parsed once on first use. A negator within the three preceding tokens
// inverts a word's weight. The summed score is normalized by the number
// of scoring words into [-1, 1], so a short gushing review and a long
// one land on the same polarity.

use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use once_cell::sync::Lazy;

use super::traits::SentimentScorer;

static LEXICON: Lazy<HashMap<String, i32>> = Lazy::new(|| {
    let raw = include_str!("lexicon.json");
    serde_json::from_str(raw).expect("embedded sentiment lexicon is valid JSON")
});

/// Word weights range over [-5, 5]; normalization divides by this.
const MAX_WEIGHT: f64 = 5.0;

/// Sentiment scorer backed by the embedded lexicon. English-only — the
/// pipeline hands it text already rendered into the target language.
pub struct LexiconScorer;

impl LexiconScorer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SentimentScorer for LexiconScorer {
    async fn polarity(&self, text: &str) -> Result<f64> {
        let tokens: Vec<String> = tokenize(text).collect();

        let mut total = 0i64;
        let mut hits = 0u32;

        for i in 0..tokens.len() {
            let weight = *LEXICON.get(tokens[i].as_str()).unwrap_or(&0);
            if weight == 0 {
                continue;
            }

            // A nearby negator flips the word's contribution:
            // "not good" reads negative, "never disappointing" positive.
            let negated = (1..=3).any(|k| i >= k && is_negator(&tokens[i - k]));
            total += i64::from(if negated { -weight } else { weight });
            hits += 1;
        }

        if hits == 0 {
            return Ok(0.0);
        }

        let polarity = total as f64 / (MAX_WEIGHT * f64::from(hits));
        Ok(polarity.clamp(-1.0, 1.0))
    }
}

/// Alphanumeric tokens, lower-cased.
fn tokenize(s: &str) -> impl Iterator<Item = String> + '_ {
    s.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase())
}

fn is_negator(tok: &str) -> bool {
    matches!(
        tok,
        "not"
            | "no"
            | "never"
            | "isn"
            | "wasn"
            | "aren"
            | "don"
            | "doesn"
            | "didn"
            | "couldn"
            | "wouldn"
            | "shouldn"
            | "cannot"
            | "without"
            | "hardly"
            | "barely"
    )
}
