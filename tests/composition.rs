// Composition tests — the real local analyzers chained through the
// pipeline: whatlang detection -> lexicon sentiment -> word-list
// profanity screen. No network: English input never reaches the
// translator, which is stubbed to fail loudly if it is ever called.

mod support;

use support::{pipeline, FailingTranslator};

use stargauge::analysis::detect::WhatlangDetector;
use stargauge::analysis::profanity::WordListFilter;
use stargauge::analysis::sentiment::LexiconScorer;

fn english_pipeline() -> stargauge::pipeline::RatingPipeline {
    pipeline(
        WhatlangDetector,
        FailingTranslator,
        LexiconScorer::new(),
        WordListFilter::new(),
    )
}

#[tokio::test]
async fn glowing_english_review_rates_five_stars() {
    let p = english_pipeline();
    let result = p
        .rate("The food was absolutely wonderful and the service was excellent.")
        .await
        .unwrap();
    assert!(result.status);
    assert_eq!(result.rating, 5.0);
}

#[tokio::test]
async fn scathing_english_review_rates_one_star() {
    let p = english_pipeline();
    let result = p
        .rate("Terrible food, awful service, honestly the worst evening out.")
        .await
        .unwrap();
    assert!(result.status);
    assert_eq!(result.rating, 1.0);
}

#[tokio::test]
async fn neutral_english_review_rates_three_stars() {
    let p = english_pipeline();
    let result = p
        .rate("The table stood near the window and the menu listed seven dishes.")
        .await
        .unwrap();
    assert!(result.status);
    assert_eq!(result.rating, 3.0);
}

#[tokio::test]
async fn profane_english_review_is_rejected() {
    let p = english_pipeline();
    let result = p
        .rate("The waiter was a complete asshole and the food was shit.")
        .await
        .unwrap();
    assert!(!result.status);
    assert_eq!(result.rating, 0.0);
}

#[tokio::test]
async fn obfuscated_profanity_is_still_rejected() {
    let p = english_pipeline();
    let result = p
        .rate("Honestly this place is complete bull$hit and everyone knows it.")
        .await
        .unwrap();
    assert!(!result.status);
}
