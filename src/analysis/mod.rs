// Text analysis — trait-based abstractions for swappable providers.
//
// The rating pipeline depends on four analyzers: language detection,
// translation, sentiment scoring, and profanity screening. Each is a
// trait with a default implementation, so alternative providers slot in
// without touching the pipeline.

pub mod detect;
pub mod profanity;
pub mod sentiment;
pub mod traits;
pub mod translate;
