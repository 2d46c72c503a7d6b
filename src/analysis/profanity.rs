// Word-list profanity filter.
//
// The list is embedded at compile time and parsed once, before the
// server accepts traffic (see `preload`). Matching runs on a normalized
// copy of the input: lower-cased, common character obfuscations folded
// back ('@' -> 'a', '$' -> 's', '1' -> 'i', ...), everything else
// reduced to single spaces. Single words must match a whole token, so
// "class" never trips on "ass"; multi-word entries match as phrases.

use std::collections::HashSet;

use anyhow::Result;
use async_trait::async_trait;
use once_cell::sync::Lazy;
use tracing::debug;

use super::traits::ProfanityFilter;

struct WordList {
    words: HashSet<&'static str>,
    phrases: Vec<&'static str>,
}

static WORDS: Lazy<WordList> = Lazy::new(|| {
    let mut words = HashSet::new();
    let mut phrases = Vec::new();
    for line in include_str!("words.txt").lines() {
        let entry = line.trim();
        if entry.is_empty() || entry.starts_with('#') {
            continue;
        }
        if entry.contains(' ') {
            phrases.push(entry);
        } else {
            words.insert(entry);
        }
    }
    WordList { words, phrases }
});

/// Force the embedded word list to be parsed now rather than on the
/// first request.
pub fn preload() {
    let list = Lazy::force(&WORDS);
    debug!(
        words = list.words.len(),
        phrases = list.phrases.len(),
        "Profanity word list loaded"
    );
}

/// Profanity filter backed by the embedded word list.
pub struct WordListFilter;

impl WordListFilter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WordListFilter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProfanityFilter for WordListFilter {
    async fn is_profane(&self, text: &str) -> Result<bool> {
        let normalized = normalize(text);
        let list = &*WORDS;

        if normalized
            .split_whitespace()
            .any(|token| list.words.contains(token))
        {
            return Ok(true);
        }

        Ok(list.phrases.iter().any(|p| normalized.contains(p)))
    }
}

/// Lower-case the input, fold common obfuscation characters back into
/// the letters they stand in for, and squeeze everything else to spaces.
fn normalize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        let folded = match ch {
            '@' | '4' => 'a',
            '$' | '5' => 's',
            '0' => 'o',
            '1' | '!' | '|' => 'i',
            '3' => 'e',
            '7' => 't',
            '*' => 'u',
            c if c.is_alphanumeric() => {
                for lower in c.to_lowercase() {
                    out.push(lower);
                }
                continue;
            }
            _ => ' ',
        };
        out.push(folded);
    }
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn clean_text_passes() {
        let filter = WordListFilter::new();
        assert!(!filter
            .is_profane("The pasta was lovely and the staff friendly")
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn plain_profanity_is_flagged() {
        let filter = WordListFilter::new();
        assert!(filter.is_profane("this place is shit").await.unwrap());
    }

    #[tokio::test]
    async fn obfuscated_spelling_is_flagged() {
        let filter = WordListFilter::new();
        assert!(filter.is_profane("what a load of sh1t").await.unwrap());
        assert!(filter.is_profane("the waiter was an a$$hole").await.unwrap());
    }

    #[tokio::test]
    async fn uppercase_is_flagged() {
        let filter = WordListFilter::new();
        assert!(filter.is_profane("ABSOLUTE BULLSHIT").await.unwrap());
    }

    #[tokio::test]
    async fn embedded_words_do_not_trip_whole_token_matching() {
        let filter = WordListFilter::new();
        // "class" contains "ass", "scrap" contains "crap"
        assert!(!filter
            .is_profane("a world class scrapbook assembly")
            .await
            .unwrap());
    }
}
