// Whatlang language detector.
//
// Runs entirely in-process. Whatlang reports ISO 639-3 codes; the
// translation endpoint speaks ISO 639-1, so detection maps between the
// two and fails for languages with no 639-1 equivalent.

use anyhow::{bail, Result};
use async_trait::async_trait;
use tracing::debug;

use super::traits::LanguageDetector;

/// Trigram-based language detector backed by the whatlang crate.
pub struct WhatlangDetector;

#[async_trait]
impl LanguageDetector for WhatlangDetector {
    async fn detect(&self, text: &str) -> Result<String> {
        let Some(info) = whatlang::detect(text) else {
            bail!("no language detected");
        };

        let code_639_3 = info.lang().code();
        let Some(code) = iso_639_1(code_639_3) else {
            bail!("detected language {code_639_3:?} has no ISO 639-1 code");
        };

        debug!(
            lang = code,
            confidence = info.confidence(),
            reliable = info.is_reliable(),
            "Detected language"
        );

        Ok(code.to_string())
    }
}

/// Map a whatlang ISO 639-3 code to the ISO 639-1 code the translation
/// endpoint expects.
fn iso_639_1(code: &str) -> Option<&'static str> {
    let mapped = match code {
        "eng" => "en",
        "spa" => "es",
        "fra" => "fr",
        "deu" => "de",
        "ita" => "it",
        "por" => "pt",
        "rus" => "ru",
        "ukr" => "uk",
        "bel" => "be",
        "pol" => "pl",
        "ces" => "cs",
        "slk" => "sk",
        "bul" => "bg",
        "hrv" => "hr",
        "srp" => "sr",
        "slv" => "sl",
        "ron" => "ro",
        "hun" => "hu",
        "ell" => "el",
        "nld" => "nl",
        "dan" => "da",
        "swe" => "sv",
        "nob" => "no",
        "fin" => "fi",
        "est" => "et",
        "lav" => "lv",
        "lit" => "lt",
        "tur" => "tr",
        "ara" => "ar",
        "heb" => "he",
        "hin" => "hi",
        "ben" => "bn",
        "urd" => "ur",
        "tam" => "ta",
        "tel" => "te",
        "mar" => "mr",
        "guj" => "gu",
        "kan" => "kn",
        "mal" => "ml",
        "pan" => "pa",
        "tha" => "th",
        "vie" => "vi",
        "ind" => "id",
        "jav" => "jv",
        "cmn" => "zh",
        "jpn" => "ja",
        "kor" => "ko",
        "kat" => "ka",
        "hye" => "hy",
        "aze" => "az",
        "uzb" => "uz",
        "pes" => "fa",
        "amh" => "am",
        "yid" => "yi",
        "afr" => "af",
        "cat" => "ca",
        "lat" => "la",
        "epo" => "eo",
        "tgl" => "tl",
        "nep" => "ne",
        "sin" => "si",
        "khm" => "km",
        "mya" => "my",
        "zul" => "zu",
        _ => return None,
    };
    Some(mapped)
}
