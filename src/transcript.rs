use std::path::Path;

use serde::Deserialize;

use crate::error::ComparisonError;

#[derive(Debug, Deserialize)]
struct SpeechResponse {
    results: SpeechResults,
}

#[derive(Debug, Deserialize)]
struct SpeechResults {
    #[serde(default)]
    channels: Vec<SpeechChannel>,
}

#[derive(Debug, Deserialize)]
struct SpeechChannel {
    #[serde(default)]
    alternatives: Vec<SpeechAlternative>,
}

#[derive(Debug, Deserialize)]
struct SpeechAlternative {
    #[serde(default)]
    transcript: String,
    #[serde(default)]
    words: Vec<SpeechWord>,
}

#[derive(Debug, Deserialize)]
struct SpeechWord {
    word: String,
}

/// Reads a transcript from disk. `.json` files are parsed as a saved
/// speech-to-text response; anything else is read as UTF-8 text.
pub fn load_transcript(path: &Path) -> Result<String, ComparisonError> {
    let data =
        std::fs::read_to_string(path).map_err(|e| ComparisonError::io("read transcript", e))?;
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        transcript_from_response(&data)
    } else {
        Ok(data)
    }
}

/// Extracts the first alternative of the first channel. Word entries are
/// joined with single spaces; the `transcript` field is the fallback when no
/// words are listed.
pub fn transcript_from_response(json: &str) -> Result<String, ComparisonError> {
    let response: SpeechResponse = serde_json::from_str(json)
        .map_err(|e| ComparisonError::json("parse speech-to-text response", e))?;
    let alternative = response
        .results
        .channels
        .into_iter()
        .next()
        .and_then(|channel| channel.alternatives.into_iter().next())
        .ok_or_else(|| {
            ComparisonError::invalid_input("speech-to-text response has no channel alternatives")
        })?;

    if alternative.words.is_empty() {
        return Ok(alternative.transcript);
    }
    Ok(alternative
        .words
        .into_iter()
        .map(|w| w.word)
        .collect::<Vec<_>>()
        .join(" "))
}
