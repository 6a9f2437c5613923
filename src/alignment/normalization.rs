use crate::config::NormalizationConfig;

/// Full-width CJK and typographic punctuation stripped alongside ASCII
/// punctuation.
pub const WIDE_PUNCTUATION: &str = "。，、；：？！‘’“”（）《》【】";

/// Prepares a raw transcript for comparison.
///
/// Line breaks are removed without inserting a separator, so a word split
/// across lines joins back together.
pub fn normalize_transcript(text: &str, config: &NormalizationConfig) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if config.strip_line_breaks && (c == '\n' || c == '\r') {
            continue;
        }
        if config.strip_punctuation && is_punctuation(c, &config.extra_punctuation) {
            continue;
        }
        out.push(c);
    }

    if config.collapse_whitespace {
        out.split_whitespace().collect::<Vec<_>>().join(" ")
    } else {
        out
    }
}

/// Removes every separator, producing the no-space comparison variant.
pub fn strip_separators(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

fn is_punctuation(c: char, extra: &str) -> bool {
    c.is_ascii_punctuation() || WIDE_PUNCTUATION.contains(c) || extra.contains(c)
}
