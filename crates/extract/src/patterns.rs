use regex::Regex;
use std::sync::LazyLock;

use crate::schema::{DataPoint, Reference};

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://[^\s]+").expect("valid url pattern"));

static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d+(?:\.\d+)?\b").expect("valid number pattern"));

// Keyword at the start of a line, then ':' or whitespace, then the reference text
static REFERENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^[ \t]*(references?|cited?|sources?)[:\s]+(.+)$")
        .expect("valid reference pattern")
});

/// Every http(s) URL in the text, verbatim and in order
pub fn extract_links(text: &str) -> Vec<String> {
    URL_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// One data point per number token per sentence
pub fn extract_data_points(sentences: &[String]) -> Vec<DataPoint> {
    let mut points = Vec::new();

    for sentence in sentences {
        let sentence = sentence.trim();
        for number in NUMBER_RE.find_iter(sentence) {
            points.push(DataPoint {
                value: number.as_str().to_string(),
                sentence: sentence.to_string(),
            });
        }
    }

    points
}

pub fn extract_references(text: &str) -> Vec<Reference> {
    REFERENCE_RE
        .captures_iter(text)
        .map(|caps| Reference {
            label: caps[1].to_string(),
            text: caps[2].trim().to_string(),
        })
        .filter(|r| !r.text.is_empty())
        .collect()
}
