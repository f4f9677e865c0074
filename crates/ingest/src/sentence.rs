use unicode_segmentation::UnicodeSegmentation;

/// Split text into sentences on UAX #29 boundaries.
///
/// PDF extraction hard-wraps lines, and a line feed is a sentence boundary
/// under UAX #29, so whitespace runs are collapsed before splitting.
pub fn split_sentences(text: &str) -> Vec<String> {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");

    collapsed
        .split_sentence_bounds()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
