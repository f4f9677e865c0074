use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    pub index: usize,
    pub text: String,
    pub sentences: Vec<String>,
    pub word_count: usize,
}

impl Chunk {
    pub fn from_sentences(index: usize, sentences: Vec<String>) -> Self {
        let text = sentences.join(" ");
        let word_count = word_count(&text);

        Self {
            index,
            text,
            sentences,
            word_count,
        }
    }

    /// 1-based position used in report headings
    pub fn number(&self) -> usize {
        self.index + 1
    }
}

/// Whitespace-separated token count
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
