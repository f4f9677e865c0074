use crate::chunk::{Chunk, word_count};
use crate::sentence::split_sentences;

pub struct ChunkerConfig {
    pub max_words: usize,
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self { max_words: 3000 }
    }
}

pub struct Chunker {
    config: ChunkerConfig,
}

impl Chunker {
    pub fn new(config: ChunkerConfig) -> Self {
        Self { config }
    }

    pub fn max_words(&self) -> usize {
        self.config.max_words
    }

    /// Greedily pack sentences into chunks of at most `max_words` words.
    ///
    /// A sentence that alone exceeds the budget becomes its own chunk.
    pub fn chunk_text(&self, text: &str) -> Vec<Chunk> {
        self.chunk_sentences(split_sentences(text))
    }

    pub fn chunk_sentences(&self, sentences: Vec<String>) -> Vec<Chunk> {
        let mut chunks = Vec::new();
        let mut buffer: Vec<String> = Vec::new();
        let mut buffer_words = 0;

        for sentence in sentences {
            let sentence_words = word_count(&sentence);

            // Flush before the budget would be exceeded
            if buffer_words + sentence_words > self.config.max_words && !buffer.is_empty() {
                let index = chunks.len();
                chunks.push(Chunk::from_sentences(index, std::mem::take(&mut buffer)));
                buffer_words = 0;
            }

            buffer.push(sentence);
            buffer_words += sentence_words;
        }

        if !buffer.is_empty() {
            let index = chunks.len();
            chunks.push(Chunk::from_sentences(index, buffer));
        }

        chunks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunker(max_words: usize) -> Chunker {
        Chunker::new(ChunkerConfig { max_words })
    }

    #[test]
    fn test_basic_chunking() {
        let text = "One two three. Four five six. Seven eight nine.";
        let chunks = chunker(6).chunk_text(text);

        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].text, "One two three. Four five six.");
        assert_eq!(chunks[1].text, "Seven eight nine.");
        assert_eq!(chunks[1].index, 1);
    }

    #[test]
    fn test_sentences_preserved_in_order() {
        let text = "Alpha beta. Gamma delta epsilon. Zeta. Eta theta iota kappa. Lambda mu.";
        let original = split_sentences(text);
        let chunks = chunker(4).chunk_text(text);

        let rejoined: Vec<String> = chunks
            .iter()
            .flat_map(|c| c.sentences.iter().cloned())
            .collect();
        assert_eq!(rejoined, original);

        for chunk in &chunks {
            assert!(chunk.word_count <= 4 || chunk.sentences.len() == 1);
        }
    }

    #[test]
    fn test_oversized_sentence_stands_alone() {
        let text = "Short one. This sentence is far too long for the budget. Tail.";
        let chunks = chunker(3).chunk_text(text);

        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].text, "Short one.");
        assert_eq!(chunks[1].sentences.len(), 1);
        assert_eq!(chunks[1].word_count, 9);
        assert_eq!(chunks[2].text, "Tail.");
    }

    #[test]
    fn test_oversized_first_sentence_has_no_empty_chunk() {
        let chunks = chunker(2).chunk_text("Way too many words here. Ok.");

        assert_eq!(chunks.len(), 2);
        assert!(chunks.iter().all(|c| !c.text.is_empty()));
    }

    #[test]
    fn test_exact_budget_fits() {
        let chunks = chunker(4).chunk_text("One two. Three four.");
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].word_count, 4);
    }

    #[test]
    fn test_empty_text() {
        let chunker = Chunker::new(ChunkerConfig::default());
        assert_eq!(chunker.max_words(), 3000);
        assert!(chunker.chunk_text("").is_empty());
    }
}
