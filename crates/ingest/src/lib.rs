pub mod chunk;
pub mod chunker;
pub mod document;
pub mod reader;
pub mod sentence;

pub use chunk::{Chunk, word_count};
pub use chunker::{Chunker, ChunkerConfig};
pub use document::Document;
pub use reader::FileReader;
pub use sentence::split_sentences;

use anyhow::Result;
use std::path::Path;

/// Read one file into a document
pub async fn read_document(file_path: &Path) -> Result<Document> {
    let text = FileReader::read_file(file_path).await?;
    let document = Document::new(file_path, text);

    tracing::debug!(
        file = %document.source,
        chars = document.text.len(),
        "Extracted document text"
    );

    Ok(document)
}

/// Read and chunk one file
pub async fn ingest_file(file_path: &Path, chunker: &Chunker) -> Result<(Document, Vec<Chunk>)> {
    let document = read_document(file_path).await?;
    let chunks = chunker.chunk_text(&document.text);

    Ok((document, chunks))
}
