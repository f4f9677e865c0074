pub mod keywords;
pub mod patterns;
pub mod schema;

pub use keywords::{DEFAULT_KEYWORDS, KeywordFilter};
pub use patterns::{extract_data_points, extract_links, extract_references};
pub use schema::{DataPoint, ExtractionResult, Reference, ShortSummary};

use ingest::split_sentences;

/// Pull links, numeric data points and reference lines out of a document's raw text
pub fn extract_all(text: &str) -> ExtractionResult {
    let sentences = split_sentences(text);

    let result = ExtractionResult {
        links: extract_links(text),
        data_points: extract_data_points(&sentences),
        references: extract_references(text),
    };

    tracing::debug!(
        links = result.links.len(),
        data_points = result.data_points.len(),
        references = result.references.len(),
        "Extracted patterns"
    );

    result
}
