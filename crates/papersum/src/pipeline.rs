use anyhow::Result;
use extract::KeywordFilter;
use ingest::{Chunker, ChunkerConfig, FileReader};
use report::{OutputLayout, PaperReport};
use std::path::Path;
use summarize::{DocumentSummary, Summarizer};
use tracing::info;

use crate::config::AppConfig;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunStats {
    pub files: usize,
    pub chunks: usize,
    pub failed_summaries: usize,
}

pub struct Pipeline {
    config: AppConfig,
    chunker: Chunker,
    filter: KeywordFilter,
    layout: OutputLayout,
    /// `None` in dry-run mode
    summarizer: Option<Summarizer>,
}

impl Pipeline {
    pub fn new(config: AppConfig, summarizer: Option<Summarizer>) -> Self {
        let chunker = Chunker::new(ChunkerConfig {
            max_words: config.chunking.max_words,
        });
        let filter = KeywordFilter::new(&config.focus.keywords);
        let layout = OutputLayout::new(config.output_root());

        Self {
            config,
            chunker,
            filter,
            layout,
            summarizer,
        }
    }

    /// Process every matching file in the input directory, in name order
    pub async fn run(&self) -> Result<RunStats> {
        self.layout.ensure_roots().await?;

        let files =
            FileReader::list_documents(&self.config.input_dir, &self.config.extensions).await?;
        info!(
            input = %self.config.input_dir.display(),
            output = %self.layout.root().display(),
            files = files.len(),
            "Starting run"
        );

        let mut stats = RunStats::default();
        for path in &files {
            let file_stats = self.process_file(path).await?;
            stats.files += 1;
            stats.chunks += file_stats.chunks;
            stats.failed_summaries += file_stats.failed_summaries;
        }

        Ok(stats)
    }

    pub async fn process_file(&self, path: &Path) -> Result<RunStats> {
        let (document, chunks) = ingest::ingest_file(path, &self.chunker).await?;
        info!(
            file = %document.source,
            chunks = chunks.len(),
            max_words = self.chunker.max_words(),
            "Processing file"
        );

        let extraction = extract::extract_all(&document.text);

        let summary = match &self.summarizer {
            Some(summarizer) => summarizer.summarize_chunks(&chunks, &self.filter).await,
            None => DocumentSummary::default(),
        };

        let short_summary = self
            .filter
            .short_summary(&document.text, self.config.chunking.short_summary_words);

        let failed_summaries = summary.failures();
        let report = PaperReport {
            source: document.source,
            stem: document.stem,
            summary,
            extraction,
            short_summary,
            focus_heading: self.config.focus.heading.clone(),
        };

        let written = report::write_report(&self.layout, &report, self.config.write_json).await?;
        info!(
            file = %report.source,
            outputs = written.len(),
            failed_summaries,
            "Summarization completed"
        );

        Ok(RunStats {
            files: 1,
            chunks: chunks.len(),
            failed_summaries,
        })
    }
}
