use extract::KeywordFilter;
use ingest::Chunk;
use serde::{Deserialize, Serialize};

use crate::client::CompletionClient;
use crate::prompt::{self, DEFAULT_FOCUS_CONTEXT, FULL_CONTEXT};
use crate::retry::RetryPolicy;

/// Placeholder written in place of a summary the LLM could not produce
pub const FAILURE_PLACEHOLDER: &str = "Failed to summarize due to API error.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "text", rename_all = "lowercase")]
pub enum SummaryOutcome {
    Summarized(String),
    Failed(String),
}

impl SummaryOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, SummaryOutcome::Failed(_))
    }

    /// Text that goes into the report
    pub fn as_report_text(&self) -> &str {
        match self {
            SummaryOutcome::Summarized(text) => text,
            SummaryOutcome::Failed(_) => FAILURE_PLACEHOLDER,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkSummary {
    /// 1-based chunk number
    pub chunk: usize,
    pub outcome: SummaryOutcome,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub full: Vec<ChunkSummary>,
    /// Only chunks that contained keyword matches
    pub focused: Vec<ChunkSummary>,
}

impl DocumentSummary {
    pub fn failures(&self) -> usize {
        self.full
            .iter()
            .chain(self.focused.iter())
            .filter(|s| s.outcome.is_failure())
            .count()
    }
}

pub struct Summarizer {
    client: Box<dyn CompletionClient>,
    retry: RetryPolicy,
    focus_context: String,
}

impl Summarizer {
    pub fn new(client: Box<dyn CompletionClient>) -> Self {
        Self {
            client,
            retry: RetryPolicy::default(),
            focus_context: DEFAULT_FOCUS_CONTEXT.to_string(),
        }
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_focus_context(mut self, focus_context: impl Into<String>) -> Self {
        self.focus_context = focus_context.into();
        self
    }

    /// Summarize `text`; client errors become `SummaryOutcome::Failed`
    pub async fn summarize(&self, text: &str, context: &str) -> SummaryOutcome {
        let prompt = prompt::build_summary_prompt(text, context);

        let result = self
            .retry
            .retry("summarize", || self.client.complete(&prompt))
            .await;

        match result {
            Ok(summary) => SummaryOutcome::Summarized(summary.trim().to_string()),
            Err(e) => {
                tracing::warn!(
                    model = self.client.model(),
                    context = context,
                    error = %format!("{:#}", e),
                    "Summarization failed"
                );
                SummaryOutcome::Failed(format!("{:#}", e))
            }
        }
    }

    /// Full summary for every chunk, plus a focused summary of the keyword
    /// sentences in each chunk that has any
    pub async fn summarize_chunks(
        &self,
        chunks: &[Chunk],
        filter: &KeywordFilter,
    ) -> DocumentSummary {
        let mut summary = DocumentSummary::default();

        for chunk in chunks {
            tracing::info!(
                chunk = chunk.number(),
                total = chunks.len(),
                words = chunk.word_count,
                "Summarizing chunk"
            );

            summary.full.push(ChunkSummary {
                chunk: chunk.number(),
                outcome: self.summarize(&chunk.text, FULL_CONTEXT).await,
            });

            let focused = filter.filter_sentences(&chunk.sentences);
            if !focused.is_empty() {
                summary.focused.push(ChunkSummary {
                    chunk: chunk.number(),
                    outcome: self.summarize(&focused.join(" "), &self.focus_context).await,
                });
            }
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use ingest::{Chunker, ChunkerConfig};
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    /// Replays canned responses and records every prompt it receives
    struct ScriptedClient {
        responses: Mutex<VecDeque<Result<String>>>,
        prompts: Arc<Mutex<Vec<String>>>,
    }

    impl ScriptedClient {
        fn new(responses: Vec<Result<String>>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                prompts: Arc::default(),
            }
        }
    }

    #[async_trait::async_trait]
    impl CompletionClient for ScriptedClient {
        fn model(&self) -> &str {
            "scripted"
        }

        async fn complete(&self, prompt: &str) -> Result<String> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok("summary".to_string()))
        }
    }

    #[tokio::test]
    async fn test_success_is_trimmed() {
        let client = ScriptedClient::new(vec![Ok("  Key result.\n".to_string())]);
        let summarizer = Summarizer::new(Box::new(client));

        let outcome = summarizer.summarize("text", FULL_CONTEXT).await;
        assert_eq!(outcome, SummaryOutcome::Summarized("Key result.".to_string()));
        assert_eq!(outcome.as_report_text(), "Key result.");
    }

    #[tokio::test]
    async fn test_failure_becomes_placeholder() {
        let client = ScriptedClient::new(vec![Err(anyhow::anyhow!("503 Service Unavailable"))]);
        let summarizer = Summarizer::new(Box::new(client));

        let outcome = summarizer.summarize("text", FULL_CONTEXT).await;
        assert!(outcome.is_failure());
        assert_eq!(outcome.as_report_text(), FAILURE_PLACEHOLDER);
        match outcome {
            SummaryOutcome::Failed(reason) => assert!(reason.contains("503")),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_retry_recovers() {
        let client = ScriptedClient::new(vec![
            Err(anyhow::anyhow!("timeout")),
            Ok("Recovered.".to_string()),
        ]);
        let summarizer =
            Summarizer::new(Box::new(client)).with_retry(RetryPolicy::new(1, 0, 0));

        let outcome = summarizer.summarize("text", FULL_CONTEXT).await;
        assert_eq!(outcome, SummaryOutcome::Summarized("Recovered.".to_string()));
    }

    #[tokio::test]
    async fn test_focused_only_for_keyword_chunks() {
        let client = ScriptedClient::new(Vec::new());
        let prompts = client.prompts.clone();
        let summarizer = Summarizer::new(Box::new(client)).with_focus_context("Grid Risks");

        let chunker = Chunker::new(ChunkerConfig { max_words: 4 });
        let chunks = chunker.chunk_text(
            "Sales grew fast. Grid strain rises. Prices fell again.",
        );
        assert_eq!(chunks.len(), 3);

        let filter = KeywordFilter::new(["grid strain"]);
        let summary = summarizer.summarize_chunks(&chunks, &filter).await;

        assert_eq!(summary.full.len(), 3);
        assert_eq!(summary.focused.len(), 1);
        assert_eq!(summary.focused[0].chunk, 2);
        assert_eq!(summary.failures(), 0);

        let prompts = prompts.lock().unwrap();
        assert_eq!(prompts.len(), 4);
        assert!(prompts[0].contains("Context: Full PDF Summary."));
        assert!(prompts[2].contains("Context: Grid Risks."));
        assert!(prompts[2].contains("Text:\nGrid strain rises.\n\n"));
    }

    #[tokio::test]
    async fn test_failures_counted_and_processing_continues() {
        let client = ScriptedClient::new(vec![
            Err(anyhow::anyhow!("rate limited")),
            Ok("Second chunk summary.".to_string()),
        ]);
        let summarizer = Summarizer::new(Box::new(client));

        let chunks = Chunker::new(ChunkerConfig { max_words: 2 })
            .chunk_text("First chunk. Second chunk.");
        let summary = summarizer
            .summarize_chunks(&chunks, &KeywordFilter::new(Vec::<String>::new()))
            .await;

        assert_eq!(summary.full.len(), 2);
        assert!(summary.full[0].outcome.is_failure());
        assert_eq!(summary.full[1].outcome.as_report_text(), "Second chunk summary.");
        assert_eq!(summary.failures(), 1);
    }
}
