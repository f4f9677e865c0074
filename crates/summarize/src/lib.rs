pub mod client;
pub mod groq;
pub mod ollama;
pub mod prompt;
pub mod retry;
pub mod summarizer;

pub use client::{CompletionClient, LlmConfig, Provider, build_client};
pub use groq::GroqClient;
pub use ollama::OllamaClient;
pub use retry::{RetryConfig, RetryPolicy};
pub use summarizer::{
    ChunkSummary, DocumentSummary, FAILURE_PLACEHOLDER, SummaryOutcome, Summarizer,
};
