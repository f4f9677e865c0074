use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use crate::config::{AppConfig, FocusConfig, load_keywords};

#[derive(Parser, Debug)]
#[command(
    name = "papersum",
    about = "Summarize a directory of research paper PDFs with an LLM"
)]
pub struct Cli {
    /// Directory containing the papers
    #[arg(env = "PAPERSUM_INPUT_DIR")]
    pub input_dir: Option<PathBuf>,

    /// JSON config file; flags override its values
    #[arg(long, env = "PAPERSUM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Root for the Summaries/ and Short_Summary/ folders (defaults to the input directory)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// File extension to process; repeatable
    #[arg(long = "ext")]
    pub extensions: Vec<String>,

    /// Word budget per chunk sent to the LLM
    #[arg(long)]
    pub max_words: Option<usize>,

    /// Word budget for the keyword short summary
    #[arg(long)]
    pub short_words: Option<usize>,

    /// Keyword list, one per line
    #[arg(long)]
    pub keywords_file: Option<PathBuf>,

    /// Context label sent with keyword-filtered sentences
    #[arg(long)]
    pub focus: Option<String>,

    /// Report heading for focused sections (derived from --focus when omitted)
    #[arg(long)]
    pub focus_heading: Option<String>,

    /// LLM provider (groq or ollama)
    #[arg(long, env = "PAPERSUM_PROVIDER")]
    pub provider: Option<String>,

    /// Completion model name
    #[arg(long, env = "PAPERSUM_MODEL")]
    pub model: Option<String>,

    /// Override the provider endpoint
    #[arg(long, env = "PAPERSUM_BASE_URL")]
    pub base_url: Option<String>,

    /// Groq API key
    #[arg(long, env = "GROQ_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Sampling temperature
    #[arg(long)]
    pub temperature: Option<f32>,

    /// Maximum completion tokens per request
    #[arg(long)]
    pub max_tokens: Option<usize>,

    /// HTTP timeout per request in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Retries per LLM call after the first failure
    #[arg(long)]
    pub retries: Option<usize>,

    /// Also write <stem>_extraction.json next to the detailed summary
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Skip all LLM calls; write extraction and short summaries only
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Emit logs as JSON lines
    #[arg(long, default_value_t = false)]
    pub log_json: bool,
}

impl Cli {
    /// Defaults, then the config file, then flags and environment
    pub fn resolve_config(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::load(path)?,
            None => AppConfig::default(),
        };

        if let Some(dir) = &self.input_dir {
            config.input_dir = dir.clone();
        }
        if let Some(dir) = &self.output {
            config.output_dir = Some(dir.clone());
        }
        if !self.extensions.is_empty() {
            config.extensions = self
                .extensions
                .iter()
                .map(|e| e.trim_start_matches('.').to_string())
                .collect();
        }
        if let Some(n) = self.max_words {
            config.chunking.max_words = n;
        }
        if let Some(n) = self.short_words {
            config.chunking.short_summary_words = n;
        }
        if let Some(path) = &self.keywords_file {
            config.focus.keywords = load_keywords(path)?;
        }
        if let Some(focus) = &self.focus {
            config.focus.context = focus.clone();
            config.focus.heading = FocusConfig::heading_for(focus);
        }
        if let Some(heading) = &self.focus_heading {
            config.focus.heading = heading.clone();
        }
        if let Some(provider) = &self.provider {
            config.llm.provider = provider.parse().context("Invalid --provider")?;
        }
        if let Some(model) = &self.model {
            config.llm.model = model.clone();
        }
        if let Some(url) = &self.base_url {
            config.llm.base_url = Some(url.clone());
        }
        if let Some(key) = &self.api_key {
            config.llm.api_key = Some(key.clone());
        }
        if let Some(t) = self.temperature {
            config.llm.temperature = t;
        }
        if let Some(n) = self.max_tokens {
            config.llm.max_tokens = n;
        }
        if let Some(secs) = self.timeout_secs {
            config.llm.request_timeout_secs = secs;
        }
        if let Some(n) = self.retries {
            config.retry.max_retries = n;
        }
        if self.json {
            config.write_json = true;
        }

        config.validate()?;
        Ok(config)
    }
}
