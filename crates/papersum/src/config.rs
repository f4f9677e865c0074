use anyhow::{Context, Result};
use extract::DEFAULT_KEYWORDS;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use summarize::{LlmConfig, RetryConfig};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub input_dir: PathBuf,
    /// Defaults to `input_dir`
    pub output_dir: Option<PathBuf>,
    pub extensions: Vec<String>,
    pub chunking: ChunkingConfig,
    pub focus: FocusConfig,
    pub write_json: bool,
    pub llm: LlmConfig,
    pub retry: RetryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkingConfig {
    pub max_words: usize,
    pub short_summary_words: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FocusConfig {
    pub keywords: Vec<String>,
    /// Context sent to the LLM with keyword sentences
    pub context: String,
    /// Section heading in the detailed report
    pub heading: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            output_dir: None,
            extensions: vec!["pdf".to_string()],
            chunking: ChunkingConfig::default(),
            focus: FocusConfig::default(),
            write_json: false,
            llm: LlmConfig::default(),
            retry: RetryConfig::default(),
        }
    }
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            max_words: 3000,
            short_summary_words: 300,
        }
    }
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self {
            keywords: DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            context: "EV Disadvantages Only".to_string(),
            heading: "EV Disadvantages".to_string(),
        }
    }
}

impl FocusConfig {
    /// Report heading for a prompt context: "Battery Safety Only" -> "Battery Safety"
    pub fn heading_for(context: &str) -> String {
        let context = context.trim();
        context
            .strip_suffix(" Only")
            .unwrap_or(context)
            .trim_end()
            .to_string()
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {:?}", path))?;
        serde_json::from_str(&raw).context(format!("Failed to parse config file: {:?}", path))
    }

    pub fn output_root(&self) -> &Path {
        self.output_dir.as_deref().unwrap_or(&self.input_dir)
    }

    pub fn validate(&self) -> Result<()> {
        if self.chunking.max_words == 0 {
            anyhow::bail!("chunking.max_words must be greater than zero");
        }
        if self.extensions.is_empty() {
            anyhow::bail!("at least one input extension is required");
        }
        if self.focus.keywords.iter().all(|k| k.trim().is_empty()) {
            tracing::warn!("No focus keywords configured; focused summaries will be empty");
        }
        Ok(())
    }
}

/// One keyword per line; blank lines and `#` comments are skipped
pub fn load_keywords(path: &Path) -> Result<Vec<String>> {
    let raw = std::fs::read_to_string(path)
        .context(format!("Failed to read keywords file: {:?}", path))?;

    Ok(raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}
