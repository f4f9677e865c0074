use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::groq::GroqClient;
use crate::ollama::OllamaClient;

/// A text-in, text-out completion backend
#[async_trait::async_trait]
pub trait CompletionClient: Send + Sync {
    fn model(&self) -> &str;

    async fn complete(&self, prompt: &str) -> Result<String>;
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// Hosted, OpenAI-compatible chat completions
    Groq,
    /// Local `/api/generate`
    Ollama,
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provider::Groq => write!(f, "groq"),
            Provider::Ollama => write!(f, "ollama"),
        }
    }
}

impl FromStr for Provider {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "groq" => Ok(Provider::Groq),
            "ollama" => Ok(Provider::Ollama),
            other => anyhow::bail!("Unknown LLM provider: {} (expected groq or ollama)", other),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    pub provider: Provider,
    /// Overrides the provider's default endpoint
    pub base_url: Option<String>,
    pub model: String,
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    pub temperature: f32,
    pub max_tokens: usize,
    pub request_timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: Provider::Groq,
            base_url: None,
            model: "llama-3.3-70b-specdec".to_string(),
            api_key: None,
            temperature: 0.7,
            max_tokens: 4096,
            request_timeout_secs: 120,
        }
    }
}

impl LlmConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Build the client selected by `config.provider`
pub fn build_client(config: &LlmConfig) -> Result<Box<dyn CompletionClient>> {
    let client: Box<dyn CompletionClient> = match config.provider {
        Provider::Groq => Box::new(GroqClient::from_config(config)?),
        Provider::Ollama => Box::new(OllamaClient::from_config(config)?),
    };

    tracing::info!(provider = %config.provider, model = client.model(), "LLM client ready");
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_parsing() {
        assert_eq!("groq".parse::<Provider>().unwrap(), Provider::Groq);
        assert_eq!(" Ollama ".parse::<Provider>().unwrap(), Provider::Ollama);
        assert!("openai".parse::<Provider>().is_err());
    }

    #[test]
    fn test_defaults_match_hosted_model() {
        let config = LlmConfig::default();
        assert_eq!(config.provider, Provider::Groq);
        assert_eq!(config.model, "llama-3.3-70b-specdec");
        assert_eq!(config.max_tokens, 4096);
        assert!((config.temperature - 0.7).abs() < f32::EPSILON);
    }

    #[test]
    fn test_groq_requires_api_key() {
        let err = build_client(&LlmConfig::default()).err().unwrap();
        assert!(err.to_string().contains("API key"));
    }

    #[test]
    fn test_ollama_needs_no_key() {
        let config = LlmConfig {
            provider: Provider::Ollama,
            model: "llama3".to_string(),
            ..Default::default()
        };
        let client = build_client(&config).unwrap();
        assert_eq!(client.model(), "llama3");
    }

    #[test]
    fn test_api_key_not_serialized() {
        let config = LlmConfig {
            api_key: Some("secret".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("secret"));
    }
}
