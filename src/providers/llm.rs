use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::LanguageModel;

/// Tuning for the Groq language-generation service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Groq model identifier
    pub model: String,

    /// Sampling temperature (0.0 to 2.0)
    pub temperature: f32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: "llama-3.1-8b-instant".to_string(), // Fast model for instant responses
            temperature: 0.7,                          // Balanced creativity
        }
    }
}

/// Groq LLM capability holder
pub struct GroqLlm {
    config: LlmConfig,
    api_key: String,
}

impl GroqLlm {
    /// Validate tuning and credentials and build the generator handle
    pub fn init(config: LlmConfig, api_key: &str) -> Result<Self> {
        if api_key.is_empty() {
            bail!("Groq API key is not set");
        }
        if config.model.is_empty() {
            bail!("LLM model must not be empty");
        }
        if !(0.0..=2.0).contains(&config.temperature) {
            bail!(
                "LLM temperature must be within 0.0..=2.0, got {}",
                config.temperature
            );
        }

        info!(
            "Initialized Groq LLM (model={}, temperature={})",
            config.model, config.temperature
        );

        Ok(Self {
            config,
            api_key: api_key.to_string(),
        })
    }

    /// Credential handed to the hosted generation connection
    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl LanguageModel for GroqLlm {
    fn label(&self) -> &'static str {
        "groq"
    }

    fn config(&self) -> &LlmConfig {
        &self.config
    }
}
