use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::SpeechSynthesizer;

/// Tuning for the Deepgram speech-synthesis service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TtsConfig {
    /// Deepgram voice model identifier
    pub model: String,

    /// Output audio encoding
    pub encoding: String,

    /// Output sample rate in Hz
    pub sample_rate: u32,
}

impl Default for TtsConfig {
    fn default() -> Self {
        Self {
            model: "aura-asteria-en".to_string(), // Natural voice
            encoding: "linear16".to_string(),
            sample_rate: 24000,
        }
    }
}

/// Deepgram TTS capability holder
pub struct DeepgramTts {
    config: TtsConfig,
    api_key: String,
}

impl DeepgramTts {
    /// Validate tuning and credentials and build the synthesizer handle
    pub fn init(config: TtsConfig, api_key: &str) -> Result<Self> {
        if api_key.is_empty() {
            bail!("Deepgram API key is not set");
        }
        if config.model.is_empty() {
            bail!("TTS model must not be empty");
        }
        if config.encoding.is_empty() {
            bail!("TTS encoding must not be empty");
        }
        if !(8000..=48000).contains(&config.sample_rate) {
            bail!(
                "TTS sample rate must be within 8000..=48000 Hz, got {}",
                config.sample_rate
            );
        }

        info!(
            "Initialized Deepgram TTS (model={}, encoding={}, sample_rate={})",
            config.model, config.encoding, config.sample_rate
        );

        Ok(Self {
            config,
            api_key: api_key.to_string(),
        })
    }

    /// Credential handed to the hosted synthesis connection
    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl SpeechSynthesizer for DeepgramTts {
    fn label(&self) -> &'static str {
        "deepgram"
    }

    fn config(&self) -> &TtsConfig {
        &self.config
    }
}
