use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::SpeechToText;

/// Tuning for the Deepgram speech-to-text service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SttConfig {
    /// Deepgram model identifier
    pub model: String,

    /// Transcription language code
    pub language: String,

    /// Automatic punctuation and formatting
    pub smart_format: bool,

    /// Sample rate of the audio sent for transcription, in Hz
    pub sample_rate: u32,
}

impl Default for SttConfig {
    fn default() -> Self {
        Self {
            model: "nova-2".to_string(), // Fastest Deepgram model
            language: "en".to_string(),
            smart_format: true,
            sample_rate: 16000,
        }
    }
}

/// Deepgram STT capability holder
pub struct DeepgramStt {
    config: SttConfig,
    api_key: String,
}

impl DeepgramStt {
    /// Validate tuning and credentials and build the transcriber handle
    pub fn init(config: SttConfig, api_key: &str) -> Result<Self> {
        if api_key.is_empty() {
            bail!("Deepgram API key is not set");
        }
        if config.model.is_empty() {
            bail!("STT model must not be empty");
        }
        if config.language.is_empty() {
            bail!("STT language must not be empty");
        }
        if config.sample_rate == 0 {
            bail!("STT sample rate must be greater than zero");
        }

        info!(
            "Initialized Deepgram STT (model={}, language={}, smart_format={})",
            config.model, config.language, config.smart_format
        );

        Ok(Self {
            config,
            api_key: api_key.to_string(),
        })
    }

    /// Credential handed to the hosted transcription connection
    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl SpeechToText for DeepgramStt {
    fn label(&self) -> &'static str {
        "deepgram"
    }

    fn config(&self) -> &SttConfig {
        &self.config
    }
}
