pub mod llm;
pub mod stt;
pub mod tts;
pub mod vad;

pub use llm::{GroqLlm, LlmConfig};
pub use stt::{DeepgramStt, SttConfig};
pub use tts::{DeepgramTts, TtsConfig};
pub use vad::{SileroVad, VadConfig};

use anyhow::Result;
use std::sync::Arc;

/// Voice-activity detection capability: classifies audio frames as speech or
/// silence. The holder carries tuning only; inference runs in the hosting
/// pipeline.
pub trait VoiceDetector: Send + Sync {
    /// Provider name for logging and session descriptors
    fn label(&self) -> &'static str;

    /// Tuning values this detector was loaded with
    fn config(&self) -> &VadConfig;
}

/// Speech-to-text capability backed by a hosted transcription API
pub trait SpeechToText: Send + Sync {
    fn label(&self) -> &'static str;
    fn config(&self) -> &SttConfig;
}

/// Language-generation capability backed by a hosted LLM API
pub trait LanguageModel: Send + Sync {
    fn label(&self) -> &'static str;
    fn config(&self) -> &LlmConfig;
}

/// Speech-synthesis capability backed by a hosted TTS API
pub trait SpeechSynthesizer: Send + Sync {
    fn label(&self) -> &'static str;
    fn config(&self) -> &TtsConfig;
}

/// Factory for the four pipeline capabilities.
///
/// The session bootstrapper builds providers through this trait so the
/// production implementation (hosted APIs) can be swapped for recording stubs
/// in tests.
#[async_trait::async_trait]
pub trait CapabilityFactory: Send + Sync {
    async fn load_vad(&self, config: VadConfig) -> Result<Arc<dyn VoiceDetector>>;

    async fn init_stt(&self, config: SttConfig) -> Result<Arc<dyn SpeechToText>>;

    async fn init_llm(&self, config: LlmConfig) -> Result<Arc<dyn LanguageModel>>;

    async fn init_tts(&self, config: TtsConfig) -> Result<Arc<dyn SpeechSynthesizer>>;
}

/// Production capability factory: Silero VAD, Deepgram STT/TTS, Groq LLM
pub struct HostedCapabilities {
    deepgram_api_key: String,
    groq_api_key: String,
}

impl HostedCapabilities {
    pub fn new(deepgram_api_key: String, groq_api_key: String) -> Self {
        Self {
            deepgram_api_key,
            groq_api_key,
        }
    }

    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(config.deepgram.api_key.clone(), config.groq.api_key.clone())
    }
}

#[async_trait::async_trait]
impl CapabilityFactory for HostedCapabilities {
    async fn load_vad(&self, config: VadConfig) -> Result<Arc<dyn VoiceDetector>> {
        Ok(Arc::new(SileroVad::load(config)?))
    }

    async fn init_stt(&self, config: SttConfig) -> Result<Arc<dyn SpeechToText>> {
        Ok(Arc::new(DeepgramStt::init(config, &self.deepgram_api_key)?))
    }

    async fn init_llm(&self, config: LlmConfig) -> Result<Arc<dyn LanguageModel>> {
        Ok(Arc::new(GroqLlm::init(config, &self.groq_api_key)?))
    }

    async fn init_tts(&self, config: TtsConfig) -> Result<Arc<dyn SpeechSynthesizer>> {
        Ok(Arc::new(DeepgramTts::init(config, &self.deepgram_api_key)?))
    }
}
