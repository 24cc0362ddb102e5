use anyhow::Result;
use serde::Deserialize;

/// Process configuration.
///
/// Loaded from an optional file plus environment overrides with the
/// `INTERVIEW` prefix and `__` as the nesting separator, e.g.
/// `INTERVIEW_DEEPGRAM__API_KEY`. Provider secrets are expected to come from
/// the environment (a local `.env` is loaded by the binary).
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub worker: WorkerConfig,
    pub deepgram: DeepgramConfig,
    pub groq: GroqConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WorkerConfig {
    /// NATS server URL
    pub nats_url: String,

    /// Agent name, used for logging
    pub agent_name: String,

    /// Subject job assignments arrive on
    pub job_subject: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeepgramConfig {
    /// API key for Deepgram STT and TTS
    pub api_key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GroqConfig {
    /// API key for Groq language generation
    pub api_key: String,
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .set_default("worker.nats_url", "nats://localhost:4222")?
            .set_default("worker.agent_name", "mock-interviewer")?
            .set_default("worker.job_subject", "agents.jobs.mock-interviewer")?
            .set_default("deepgram.api_key", "")?
            .set_default("groq.api_key", "")?
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("INTERVIEW").separator("__"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
