use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::providers::{LlmConfig, SttConfig, TtsConfig, VadConfig};

/// A job handed to the worker: one room waiting for an agent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobAssignment {
    /// Job identifier; the worker generates one when absent
    pub job_id: Option<String>,

    /// Name of the room the agent should join
    pub room: String,

    /// When the job was issued (RFC 3339)
    pub timestamp: String,
}

/// Announcement published when an agent session starts in a room.
///
/// Carries the resolved turn-taking tuning and the configuration of all four
/// capability providers, so the hosting pipeline can run the conversation
/// with exactly these parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionDescriptor {
    /// Room the session is bound to
    pub room: String,

    /// Persona instruction text
    pub instructions: String,

    /// Effective minimum endpointing delay (persona override applied)
    pub min_endpointing_delay: Duration,

    /// Effective maximum endpointing delay (persona override applied)
    pub max_endpointing_delay: Duration,

    /// Effective interruption flag (persona override applied)
    pub allow_interruptions: bool,

    /// Continuous user speech required to count as an interruption
    pub min_interruption_duration: Duration,

    /// Minimum gap between consecutive agent utterances
    pub min_consecutive_speech_delay: Duration,

    /// Silence duration after which the user is considered away
    pub user_away_timeout: Duration,

    /// Voice-activity detector tuning
    pub vad: VadConfig,

    /// Speech-to-text tuning
    pub stt: SttConfig,

    /// Language-model tuning
    pub llm: LlmConfig,

    /// Speech-synthesis tuning
    pub tts: TtsConfig,

    /// When the session started (RFC 3339)
    pub timestamp: String,
}

/// A scripted utterance request for an active session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplyDirective {
    /// Instructions for the single reply to generate
    pub instructions: String,

    /// When the reply was requested (RFC 3339)
    pub timestamp: String,
}

impl ReplyDirective {
    pub fn new(instructions: impl Into<String>) -> Self {
        Self {
            instructions: instructions.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
