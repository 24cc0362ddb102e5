use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::agent::AgentDefinition;

/// Session-level turn-taking and interruption tuning.
///
/// These are the defaults for a session; a persona may override the
/// endpointing bounds and the interruption flag (see
/// [`AgentDefinition`]), and the persona wins when both are set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionOptions {
    /// Minimum wait after detected silence before responding
    pub min_endpointing_delay: Duration,

    /// Maximum wait for end-of-turn before responding anyway
    pub max_endpointing_delay: Duration,

    /// Whether the user may interrupt the agent mid-utterance
    pub allow_interruptions: bool,

    /// Continuous user speech required to count as an interruption
    pub min_interruption_duration: Duration,

    /// Minimum gap between consecutive agent utterances
    pub min_consecutive_speech_delay: Duration,

    /// Silence duration after which the user is considered away
    pub user_away_timeout: Duration,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            min_endpointing_delay: Duration::from_millis(400), // Faster turn detection
            max_endpointing_delay: Duration::from_secs(5),     // Don't wait too long
            allow_interruptions: true,
            min_interruption_duration: Duration::from_millis(500), // 500ms speech = interruption
            min_consecutive_speech_delay: Duration::from_millis(300), // Prevent rapid-fire responses
            user_away_timeout: Duration::from_secs(20),
        }
    }
}

impl SessionOptions {
    /// Check the endpointing bounds: minimum must not exceed maximum
    pub fn validate(&self) -> Result<()> {
        if self.min_endpointing_delay > self.max_endpointing_delay {
            bail!(
                "Session minimum endpointing delay ({}ms) exceeds maximum ({}ms)",
                self.min_endpointing_delay.as_millis(),
                self.max_endpointing_delay.as_millis()
            );
        }
        if self.min_interruption_duration.is_zero() {
            bail!("Minimum interruption duration must be greater than zero");
        }
        Ok(())
    }

    /// Resolve the effective endpointing bounds for an agent.
    ///
    /// Persona-level overrides take precedence; the session values apply
    /// where the persona leaves them unset.
    pub fn resolve_endpointing(&self, agent: &AgentDefinition) -> (Duration, Duration) {
        (
            agent
                .min_endpointing_delay
                .unwrap_or(self.min_endpointing_delay),
            agent
                .max_endpointing_delay
                .unwrap_or(self.max_endpointing_delay),
        )
    }

    /// Resolve the effective interruption flag, persona override first
    pub fn resolve_interruptions(&self, agent: &AgentDefinition) -> bool {
        agent.allow_interruptions.unwrap_or(self.allow_interruptions)
    }
}
