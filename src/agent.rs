use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Role-play script for the mock-interviewer persona
pub const INTERVIEWER_INSTRUCTIONS: &str = "\
You are a mock interviewer. Keep it brief and natural.

RULES:
- Ask ONE question at a time, then STOP
- Keep responses to 1-2 sentences maximum
- Never list multiple questions in one turn
- Wait for the candidate to finish before responding

FLOW:
1. First, ask what role they're interviewing for
2. Ask 4-5 interview questions one at a time
3. Give brief feedback only at the very end

STYLE:
- Be conversational like a real interviewer
- Ask follow-ups based on their specific answers
- If answer is vague: \"Can you elaborate on that?\"
- If off-topic: \"Let's refocus on the interview question\"
- Don't explain your process - just interview naturally

FEEDBACK (end only):
- Mention 1-2 strengths
- Suggest 1-2 improvements
- Keep total feedback under 30 seconds when spoken";

/// Persona bound to an agent session: instruction text plus turn-taking
/// tolerances.
///
/// The endpointing and interruption fields are overrides: when `None`, the
/// session-level values from [`crate::session::SessionOptions`] apply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentDefinition {
    /// Static instruction text driving the conversation
    pub instructions: String,

    /// Minimum wait after detected silence before responding
    pub min_endpointing_delay: Option<Duration>,

    /// Maximum wait for end-of-turn before responding anyway
    pub max_endpointing_delay: Option<Duration>,

    /// Whether the user may interrupt the agent mid-utterance
    pub allow_interruptions: Option<bool>,
}

impl AgentDefinition {
    pub fn new(instructions: impl Into<String>) -> Self {
        Self {
            instructions: instructions.into(),
            min_endpointing_delay: None,
            max_endpointing_delay: None,
            allow_interruptions: None,
        }
    }

    /// The fixed mock-interviewer persona: faster turn detection and natural
    /// interruption handling
    pub fn interviewer() -> Self {
        Self {
            instructions: INTERVIEWER_INSTRUCTIONS.to_string(),
            min_endpointing_delay: Some(Duration::from_millis(400)), // Detect end of speech faster
            max_endpointing_delay: Some(Duration::from_secs(5)),     // Don't wait too long
            allow_interruptions: Some(true),
        }
    }

    /// Check the endpointing bounds: minimum must not exceed maximum
    pub fn validate(&self) -> Result<()> {
        if self.instructions.is_empty() {
            bail!("Agent instructions must not be empty");
        }
        if let (Some(min), Some(max)) = (self.min_endpointing_delay, self.max_endpointing_delay) {
            if min > max {
                bail!(
                    "Agent minimum endpointing delay ({}ms) exceeds maximum ({}ms)",
                    min.as_millis(),
                    max.as_millis()
                );
            }
        }
        Ok(())
    }
}
