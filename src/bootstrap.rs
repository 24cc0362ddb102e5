use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

use crate::agent::AgentDefinition;
use crate::bus::JobContext;
use crate::providers::{CapabilityFactory, LlmConfig, SttConfig, TtsConfig, VadConfig};
use crate::session::{AgentSession, SessionOptions};

/// Instruction for the single opening utterance
pub const GREETING_INSTRUCTIONS: &str =
    "Greet the user briefly and ask what role they're interviewing for. \
     Keep it under 2 sentences.";

/// Per-job entrypoint: join the room, assemble the session, start it, and
/// issue the scripted greeting.
///
/// A strictly ordered pipeline with early return on failure. Nothing is
/// caught or retried here; any error propagates to the worker's job-failure
/// handling.
pub async fn run_job(
    ctx: Arc<dyn JobContext>,
    capabilities: Arc<dyn CapabilityFactory>,
) -> Result<()> {
    let room = ctx.room();

    info!("Connecting to room: {}", room.name());
    ctx.connect().await.context("Failed to connect to room")?;
    info!("Connected to room successfully");

    let agent = AgentDefinition::interviewer();

    let vad = capabilities
        .load_vad(VadConfig::default())
        .await
        .context("Failed to load voice activity detector")?;
    let stt = capabilities
        .init_stt(SttConfig::default())
        .await
        .context("Failed to initialize speech-to-text")?;
    let llm = capabilities
        .init_llm(LlmConfig::default())
        .await
        .context("Failed to initialize language model")?;
    let tts = capabilities
        .init_tts(TtsConfig::default())
        .await
        .context("Failed to initialize speech synthesis")?;

    let session = AgentSession::new(SessionOptions::default(), vad, stt, llm, tts);

    session
        .start(&agent, room)
        .await
        .context("Failed to start agent session")?;
    info!("Agent started and listening");

    session
        .generate_reply(GREETING_INSTRUCTIONS)
        .await
        .context("Failed to request opening reply")?;

    Ok(())
}
