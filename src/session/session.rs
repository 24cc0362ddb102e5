use super::options::SessionOptions;
use crate::agent::AgentDefinition;
use crate::bus::{ReplyDirective, Room, SessionDescriptor};
use crate::providers::{LanguageModel, SpeechSynthesizer, SpeechToText, VoiceDetector};
use anyhow::{bail, Result};
use chrono::Utc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

/// An agent session wiring a persona and four capability providers to a room.
///
/// The session itself performs no media processing; it resolves the effective
/// tuning, announces the session through the room exactly once, and forwards
/// reply directives. The hosting pipeline drives the conversation from there.
pub struct AgentSession {
    /// Session-level tuning (persona overrides applied at start)
    options: SessionOptions,

    /// Voice-activity detector handle
    vad: Arc<dyn VoiceDetector>,

    /// Speech-to-text handle
    stt: Arc<dyn SpeechToText>,

    /// Language-model handle
    llm: Arc<dyn LanguageModel>,

    /// Speech-synthesis handle
    tts: Arc<dyn SpeechSynthesizer>,

    /// Whether the session has been started
    started: AtomicBool,

    /// Room the session is bound to, set by `start`
    room: Mutex<Option<Arc<dyn Room>>>,
}

impl AgentSession {
    pub fn new(
        options: SessionOptions,
        vad: Arc<dyn VoiceDetector>,
        stt: Arc<dyn SpeechToText>,
        llm: Arc<dyn LanguageModel>,
        tts: Arc<dyn SpeechSynthesizer>,
    ) -> Self {
        Self {
            options,
            vad,
            stt,
            llm,
            tts,
            started: AtomicBool::new(false),
            room: Mutex::new(None),
        }
    }

    /// Start the session, binding the persona and the room.
    ///
    /// Validates both tuning records, resolves persona overrides, and
    /// announces the session through the room. Starting twice is an error.
    pub async fn start(&self, agent: &AgentDefinition, room: Arc<dyn Room>) -> Result<()> {
        agent.validate()?;
        self.options.validate()?;

        if self.started.swap(true, Ordering::SeqCst) {
            bail!("Session already started");
        }

        let (min_endpointing_delay, max_endpointing_delay) =
            self.options.resolve_endpointing(agent);
        let allow_interruptions = self.options.resolve_interruptions(agent);

        info!(
            "Starting session in room {} (vad={}, stt={}, llm={}, tts={})",
            room.name(),
            self.vad.label(),
            self.stt.label(),
            self.llm.label(),
            self.tts.label()
        );

        let descriptor = SessionDescriptor {
            room: room.name().to_string(),
            instructions: agent.instructions.clone(),
            min_endpointing_delay,
            max_endpointing_delay,
            allow_interruptions,
            min_interruption_duration: self.options.min_interruption_duration,
            min_consecutive_speech_delay: self.options.min_consecutive_speech_delay,
            user_away_timeout: self.options.user_away_timeout,
            vad: self.vad.config().clone(),
            stt: self.stt.config().clone(),
            llm: self.llm.config().clone(),
            tts: self.tts.config().clone(),
            timestamp: Utc::now().to_rfc3339(),
        };

        if let Err(e) = room.begin_session(&descriptor).await {
            self.started.store(false, Ordering::SeqCst);
            return Err(e);
        }

        {
            let mut bound = self.room.lock().await;
            *bound = Some(room);
        }

        info!("Session started successfully");

        Ok(())
    }

    /// Request one scripted reply from the session.
    ///
    /// Fire-and-forget relative to the ongoing conversation: the hosting
    /// pipeline generates and speaks the reply.
    pub async fn generate_reply(&self, instructions: &str) -> Result<()> {
        if !self.started.load(Ordering::SeqCst) {
            bail!("Session has not been started");
        }

        let room = {
            let bound = self.room.lock().await;
            match bound.as_ref() {
                Some(room) => Arc::clone(room),
                None => bail!("Session has no bound room"),
            }
        };

        room.request_reply(&ReplyDirective::new(instructions)).await
    }

    /// Whether `start` has completed
    pub fn is_started(&self) -> bool {
        self.started.load(Ordering::SeqCst)
    }
}
