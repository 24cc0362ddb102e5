use anyhow::Result;
use interview_agent::providers::{
    DeepgramStt, DeepgramTts, GroqLlm, LlmConfig, SileroVad, SttConfig, TtsConfig, VadConfig,
};
use interview_agent::{
    AgentDefinition, AgentSession, ReplyDirective, Room, SessionDescriptor, SessionOptions,
};
use std::sync::Arc;
use std::time::Duration;

#[test]
fn test_session_options_defaults() {
    let options = SessionOptions::default();
    assert_eq!(options.min_endpointing_delay, Duration::from_millis(400));
    assert_eq!(options.max_endpointing_delay, Duration::from_secs(5));
    assert!(options.allow_interruptions);
    assert_eq!(options.min_interruption_duration, Duration::from_millis(500));
    assert_eq!(
        options.min_consecutive_speech_delay,
        Duration::from_millis(300)
    );
    assert_eq!(options.user_away_timeout, Duration::from_secs(20));

    // The endpointing window must be a real interval
    assert!(options.min_endpointing_delay < options.max_endpointing_delay);
    assert!(options.validate().is_ok());
}

#[test]
fn test_session_options_rejects_inverted_endpointing() {
    let options = SessionOptions {
        min_endpointing_delay: Duration::from_secs(6),
        max_endpointing_delay: Duration::from_secs(5),
        ..Default::default()
    };
    assert!(options.validate().is_err());
}

#[test]
fn test_session_options_rejects_zero_interruption_duration() {
    let options = SessionOptions {
        min_interruption_duration: Duration::ZERO,
        ..Default::default()
    };
    assert!(options.validate().is_err());
}

#[test]
fn test_interviewer_persona() {
    let agent = AgentDefinition::interviewer();
    assert!(agent.validate().is_ok());
    assert!(agent.instructions.contains("mock interviewer"));
    assert_eq!(agent.min_endpointing_delay, Some(Duration::from_millis(400)));
    assert_eq!(agent.max_endpointing_delay, Some(Duration::from_secs(5)));
    assert_eq!(agent.allow_interruptions, Some(true));

    let (min, max) = (
        agent.min_endpointing_delay.unwrap(),
        agent.max_endpointing_delay.unwrap(),
    );
    assert!(min < max);
}

#[test]
fn test_agent_rejects_inverted_endpointing() {
    let mut agent = AgentDefinition::new("You are a test persona.");
    agent.min_endpointing_delay = Some(Duration::from_secs(10));
    agent.max_endpointing_delay = Some(Duration::from_secs(5));
    assert!(agent.validate().is_err());
}

#[test]
fn test_agent_rejects_empty_instructions() {
    let agent = AgentDefinition::new("");
    assert!(agent.validate().is_err());
}

#[test]
fn test_endpointing_precedence_persona_wins() {
    let options = SessionOptions::default();

    let mut agent = AgentDefinition::new("You are a test persona.");
    agent.min_endpointing_delay = Some(Duration::from_millis(250));
    agent.max_endpointing_delay = Some(Duration::from_secs(3));

    let (min, max) = options.resolve_endpointing(&agent);
    assert_eq!(min, Duration::from_millis(250));
    assert_eq!(max, Duration::from_secs(3));
}

#[test]
fn test_endpointing_precedence_session_fallback() {
    let options = SessionOptions::default();
    let agent = AgentDefinition::new("You are a test persona.");

    let (min, max) = options.resolve_endpointing(&agent);
    assert_eq!(min, options.min_endpointing_delay);
    assert_eq!(max, options.max_endpointing_delay);
}

#[test]
fn test_interruption_precedence() {
    let options = SessionOptions {
        allow_interruptions: false,
        ..Default::default()
    };

    let mut agent = AgentDefinition::new("You are a test persona.");
    assert!(!options.resolve_interruptions(&agent));

    agent.allow_interruptions = Some(true);
    assert!(options.resolve_interruptions(&agent));
}

// ============================================================================
// Session lifecycle guards
// ============================================================================

struct QuietRoom;

#[async_trait::async_trait]
impl Room for QuietRoom {
    fn name(&self) -> &str {
        "test-room"
    }

    async fn begin_session(&self, _descriptor: &SessionDescriptor) -> Result<()> {
        Ok(())
    }

    async fn request_reply(&self, _directive: &ReplyDirective) -> Result<()> {
        Ok(())
    }
}

fn test_session() -> AgentSession {
    AgentSession::new(
        SessionOptions::default(),
        Arc::new(SileroVad::load(VadConfig::default()).unwrap()),
        Arc::new(DeepgramStt::init(SttConfig::default(), "dg-test-key").unwrap()),
        Arc::new(GroqLlm::init(LlmConfig::default(), "gq-test-key").unwrap()),
        Arc::new(DeepgramTts::init(TtsConfig::default(), "dg-test-key").unwrap()),
    )
}

#[tokio::test]
async fn test_session_starts_once() {
    let session = test_session();
    let agent = AgentDefinition::interviewer();
    let room: Arc<dyn Room> = Arc::new(QuietRoom);

    assert!(!session.is_started());
    session.start(&agent, Arc::clone(&room)).await.unwrap();
    assert!(session.is_started());

    let second = session.start(&agent, room).await;
    assert!(second.is_err());
}

#[tokio::test]
async fn test_generate_reply_requires_started_session() {
    let session = test_session();
    assert!(session.generate_reply("Say hello.").await.is_err());

    let agent = AgentDefinition::interviewer();
    session.start(&agent, Arc::new(QuietRoom)).await.unwrap();
    assert!(session.generate_reply("Say hello.").await.is_ok());
}

#[tokio::test]
async fn test_session_start_rejects_invalid_persona() {
    let session = test_session();
    let mut agent = AgentDefinition::new("You are a test persona.");
    agent.min_endpointing_delay = Some(Duration::from_secs(10));
    agent.max_endpointing_delay = Some(Duration::from_secs(5));

    let result = session.start(&agent, Arc::new(QuietRoom)).await;
    assert!(result.is_err());
    assert!(!session.is_started());
}
