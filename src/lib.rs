pub mod agent;
pub mod bootstrap;
pub mod bus;
pub mod config;
pub mod providers;
pub mod session;
pub mod worker;

pub use agent::{AgentDefinition, INTERVIEWER_INSTRUCTIONS};
pub use bootstrap::{run_job, GREETING_INSTRUCTIONS};
pub use bus::{
    JobAssignment, JobContext, NatsJobContext, NatsRoom, ReplyDirective, Room, SessionDescriptor,
};
pub use config::Config;
pub use providers::{
    CapabilityFactory, DeepgramStt, DeepgramTts, GroqLlm, HostedCapabilities, LanguageModel,
    LlmConfig, SileroVad, SpeechSynthesizer, SpeechToText, SttConfig, TtsConfig, VadConfig,
    VoiceDetector,
};
pub use session::{AgentSession, SessionOptions};
pub use worker::{Entrypoint, Worker, WorkerOptions};
