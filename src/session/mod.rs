//! Agent session management
//!
//! This module provides the `AgentSession` abstraction that manages:
//! - Session-level turn-taking and interruption tuning
//! - The four capability providers the session runs with
//! - Binding a persona to a room and announcing the session
//! - Reply directives for scripted utterances

mod options;
mod session;

pub use options::SessionOptions;
pub use session::AgentSession;
