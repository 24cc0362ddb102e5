//! Agent bus: job dispatch and room messaging over NATS

pub mod messages;
pub mod room;

pub use messages::{JobAssignment, ReplyDirective, SessionDescriptor};
pub use room::{JobContext, NatsJobContext, NatsRoom, Room};
