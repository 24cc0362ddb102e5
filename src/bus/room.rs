use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

use super::messages::{ReplyDirective, SessionDescriptor};

/// Handle to a communication room an agent can be bound to
#[async_trait::async_trait]
pub trait Room: Send + Sync {
    /// Room name (string identifier)
    fn name(&self) -> &str;

    /// Announce an agent session in this room
    async fn begin_session(&self, descriptor: &SessionDescriptor) -> Result<()>;

    /// Request one scripted reply from the active session
    async fn request_reply(&self, directive: &ReplyDirective) -> Result<()>;
}

/// Per-job context the worker hands to the entrypoint: a room handle and a
/// connect operation
#[async_trait::async_trait]
pub trait JobContext: Send + Sync {
    fn job_id(&self) -> &str;

    fn room(&self) -> Arc<dyn Room>;

    /// Establish the link to the room; nothing else may run until this
    /// succeeds
    async fn connect(&self) -> Result<()>;
}

/// Room handle backed by per-room NATS subjects
pub struct NatsRoom {
    client: async_nats::Client,
    name: String,
}

impl NatsRoom {
    pub fn new(client: async_nats::Client, name: String) -> Self {
        Self { client, name }
    }
}

#[async_trait::async_trait]
impl Room for NatsRoom {
    fn name(&self) -> &str {
        &self.name
    }

    async fn begin_session(&self, descriptor: &SessionDescriptor) -> Result<()> {
        let subject = format!("rooms.{}.session.start", self.name);
        let payload = serde_json::to_vec(descriptor)?;

        self.client
            .publish(subject.clone(), payload.into())
            .await
            .context("Failed to publish session start")?;

        info!("Published session start to {}", subject);

        Ok(())
    }

    async fn request_reply(&self, directive: &ReplyDirective) -> Result<()> {
        let subject = format!("rooms.{}.session.reply", self.name);
        let payload = serde_json::to_vec(directive)?;

        self.client
            .publish(subject.clone(), payload.into())
            .await
            .context("Failed to publish reply directive")?;

        info!("Published reply directive to {}", subject);

        Ok(())
    }
}

/// Job context backed by NATS: connecting subscribes to the room's control
/// subject and flushes the link
pub struct NatsJobContext {
    job_id: String,
    client: async_nats::Client,
    room: Arc<NatsRoom>,

    /// Held for the lifetime of the job so the room subscription stays alive
    control_sub: Mutex<Option<async_nats::Subscriber>>,
}

impl NatsJobContext {
    pub fn new(client: async_nats::Client, job_id: String, room_name: String) -> Self {
        let room = Arc::new(NatsRoom::new(client.clone(), room_name));
        Self {
            job_id,
            client,
            room,
            control_sub: Mutex::new(None),
        }
    }
}

#[async_trait::async_trait]
impl JobContext for NatsJobContext {
    fn job_id(&self) -> &str {
        &self.job_id
    }

    fn room(&self) -> Arc<dyn Room> {
        self.room.clone()
    }

    async fn connect(&self) -> Result<()> {
        let subject = format!("rooms.{}.control", self.room.name());

        let subscriber = self
            .client
            .subscribe(subject.clone())
            .await
            .context("Failed to subscribe to room control subject")?;

        {
            let mut sub = self.control_sub.lock().await;
            *sub = Some(subscriber);
        }

        self.client
            .flush()
            .await
            .context("Failed to flush room connection")?;

        info!("Joined room {} (control subject {})", self.room.name(), subject);

        Ok(())
    }
}
