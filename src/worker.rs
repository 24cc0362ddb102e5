use anyhow::{Context, Result};
use futures::stream::StreamExt;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::bus::{JobAssignment, JobContext, NatsJobContext};

/// Entrypoint function invoked once per incoming job
pub type Entrypoint = Arc<
    dyn Fn(Arc<dyn JobContext>) -> futures::future::BoxFuture<'static, Result<()>> + Send + Sync,
>;

/// Worker registration: agent identity, job subject, and the entrypoint to
/// run per job
pub struct WorkerOptions {
    /// Agent name, used for logging
    pub agent_name: String,

    /// NATS subject job assignments arrive on
    pub job_subject: String,

    /// Function invoked with each job context
    pub entrypoint: Entrypoint,
}

/// Long-lived worker process: subscribes to the job subject and dispatches
/// each assignment to the registered entrypoint
pub struct Worker {
    nats_url: String,
    options: WorkerOptions,
}

impl Worker {
    pub fn new(nats_url: String, options: WorkerOptions) -> Self {
        Self { nats_url, options }
    }

    /// Run until the job subscription closes.
    ///
    /// Each assignment is handled on its own task; a failed job is logged and
    /// does not take the worker down.
    pub async fn run(&self) -> Result<()> {
        info!("Connecting to NATS at {}", self.nats_url);

        let client = async_nats::connect(&self.nats_url)
            .await
            .context("Failed to connect to NATS")?;

        info!("Connected to NATS successfully");

        let mut jobs = client
            .subscribe(self.options.job_subject.clone())
            .await
            .context("Failed to subscribe to job subject")?;

        info!(
            "Worker {} waiting for jobs on {}",
            self.options.agent_name, self.options.job_subject
        );

        while let Some(msg) = jobs.next().await {
            let assignment: JobAssignment = match serde_json::from_slice(&msg.payload) {
                Ok(assignment) => assignment,
                Err(e) => {
                    warn!("Ignoring malformed job assignment: {}", e);
                    continue;
                }
            };

            let job_id = assignment
                .job_id
                .unwrap_or_else(|| format!("job-{}", uuid::Uuid::new_v4()));

            info!("Dispatching job {} for room {}", job_id, assignment.room);

            let ctx: Arc<dyn JobContext> = Arc::new(NatsJobContext::new(
                client.clone(),
                job_id.clone(),
                assignment.room,
            ));

            let entrypoint = Arc::clone(&self.options.entrypoint);

            tokio::spawn(async move {
                if let Err(e) = (entrypoint)(ctx).await {
                    error!("Job {} failed: {:#}", job_id, e);
                }
            });
        }

        info!("Job subscription closed, worker stopping");

        Ok(())
    }
}
