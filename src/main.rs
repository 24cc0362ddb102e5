use anyhow::Result;
use clap::Parser;
use interview_agent::{bootstrap, Config, Entrypoint, HostedCapabilities, Worker, WorkerOptions};
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "interview-agent", about = "Voice mock-interview agent worker")]
struct Cli {
    /// Configuration file path, without extension
    #[arg(long, default_value = "config/interview-agent")]
    config: String,

    /// Override the NATS server URL
    #[arg(long)]
    nats_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let cfg = Config::load(&cli.config)?;
    let nats_url = cli.nats_url.unwrap_or_else(|| cfg.worker.nats_url.clone());

    info!("interview-agent v0.1.0");
    info!("Agent: {}", cfg.worker.agent_name);
    info!("Job subject: {}", cfg.worker.job_subject);

    let capabilities = Arc::new(HostedCapabilities::from_config(&cfg));

    let entrypoint: Entrypoint = Arc::new(move |ctx| {
        let capabilities = Arc::clone(&capabilities) as Arc<dyn interview_agent::CapabilityFactory>;
        Box::pin(bootstrap::run_job(ctx, capabilities))
    });

    let worker = Worker::new(
        nats_url,
        WorkerOptions {
            agent_name: cfg.worker.agent_name.clone(),
            job_subject: cfg.worker.job_subject.clone(),
            entrypoint,
        },
    );

    worker.run().await
}
