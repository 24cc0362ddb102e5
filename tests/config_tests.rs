use interview_agent::Config;

#[test]
fn test_config_defaults_without_file() {
    // No config file present; defaults must fill every field
    let cfg = Config::load("config/does-not-exist").unwrap();

    assert_eq!(cfg.worker.nats_url, "nats://localhost:4222");
    assert_eq!(cfg.worker.agent_name, "mock-interviewer");
    assert_eq!(cfg.worker.job_subject, "agents.jobs.mock-interviewer");

    // Secrets default to empty and are rejected later by provider init
    assert!(cfg.deepgram.api_key.is_empty());
    assert!(cfg.groq.api_key.is_empty());
}
