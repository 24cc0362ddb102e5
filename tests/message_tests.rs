use interview_agent::{JobAssignment, ReplyDirective};

#[test]
fn test_job_assignment_deserialization() {
    let json = r#"{
        "job_id": "job-42",
        "room": "interview-room-7",
        "timestamp": "2026-08-20T10:15:00Z"
    }"#;

    let msg: JobAssignment = serde_json::from_str(json).unwrap();
    assert_eq!(msg.job_id.as_deref(), Some("job-42"));
    assert_eq!(msg.room, "interview-room-7");
    assert_eq!(msg.timestamp, "2026-08-20T10:15:00Z");
}

#[test]
fn test_job_assignment_without_job_id() {
    let json = r#"{
        "job_id": null,
        "room": "interview-room-7",
        "timestamp": "2026-08-20T10:15:00Z"
    }"#;

    let msg: JobAssignment = serde_json::from_str(json).unwrap();
    assert!(msg.job_id.is_none());
    assert_eq!(msg.room, "interview-room-7");
}

#[test]
fn test_job_assignment_serialization() {
    let msg = JobAssignment {
        job_id: Some("job-42".to_string()),
        room: "interview-room-7".to_string(),
        timestamp: "2026-08-20T10:15:00Z".to_string(),
    };

    let json = serde_json::to_string(&msg).unwrap();
    assert!(json.contains("job-42"));
    assert!(json.contains("interview-room-7"));
}

#[test]
fn test_reply_directive_carries_instructions() {
    let directive = ReplyDirective::new("Say hello and stop.");
    assert_eq!(directive.instructions, "Say hello and stop.");
    assert!(!directive.timestamp.is_empty());

    let json = serde_json::to_string(&directive).unwrap();
    assert!(json.contains("Say hello and stop."));

    let deserialized: ReplyDirective = serde_json::from_str(&json).unwrap();
    assert_eq!(deserialized.instructions, directive.instructions);
}
