use transcript_service::domain::{FailureKind, ResultEnvelope};

#[test]
fn given_success_when_inspecting_then_is_valid_with_data() {
    let envelope = ResultEnvelope::success(7);

    assert!(envelope.is_valid());
    assert_eq!(envelope.data(), Some(&7));
    assert!(envelope.errors().is_empty());
    assert_eq!(envelope.failure_kind(), None);
}

#[test]
fn given_failure_without_messages_when_created_then_carries_generic_message() {
    let envelope: ResultEnvelope<u32> =
        ResultEnvelope::failure(FailureKind::EngineExecutionFailed, Vec::new());

    assert!(!envelope.is_valid());
    assert_eq!(envelope.errors(), ["Transcription failed"]);
    assert_eq!(envelope.into_data(), None);
}

#[test]
fn given_several_errors_when_joining_then_preserves_order() {
    let envelope: ResultEnvelope<u32> = ResultEnvelope::failure(
        FailureKind::ValidationFailed,
        vec!["first".to_string(), "second".to_string()],
    );

    assert_eq!(envelope.joined(", "), "first, second");
    assert_eq!(envelope.failure_kind(), Some(FailureKind::ValidationFailed));
}

#[test]
fn given_envelope_when_serialized_then_exposes_is_valid_flag() {
    let envelope: ResultEnvelope<u32> =
        ResultEnvelope::failure(FailureKind::UnknownEngine, vec!["Unknown engine: x".to_string()]);

    let json = serde_json::to_value(&envelope).unwrap();

    assert_eq!(
        json,
        serde_json::json!({ "data": null, "errors": ["Unknown engine: x"], "isValid": false })
    );
}
