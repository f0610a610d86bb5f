use dealsense_bedrock::client::BedrockSettings;
use dealsense_bedrock::error::BedrockError;
use dealsense_core::error::GenerationError;

#[test]
fn empty_settings_object_uses_defaults() {
    let settings: BedrockSettings = serde_json::from_str("{}").unwrap();
    assert_eq!(settings, BedrockSettings::default());
    assert_eq!(settings.region, "us-east-1");
    assert!(settings.model_id.starts_with("us.anthropic.claude"));
    assert!(settings.profile_name.is_none());
}

#[test]
fn explicit_settings_are_kept() {
    let settings: BedrockSettings = serde_json::from_str(
        r#"{"region": "eu-west-1", "model_id": "eu.anthropic.claude-haiku", "profile_name": "sales"}"#,
    )
    .unwrap();
    assert_eq!(settings.region, "eu-west-1");
    assert_eq!(settings.model_id, "eu.anthropic.claude-haiku");
    assert_eq!(settings.profile_name.as_deref(), Some("sales"));
}

#[test]
fn profile_is_omitted_when_serializing_defaults() {
    let json = serde_json::to_string(&BedrockSettings::default()).unwrap();
    assert!(!json.contains("profile_name"));
}

#[test]
fn bedrock_errors_map_onto_generation_errors() {
    let err: GenerationError = BedrockError::Invocation("throttled".to_string()).into();
    assert!(matches!(err, GenerationError::Invocation(ref m) if m == "throttled"));
    assert_eq!(err.to_string(), "model invocation failed: throttled");

    let err: GenerationError = BedrockError::ResponseParse("no message".to_string()).into();
    assert!(matches!(err, GenerationError::ResponseParse(ref m) if m == "no message"));
}
