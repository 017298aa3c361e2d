// Error handling tests

use visiongate::error::GatewayError;

#[test]
fn test_error_display_messages() {
    let errors = vec![
        GatewayError::Validation("imageUrl is missing or empty".to_string()),
        GatewayError::RemoteApi("Vision service returned HTTP 500".to_string()),
        GatewayError::Config("Azure subscription key is not set".to_string()),
        GatewayError::Internal("router build failed".to_string()),
    ];

    for error in errors {
        let display = format!("{}", error);
        assert!(!display.is_empty(), "Error should have display message");
    }
}

#[test]
fn test_validation_error_passes_reason_through() {
    let error = GatewayError::Validation("imageUrl is malformed: not a url".to_string());
    assert!(format!("{}", error).contains("malformed"));
}

#[test]
fn test_remote_api_error_passes_message_through() {
    // The collaborator's message has to survive unchanged so callers see
    // the same body the legacy facade produced.
    let error = GatewayError::RemoteApi("Image URL is badly formed.".to_string());
    assert_eq!(format!("{}", error), "Image URL is badly formed.");
}

#[test]
fn test_config_error() {
    let error = GatewayError::Config("Azure endpoint is not set".to_string());
    assert!(format!("{}", error).contains("Azure endpoint is not set"));
}
