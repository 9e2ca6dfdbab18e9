use super::*;

#[test]
fn configuration_error_maps_to_service_unavailable() {
    let api = chat_error_to_api(ChatError::Configuration);
    assert_eq!(api.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(api.body.code, "E_LLM_NOT_CONFIGURED");
    assert!(!api.body.retryable);
}

#[test]
fn upstream_and_empty_map_to_bad_gateway() {
    for err in [ChatError::Upstream, ChatError::EmptyResponse] {
        let api = chat_error_to_api(err);
        assert_eq!(api.status, StatusCode::BAD_GATEWAY);
        assert!(api.body.retryable);
    }
}

#[test]
fn every_chat_error_shows_the_same_message() {
    for err in [ChatError::Configuration, ChatError::EmptyResponse, ChatError::Upstream] {
        assert_eq!(chat_error_to_api(err).body.message, "Failed to generate response. Please try again.");
    }
}

#[test]
fn request_context_and_persona_are_optional() {
    let req: ChatRequest = serde_json::from_str(r#"{"prompt":"What is 2+2?"}"#).unwrap();
    assert_eq!(req.prompt, "What is 2+2?");
    assert!(req.context.is_none());
    assert!(req.persona.is_none());
}
