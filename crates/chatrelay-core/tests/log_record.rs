use chatrelay_core::models::chat::{ChatRequest, ChatResponse};
use chatrelay_core::models::cost::ModelPricing;
use chatrelay_core::models::log_record::{LogRecord, Role};
use chatrelay_core::models::token_count::TokenCount;
use chatrelay_core::s3_keys;

fn fixed_timestamp() -> jiff::Timestamp {
    "2024-05-01T12:30:45.123456Z".parse().unwrap()
}

#[test]
fn key_layout_groups_by_conversation() {
    let record = LogRecord::at("conv-1", Role::Assistant, "hello", fixed_timestamp());
    assert_eq!(
        record.key(),
        "conversations/conv-1/2024-05-01T12:30:45.123456Z-assistant.json"
    );
    assert!(record.key().starts_with(&s3_keys::conversation_prefix("conv-1")));
}

#[test]
fn record_serializes_with_four_fields() {
    let record = LogRecord::at("conv-1", Role::User, "hi there", fixed_timestamp());
    let value = serde_json::to_value(&record).unwrap();

    assert_eq!(value["conversation_id"], "conv-1");
    assert_eq!(value["role"], "user");
    assert_eq!(value["content"], "hi there");
    assert_eq!(value["timestamp"], "2024-05-01T12:30:45.123456Z");
    assert_eq!(value.as_object().unwrap().len(), 4);
}

#[test]
fn system_role_renders_lowercase() {
    assert_eq!(Role::System.to_string(), "system");
    assert_eq!(serde_json::to_value(Role::System).unwrap(), "system");
}

#[test]
fn now_stamps_current_time() {
    let before = jiff::Timestamp::now();
    let record = LogRecord::now("c", Role::User, "x");
    assert!(record.timestamp >= before);
}

#[test]
fn chat_request_conversation_id_is_optional() {
    let req: ChatRequest = serde_json::from_str(r#"{"message":"hi"}"#).unwrap();
    assert_eq!(req.message, "hi");
    assert!(req.conversation_id.is_none());

    let req: ChatRequest =
        serde_json::from_str(r#"{"message":"hi","conversation_id":null}"#).unwrap();
    assert!(req.conversation_id.is_none());
}

#[test]
fn chat_request_requires_message() {
    assert!(serde_json::from_str::<ChatRequest>(r#"{"conversation_id":"x"}"#).is_err());
}

#[test]
fn chat_response_has_two_fields() {
    let resp = ChatResponse {
        reply: "AB".to_string(),
        conversation_id: "c".to_string(),
    };
    let value = serde_json::to_value(&resp).unwrap();
    assert_eq!(value, serde_json::json!({"reply": "AB", "conversation_id": "c"}));
}

#[test]
fn pricing_scales_per_million() {
    let pricing = ModelPricing {
        input_per_million: 0.25,
        output_per_million: 1.25,
    };
    let tokens = TokenCount {
        input: 2_000_000,
        output: 1_000_000,
    };
    assert_eq!(tokens.total(), 3_000_000);
    assert!((pricing.estimate_cost(tokens) - 1.75).abs() < 1e-9);
}
