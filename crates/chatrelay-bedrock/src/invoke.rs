//! Raw `InvokeModel` call with an Anthropic messages body.
//!
//! Every call is a single user turn: no system prompt and no history, so the
//! model sees each chat message in isolation.

use aws_sdk_bedrockruntime::Client;
use aws_smithy_types::Blob;
use serde::Serialize;
use tracing::debug;

use crate::error::BedrockError;

/// Messages API version understood by Anthropic models on Bedrock.
pub const ANTHROPIC_VERSION: &str = "bedrock-2023-05-31";

pub const DEFAULT_MAX_TOKENS: u32 = 256;

#[derive(Debug, Serialize)]
pub struct InvokeBody<'a> {
    pub anthropic_version: &'static str,
    pub max_tokens: u32,
    pub messages: Vec<InvokeMessage<'a>>,
}

#[derive(Debug, Serialize)]
pub struct InvokeMessage<'a> {
    pub role: &'static str,
    pub content: Vec<InvokeContent<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InvokeContent<'a> {
    Text { text: &'a str },
}

impl<'a> InvokeBody<'a> {
    /// A one-message conversation holding only `prompt`.
    pub fn single_turn(prompt: &'a str, max_tokens: u32) -> Self {
        Self {
            anthropic_version: ANTHROPIC_VERSION,
            max_tokens,
            messages: vec![InvokeMessage {
                role: "user",
                content: vec![InvokeContent::Text { text: prompt }],
            }],
        }
    }
}

/// Send `body` to `model_id` and return the decoded JSON response.
pub async fn invoke_model(
    client: &Client,
    model_id: &str,
    body: &InvokeBody<'_>,
) -> Result<serde_json::Value, BedrockError> {
    let payload = serde_json::to_vec(body)?;

    let response = client
        .invoke_model()
        .model_id(model_id)
        .content_type("application/json")
        .accept("application/json")
        .body(Blob::new(payload))
        .send()
        .await
        .map_err(BedrockError::from_sdk)?;

    let raw: serde_json::Value = serde_json::from_slice(response.body().as_ref())
        .map_err(|e| BedrockError::ResponseParse(e.to_string()))?;

    debug!(model_id, response = %raw, "bedrock response");

    Ok(raw)
}
