//! Assembly of the reply text from an Anthropic messages response.

use serde::Deserialize;
use serde_json::Value;

use chatrelay_core::models::token_count::TokenCount;

/// The parts of a model response the relay cares about.
///
/// `content` stays as raw JSON so that one unexpected part can't make the
/// whole response unreadable.
#[derive(Debug, Default, Deserialize)]
pub struct ModelResponse {
    #[serde(default)]
    pub content: Vec<Value>,
    #[serde(default)]
    pub stop_reason: Option<String>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Text {
        #[serde(default)]
        text: String,
    },
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub input_tokens: u64,
    #[serde(default)]
    pub output_tokens: u64,
}

impl From<Usage> for TokenCount {
    fn from(usage: Usage) -> Self {
        TokenCount {
            input: usage.input_tokens,
            output: usage.output_tokens,
        }
    }
}

impl ModelResponse {
    /// Lenient parse: a response of the wrong shape is treated as empty.
    pub fn from_value(raw: &Value) -> Self {
        ModelResponse::deserialize(raw).unwrap_or_default()
    }

    /// Concatenate all text parts in order. Other part types are skipped.
    pub fn text(&self) -> String {
        self.content
            .iter()
            .filter_map(|part| match ContentPart::deserialize(part) {
                Ok(ContentPart::Text { text }) => Some(text),
                _ => None,
            })
            .collect()
    }
}

/// The reply for a raw model response.
///
/// Never empty: when no text parts are present the reply is a diagnostic
/// embedding the raw response.
pub fn assemble_reply(raw: &Value) -> String {
    let text = ModelResponse::from_value(raw).text();
    if text.is_empty() {
        format!("(DEBUG) No text found in response: {raw}")
    } else {
        text
    }
}
