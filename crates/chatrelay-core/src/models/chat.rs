use serde::{Deserialize, Serialize};

/// Body of `POST /chat`.
///
/// `message` is required but its content is never validated; an empty string
/// is relayed like any other prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    /// Omitted, `null`, or empty means "start a new conversation".
    #[serde(default)]
    pub conversation_id: Option<String>,
}

/// Reply to `POST /chat`. Always carries the conversation id the messages
/// were archived under, including on inference failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
    pub conversation_id: String,
}
