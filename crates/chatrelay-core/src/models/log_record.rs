use std::fmt;

use serde::{Deserialize, Serialize};

/// Who produced an archived message.
///
/// `System` covers everything the relay itself says: echo replies while
/// inference is disabled, and error diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
    System,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::System => "system",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single archived message.
///
/// Written once to S3 and never read back by the relay. The timestamp
/// serializes as an RFC 3339 UTC string with sub-second precision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogRecord {
    pub conversation_id: String,
    pub role: Role,
    pub content: String,
    pub timestamp: jiff::Timestamp,
}

impl LogRecord {
    /// Build a record stamped with the current wall-clock time.
    pub fn now(conversation_id: &str, role: Role, content: &str) -> Self {
        Self::at(conversation_id, role, content, jiff::Timestamp::now())
    }

    pub fn at(
        conversation_id: &str,
        role: Role,
        content: &str,
        timestamp: jiff::Timestamp,
    ) -> Self {
        Self {
            conversation_id: conversation_id.to_string(),
            role,
            content: content.to_string(),
            timestamp,
        }
    }

    /// The S3 key this record is stored under.
    pub fn key(&self) -> String {
        crate::s3_keys::conversation_message(&self.conversation_id, self.timestamp, self.role)
    }
}
