//! S3 key/path conventions.
//!
//! Pure string functions, no AWS SDK dependency. These define the canonical
//! layout of objects in the chat log bucket.

use crate::models::log_record::Role;

pub const CONVERSATIONS_PREFIX: &str = "conversations/";

/// Object written by `/s3-test`.
pub const S3_TEST_OBJECT: &str = "test-folder/s3-test.txt";

pub fn conversation_prefix(conversation_id: &str) -> String {
    format!("{CONVERSATIONS_PREFIX}{conversation_id}/")
}

/// `conversations/<conversation_id>/<timestamp>-<role>.json`
///
/// The timestamp is rendered in RFC 3339 form, so keys within one
/// conversation sort chronologically.
pub fn conversation_message(conversation_id: &str, timestamp: jiff::Timestamp, role: Role) -> String {
    format!(
        "{}{timestamp}-{role}.json",
        conversation_prefix(conversation_id)
    )
}
