//! Best-effort conversation archive.
//!
//! Every chat message is written as its own JSON object under
//! `conversations/<conversation_id>/`. Objects are never read back. Archival
//! is fire-and-forget: [`ChatArchive::record`] logs and swallows every
//! failure so the chat response path can't be affected by S3.

use aws_sdk_s3::Client;
use tracing::{error, info, warn};

use chatrelay_core::models::log_record::{LogRecord, Role};
use chatrelay_core::s3_keys;

use crate::error::StorageError;
use crate::objects;

const S3_TEST_BODY: &str = "S3 test works!";

/// Archive destination, resolved once at startup.
#[derive(Debug, Clone)]
pub enum ChatArchive {
    /// No bucket configured. Writes are skipped with a warning.
    Disabled,
    Enabled { client: Client, bucket: String },
}

impl ChatArchive {
    /// An unset or empty bucket name disables archival.
    pub fn new(client: Client, bucket: Option<String>) -> Self {
        match bucket {
            Some(bucket) if !bucket.is_empty() => ChatArchive::Enabled { client, bucket },
            _ => ChatArchive::Disabled,
        }
    }

    pub fn bucket(&self) -> Option<&str> {
        match self {
            ChatArchive::Disabled => None,
            ChatArchive::Enabled { bucket, .. } => Some(bucket),
        }
    }

    /// Archive one message. Never fails; outcomes are only logged.
    pub async fn record(&self, conversation_id: &str, role: Role, content: &str) {
        let record = LogRecord::now(conversation_id, role, content);
        match self.try_record(&record).await {
            Ok(key) => info!(
                conversation_id,
                role = %role,
                key = %key,
                "message archived"
            ),
            Err(StorageError::NotConfigured) => warn!(
                conversation_id,
                role = %role,
                "CHAT_LOG_BUCKET not set, message not archived"
            ),
            Err(e) => error!(
                conversation_id,
                role = %role,
                error = %e,
                "failed to archive message"
            ),
        }
    }

    /// Write a prepared record. Returns the object key.
    pub async fn try_record(&self, record: &LogRecord) -> Result<String, StorageError> {
        let ChatArchive::Enabled { client, bucket } = self else {
            return Err(StorageError::NotConfigured);
        };

        let key = record.key();
        objects::put_json(client, bucket, &key, record).await?;
        Ok(key)
    }

    /// Write the fixed test object used by `/s3-test`. Returns its key.
    pub async fn write_test_object(&self) -> Result<&'static str, StorageError> {
        let ChatArchive::Enabled { client, bucket } = self else {
            return Err(StorageError::NotConfigured);
        };

        objects::put_object(
            client,
            bucket,
            s3_keys::S3_TEST_OBJECT,
            S3_TEST_BODY.as_bytes().to_vec(),
            Some("text/plain"),
        )
        .await?;

        Ok(s3_keys::S3_TEST_OBJECT)
    }
}
