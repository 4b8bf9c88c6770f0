//! chatrelay-core
//!
//! Pure domain types, conversation id resolution, and S3 key conventions.
//! No AWS SDK dependency. This is the shared vocabulary of the relay.

pub mod conversation;
pub mod models;
pub mod s3_keys;
