//! chatrelay-storage
//!
//! S3 operations. Thin wrapper around the AWS S3 SDK, plus the best-effort
//! conversation archive built on top of it.

pub mod archive;
pub mod client;
pub mod error;
pub mod objects;
