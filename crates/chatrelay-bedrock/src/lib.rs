//! chatrelay-bedrock
//!
//! Single-turn Bedrock model invocation (Anthropic messages format) and
//! response assembly.

pub mod client;
pub mod error;
pub mod invoke;
pub mod response;
pub mod tokens;
