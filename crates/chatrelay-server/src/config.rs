use std::net::SocketAddr;

use thiserror::Error;

use chatrelay_bedrock::client::InferenceSettings;
use chatrelay_bedrock::invoke::DEFAULT_MAX_TOKENS;

pub const DEFAULT_REGION: &str = "eu-west-1";
pub const DEFAULT_MODEL_ID: &str = "anthropic.claude-3-haiku-20240307-v1:0";
pub const DEFAULT_BIND: &str = "0.0.0.0:8000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {var}={value:?}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Process configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub region: String,
    pub model_id: String,
    pub max_tokens: u32,
    /// `None` disables archival.
    pub chat_log_bucket: Option<String>,
    pub bind_addr: SocketAddr,
}

impl RelayConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build the config from an arbitrary variable lookup. Empty values count
    /// as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|v| !v.is_empty());

        let max_tokens = match get("BEDROCK_MAX_TOKENS") {
            Some(raw) => match raw.parse::<u32>() {
                Ok(0) => return Err(invalid("BEDROCK_MAX_TOKENS", raw, "must be positive")),
                Ok(n) => n,
                Err(e) => return Err(invalid("BEDROCK_MAX_TOKENS", raw, e)),
            },
            None => DEFAULT_MAX_TOKENS,
        };

        let bind = get("CHATRELAY_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind_addr = bind
            .parse::<SocketAddr>()
            .map_err(|e| invalid("CHATRELAY_BIND", bind.clone(), e))?;

        Ok(Self {
            region: get("AWS_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string()),
            model_id: get("BEDROCK_MODEL_ID").unwrap_or_else(|| DEFAULT_MODEL_ID.to_string()),
            max_tokens,
            chat_log_bucket: get("CHAT_LOG_BUCKET"),
            bind_addr,
        })
    }

    pub fn inference_settings(&self) -> InferenceSettings {
        InferenceSettings {
            model_id: self.model_id.clone(),
            max_tokens: self.max_tokens,
        }
    }
}

fn invalid(var: &'static str, value: String, reason: impl ToString) -> ConfigError {
    ConfigError::Invalid {
        var,
        value,
        reason: reason.to_string(),
    }
}
