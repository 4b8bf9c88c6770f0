//! The inference client and its degraded mode.
//!
//! Whether inference works is decided once, at startup. If the SDK config has
//! no region, or its credentials can't be resolved, the client is
//! [`InferenceClient::Unavailable`] for the rest of the process lifetime and
//! every call echoes the prompt back instead of reaching Bedrock.

use aws_credential_types::provider::ProvideCredentials;
use aws_sdk_bedrockruntime::Client;
use aws_smithy_types::error::display::DisplayErrorContext;
use tracing::{info, warn};

use chatrelay_core::models::token_count::TokenCount;

use crate::error::BedrockError;
use crate::invoke::{self, InvokeBody};
use crate::response::{self, ModelResponse};
use crate::tokens;

/// Model selection and generation budget.
#[derive(Debug, Clone)]
pub struct InferenceSettings {
    pub model_id: String,
    pub max_tokens: u32,
}

/// Explicit readiness state of the inference client.
#[derive(Debug, Clone)]
pub enum InferenceClient {
    Unavailable { reason: String },
    Ready(ReadyClient),
}

/// A Bedrock runtime client bound to one model.
#[derive(Debug, Clone)]
pub struct ReadyClient {
    client: Client,
    settings: InferenceSettings,
}

/// Outcome of [`InferenceClient::generate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generation {
    /// Text produced by the model (or the no-text diagnostic).
    Model(String),
    /// Degraded mode: the prompt echoed back behind a `(DEBUG)` marker.
    Echo(String),
}

impl InferenceClient {
    /// Build the client from a loaded SDK config, checking credentials once.
    pub async fn connect(config: &aws_config::SdkConfig, settings: InferenceSettings) -> Self {
        match check_credentials(config).await {
            Ok(()) => {
                info!(model_id = %settings.model_id, "bedrock client ready");
                InferenceClient::ready(Client::new(config), settings)
            }
            Err(reason) => {
                warn!(%reason, "bedrock client unavailable, chat will echo");
                InferenceClient::Unavailable { reason }
            }
        }
    }

    pub fn ready(client: Client, settings: InferenceSettings) -> Self {
        InferenceClient::Ready(ReadyClient { client, settings })
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        InferenceClient::Unavailable {
            reason: reason.into(),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, InferenceClient::Ready(_))
    }

    pub async fn generate(&self, prompt: &str) -> Result<Generation, BedrockError> {
        match self {
            InferenceClient::Unavailable { reason } => Ok(Generation::Echo(format!(
                "(DEBUG) Bedrock client unavailable ({reason}), echo: {prompt}"
            ))),
            InferenceClient::Ready(client) => client.generate(prompt).await.map(Generation::Model),
        }
    }
}

impl ReadyClient {
    pub fn model_id(&self) -> &str {
        &self.settings.model_id
    }

    /// One stateless single-turn call. Returns the concatenated text parts.
    pub async fn generate(&self, prompt: &str) -> Result<String, BedrockError> {
        let model_id = self.model_id();
        let body = InvokeBody::single_turn(prompt, self.settings.max_tokens);
        let raw = invoke::invoke_model(&self.client, model_id, &body).await?;

        let parsed = ModelResponse::from_value(&raw);
        if let Some(usage) = parsed.usage {
            let count = TokenCount::from(usage);
            info!(
                model_id,
                input_tokens = count.input,
                output_tokens = count.output,
                total_tokens = count.total(),
                estimated_cost_usd = tokens::estimate_cost(model_id, count),
                stop_reason = parsed.stop_reason.as_deref(),
                "bedrock usage"
            );
        }

        Ok(response::assemble_reply(&raw))
    }
}

async fn check_credentials(config: &aws_config::SdkConfig) -> Result<(), String> {
    if config.region().is_none() {
        return Err("no AWS region configured".to_string());
    }

    let provider = config
        .credentials_provider()
        .ok_or_else(|| "no credentials provider configured".to_string())?;

    provider
        .provide_credentials()
        .await
        .map(|_| ())
        .map_err(|e| format!("credentials could not be resolved: {}", DisplayErrorContext(&e)))
}
