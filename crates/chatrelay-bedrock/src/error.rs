use std::error::Error as StdError;
use std::fmt::Debug;

use aws_credential_types::provider::error::CredentialsError;
use aws_sdk_bedrockruntime::error::{DisplayErrorContext, SdkError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BedrockError {
    #[error("AWS credentials not found: {0}")]
    MissingCredentials(String),

    #[error("model invocation failed: {0}")]
    Invocation(String),

    #[error("response parsing failed: {0}")]
    ResponseParse(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl BedrockError {
    /// Classify an SDK failure.
    ///
    /// Credential problems are recognised first, anywhere in the source
    /// chain, since the SDK reports them through the same variants as
    /// transport failures. Service, dispatch, timeout and response errors
    /// are then provider errors. Anything else is unexpected.
    pub fn from_sdk<E, R>(err: SdkError<E, R>) -> Self
    where
        E: StdError + Send + Sync + 'static,
        R: Debug + Send + Sync + 'static,
    {
        let detail = DisplayErrorContext(&err).to_string();

        if caused_by_credentials(&err) {
            return BedrockError::MissingCredentials(detail);
        }

        match err {
            SdkError::ServiceError(_)
            | SdkError::DispatchFailure(_)
            | SdkError::TimeoutError(_)
            | SdkError::ResponseError(_) => BedrockError::Invocation(detail),
            _ => BedrockError::Unexpected(detail),
        }
    }
}

fn caused_by_credentials(err: &(dyn StdError + 'static)) -> bool {
    let mut current = Some(err);
    while let Some(e) = current {
        if e.downcast_ref::<CredentialsError>().is_some() {
            return true;
        }
        current = e.source();
    }
    false
}
