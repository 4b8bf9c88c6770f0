//! `POST /chat`: the relay's one real operation.
//!
//! Each request runs the same linear sequence exactly once: resolve the
//! conversation id, archive the user message, call the model, archive
//! whatever came back, reply. Archival never fails the request, and neither
//! does inference: every error is turned into a textual reply, archived with
//! role `system`, and returned with HTTP 200.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use tracing::error;

use chatrelay_bedrock::client::Generation;
use chatrelay_bedrock::error::BedrockError;
use chatrelay_core::conversation::resolve_conversation_id;
use chatrelay_core::models::chat::{ChatRequest, ChatResponse};
use chatrelay_core::models::log_record::Role;

use crate::error::ApiError;
use crate::state::AppState;

pub const MISSING_CREDENTIALS_REPLY: &str = "(ERROR) AWS credentials not found. \
Run 'aws configure' or set AWS_ACCESS_KEY_ID / AWS_SECRET_ACCESS_KEY.";

pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(req) = payload?;
    Ok(Json(run_chat(&state, req).await))
}

pub async fn run_chat(state: &AppState, req: ChatRequest) -> ChatResponse {
    let conversation_id = resolve_conversation_id(req.conversation_id.as_deref());

    state
        .archive
        .record(&conversation_id, Role::User, &req.message)
        .await;

    let inference = state.inference.clone();
    let prompt = req.message;
    let outcome = contain_panics(async move { inference.generate(&prompt).await }).await;
    let (role, reply) = settle(&conversation_id, outcome);

    state.archive.record(&conversation_id, role, &reply).await;

    ChatResponse {
        reply,
        conversation_id,
    }
}

/// Run the model call on its own task so a panic inside the SDK or response
/// handling becomes an error value instead of an aborted connection.
pub async fn contain_panics<F>(call: F) -> Result<Generation, BedrockError>
where
    F: Future<Output = Result<Generation, BedrockError>> + Send + 'static,
{
    tokio::spawn(call)
        .await
        .unwrap_or_else(|join_err| Err(BedrockError::Unexpected(join_err.to_string())))
}

/// The role to archive the reply under, and the reply itself.
///
/// Only model output is `assistant`; echo replies and error diagnostics are
/// the relay speaking, so they are `system`.
pub fn settle(conversation_id: &str, outcome: Result<Generation, BedrockError>) -> (Role, String) {
    match outcome {
        Ok(Generation::Model(text)) => (Role::Assistant, text),
        Ok(Generation::Echo(text)) => (Role::System, text),
        Err(e) => (Role::System, error_reply(conversation_id, &e)),
    }
}

/// Map an inference failure to the reply shown to the user.
///
/// Credential and provider errors are matched first; everything else falls
/// through to the generic reply. Details beyond the reply text only go to
/// local logs.
pub fn error_reply(conversation_id: &str, err: &BedrockError) -> String {
    match err {
        BedrockError::MissingCredentials(detail) => {
            error!(conversation_id, %detail, "bedrock credentials missing");
            MISSING_CREDENTIALS_REPLY.to_string()
        }
        BedrockError::Invocation(detail) => {
            error!(conversation_id, %detail, "bedrock invocation failed");
            format!("(ERROR) Bedrock error: {detail}")
        }
        other => {
            error!(conversation_id, error = ?other, "unexpected error in /chat");
            format!("(ERROR) Unknown error: {other}")
        }
    }
}
