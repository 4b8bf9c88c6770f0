use chatrelay_bedrock::client::InferenceClient;
use chatrelay_storage::archive::ChatArchive;

/// Shared application state, injected into all route handlers via Axum state.
///
/// Both handles are built once at startup and only read afterwards. The SDK
/// clients inside are reference-counted, so cloning per request is cheap.
#[derive(Clone)]
pub struct AppState {
    pub inference: InferenceClient,
    pub archive: ChatArchive,
}
