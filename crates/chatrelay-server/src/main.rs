use std::env;

use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use chatrelay_bedrock::client::InferenceClient;
use chatrelay_server::aws;
use chatrelay_server::config::RelayConfig;
use chatrelay_server::router::build_router;
use chatrelay_server::state::AppState;
use chatrelay_storage::archive::ChatArchive;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // A missing .env is fine; the environment may already be complete.
    dotenvy::dotenv().ok();

    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let config = RelayConfig::from_env()?;
    info!(
        region = %config.region,
        model_id = %config.model_id,
        max_tokens = config.max_tokens,
        "starting chatrelay"
    );

    let sdk_config = aws::load_sdk_config(&config.region).await;

    let inference = InferenceClient::connect(&sdk_config, config.inference_settings()).await;
    if !inference.is_ready() {
        warn!("inference unavailable, /chat will echo messages until restart");
    }

    let s3 = chatrelay_storage::client::build_client(&sdk_config);
    let archive = ChatArchive::new(s3, config.chat_log_bucket.clone());
    match archive.bucket() {
        Some(bucket) => info!(bucket, "archiving conversations"),
        None => warn!("CHAT_LOG_BUCKET not set, conversations will not be archived"),
    }

    let app = build_router(AppState { inference, archive });

    if env::var_os("AWS_LAMBDA_RUNTIME_API").is_some() {
        info!("running under the Lambda runtime");
        return lambda_http::run(app).await.map_err(|e| eyre::eyre!(e));
    }

    let listener = TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
