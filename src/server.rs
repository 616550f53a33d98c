//! HTTP boundary for the extractor.
//!
//! Routes:
//!   GET  /health    : liveness, no credential required
//!   POST /keywords  : `{"text": "..."}` in, ranked `[{"candidate", "score"}]` out;
//!                     requires the `X-API-Key` header

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod request_logger;
pub mod router;

pub use config::ServerConfig;
pub use error::ApiError;
pub use router::build_router;

use crate::models::{KeywordExtractorConfig, StopWordSet};

/// Immutable per-process state shared by all requests.
#[derive(Debug)]
pub struct AppState {
    pub stop_words: StopWordSet,
    pub extractor_config: KeywordExtractorConfig,
    pub api_key: String,
}

impl AppState {
    pub fn new(
        stop_words: StopWordSet,
        extractor_config: KeywordExtractorConfig,
        api_key: impl Into<String>,
    ) -> Self {
        AppState {
            stop_words,
            extractor_config,
            api_key: api_key.into(),
        }
    }
}

/// Resolves on Ctrl-C, or on SIGTERM where available.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            log::error!("Failed to listen for Ctrl-C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                log::error!("Failed to listen for SIGTERM: {}", err);
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

    log::info!("Shutdown signal received");
}
