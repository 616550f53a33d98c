use keyword_sniffer::server::{build_router, shutdown_signal, AppState, ServerConfig};
use keyword_sniffer::{Error, StopWordSet, DEFAULT_KEYWORD_EXTRACTOR_CONFIG};

use log::{error, info, warn};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() {
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize the logger; RUST_LOG still takes precedence when set
    env_logger::Builder::new()
        .filter_level(config.log_level)
        .parse_default_env()
        .init();

    if let Err(e) = run(config).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: ServerConfig) -> Result<(), Error> {
    if config.uses_default_api_key() {
        warn!("API_KEY is not set; using the default key");
    }

    let stop_words = StopWordSet::english();
    info!("Loaded {} stop words", stop_words.len());

    let state = Arc::new(AppState::new(
        stop_words,
        *DEFAULT_KEYWORD_EXTRACTOR_CONFIG,
        config.api_key,
    ));
    let app = build_router(state);

    let listener = TcpListener::bind(&config.bind_addr).await?;
    info!("keyword-sniffer-server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
