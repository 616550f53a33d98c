use crate::server::{ApiError, AppState};

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use log::debug;
use std::sync::Arc;

pub const API_KEY_HEADER: &str = "X-API-Key";

/// Rejects requests whose `X-API-Key` header is absent or does not match the configured key.
///
/// Runs before the body is read, so rejected requests never reach the extractor.
pub async fn api_key_auth(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let provided = request
        .headers()
        .get(API_KEY_HEADER)
        .map(|value| value.as_bytes())
        .filter(|value| !value.is_empty())
        .ok_or(ApiError::MissingKey)?;

    // Header values are raw bytes; a UTF-8 key sent verbatim still matches.
    if provided != state.api_key.as_bytes() {
        debug!("Rejected request to {} with invalid API key", request.uri().path());
        return Err(ApiError::InvalidKey);
    }

    Ok(next.run(request).await)
}
