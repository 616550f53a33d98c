use crate::models::KeywordExtractor;
use crate::server::{ApiError, AppState};
use crate::types::RankedResult;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use log::debug;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: String,
}

/// Body of `POST /keywords`. A missing or non-string `text` is a decoding error.
#[derive(Debug, Deserialize)]
pub struct KeywordsRequest {
    pub text: String,
}

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "Up".to_string(),
    })
}

pub async fn keywords(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<KeywordsRequest>, JsonRejection>,
) -> Result<Json<RankedResult>, ApiError> {
    let Json(request) = payload?;

    debug!("Extracting keywords from {} bytes of text", request.text.len());

    let keyword_extractor = KeywordExtractor::new(&state.extractor_config, &state.stop_words);
    let ranked_result = keyword_extractor.process_text_doc(&request.text);

    debug!("Extracted {} candidates", ranked_result.len());

    Ok(Json(ranked_result))
}
