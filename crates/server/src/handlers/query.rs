//! # Query Handler
//!
//! The `/query` endpoint: runs the answer pipeline for a support question.

use super::{AppError, AppState, DebugParams};
use crate::types::{QueryRequest, QueryResponse};
use axum::{
    extract::{rejection::JsonRejection, Query, State},
    Json,
};
use serde_json::json;
use tracing::info;

/// The handler for `POST /query`.
///
/// Accepts `{"query": "..."}` and returns `{"response": "<html>"}`. With
/// `?debug=true` the response also carries the extracted keywords and the
/// articles the answer was built from.
pub async fn query_handler(
    State(app_state): State<AppState>,
    Query(debug_params): Query<DebugParams>,
    payload: Result<Json<QueryRequest>, JsonRejection>,
) -> Result<Json<QueryResponse>, AppError> {
    let Json(payload) = payload.map_err(|rejection| AppError::Input(rejection.body_text()))?;
    info!("Received query: {:?}", payload.query);

    let result = app_state.pipeline.answer(&payload.query).await?;

    let debug = if debug_params.debug.unwrap_or(false) {
        Some(json!({
            "keywords": result.keywords,
            "articles": result
                .articles
                .iter()
                .map(|a| json!({ "id": a.id, "title": a.title, "link": a.link }))
                .collect::<Vec<_>>(),
        }))
    } else {
        None
    };

    Ok(Json(QueryResponse {
        response: result.text,
        debug,
    }))
}
