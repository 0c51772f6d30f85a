//! HTTP 处理器

use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
};

use crate::store::LogEntry;

use super::error::ApiError;
use super::router::AppState;
use super::types::{
    GenerateRequest, HealthResponse, HistoryQuery, KeywordsResponse, TextRequest, TextResponse,
};

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}

/// POST /generate
pub async fn generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<TextResponse>, ApiError> {
    let Json(req) = payload?;
    state.service.generate(req).await.map(Json)
}

/// POST /title
pub async fn title(
    State(state): State<AppState>,
    payload: Result<Json<TextRequest>, JsonRejection>,
) -> Result<Json<TextResponse>, ApiError> {
    let Json(req) = payload?;
    state.service.title(req).await.map(Json)
}

/// POST /summarize
pub async fn summarize(
    State(state): State<AppState>,
    payload: Result<Json<TextRequest>, JsonRejection>,
) -> Result<Json<TextResponse>, ApiError> {
    let Json(req) = payload?;
    state.service.summarize(req).await.map(Json)
}

/// POST /keywords
pub async fn keywords(
    State(state): State<AppState>,
    payload: Result<Json<TextRequest>, JsonRejection>,
) -> Result<Json<KeywordsResponse>, ApiError> {
    let Json(req) = payload?;
    state.service.keywords(req).await.map(Json)
}

/// GET /history?limit=N
pub async fn history(
    State(state): State<AppState>,
    query: Result<Query<HistoryQuery>, QueryRejection>,
) -> Result<Json<Vec<LogEntry>>, ApiError> {
    let Query(query) = query?;
    state.service.history(query.effective_limit()).await.map(Json)
}
