//! # API Endpoint Handlers
//!
//! This module implements the actual HTTP endpoint handlers.

use super::{
    AppState,
    types::{
        BatchRequest, BatchResponse, HealthResponse, ResolveRequest, ResolveResponse,
        ResolvedSession, StatusJson, TableResponse,
    },
};
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use penilaian_core::{StatusInput, StatusResolver, StatusSummary};

// =============================================================================
// HEALTH HANDLER
// =============================================================================

/// Health check endpoint.
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse::default())
}

// =============================================================================
// TABLE HANDLER
// =============================================================================

/// List all six status descriptors.
pub async fn statuses_handler(State(state): State<AppState>) -> impl IntoResponse {
    let statuses = state
        .resolver
        .table()
        .iter()
        .map(StatusJson::from)
        .collect();

    (StatusCode::OK, Json(TableResponse { statuses }))
}

// =============================================================================
// RESOLVE HANDLER
// =============================================================================

/// Resolve a single session record.
///
/// Any well-formed body resolves; unrecognized values come back with
/// `fallback: true` rather than an error.
pub async fn resolve_handler(
    State(state): State<AppState>,
    Json(request): Json<ResolveRequest>,
) -> impl IntoResponse {
    let resolved = resolve_session(&state.resolver, &request);
    (StatusCode::OK, Json(ResolveResponse::success(resolved)))
}

// =============================================================================
// BATCH HANDLER
// =============================================================================

/// Resolve many session records and tally them.
pub async fn batch_handler(
    State(state): State<AppState>,
    Json(request): Json<BatchRequest>,
) -> impl IntoResponse {
    if let Err(e) = request.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(BatchResponse::error(format!("Invalid batch: {}", e))),
        );
    }

    let (results, summary) = resolve_batch(&state.resolver, &request.sessions);

    tracing::debug!(
        total = summary.total,
        fallbacks = summary.fallbacks,
        "Resolved batch"
    );

    (StatusCode::OK, Json(BatchResponse::success(results, summary)))
}

/// Resolve one record and note whether the fallback row was used.
pub(crate) fn resolve_session(resolver: &StatusResolver, input: &StatusInput) -> ResolvedSession {
    let fallback = resolver.is_fallback(&input.session_status, input.review_status.as_ref());
    if fallback {
        tracing::debug!(
            session_status = %input.session_status,
            review_status = ?input.review_status.as_ref().map(|r| r.as_str()),
            "Unrecognized status, rendering as in_progress"
        );
    }

    ResolvedSession {
        status: StatusJson::from(resolver.resolve_input(input)),
        review_stage: input.echoed_stage().map(str::to_string),
        fallback,
    }
}

/// Resolve every record once, tallying as it goes.
pub(crate) fn resolve_batch(
    resolver: &StatusResolver,
    inputs: &[StatusInput],
) -> (Vec<ResolvedSession>, StatusSummary) {
    let mut summary = StatusSummary::empty();
    let results = inputs
        .iter()
        .map(|input| {
            let resolved = resolve_session(resolver, input);
            summary.record(resolved.status.combined_status, resolved.fallback);
            resolved
        })
        .collect();
    (results, summary)
}
