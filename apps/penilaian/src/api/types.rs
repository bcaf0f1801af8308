//! # API Request/Response Types
//!
//! This module defines the JSON structures for the HTTP API.
//!
//! Field names are camelCase to match the upstream session records the UI
//! already holds (`sessionStatus`, `reviewStatus`, `reviewStage`).

use penilaian_core::{
    AssessmentStatus, CombinedStatus, PenilaianError, StatusInput, StatusSummary,
    primitives::MAX_BATCH_SIZE,
};
use serde::{Deserialize, Serialize};

// =============================================================================
// HEALTH RESPONSE
// =============================================================================

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

// =============================================================================
// STATUS DESCRIPTOR
// =============================================================================

/// Owned JSON form of an [`AssessmentStatus`] descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusJson {
    pub combined_status: CombinedStatus,
    pub description: String,
    pub color: String,
    pub bg_color: String,
    pub text_color: String,
    pub icon: String,
    pub can_edit: bool,
    pub can_submit: bool,
    pub can_resubmit: bool,
    pub show_feedback: bool,
    pub show_progress: bool,
}

impl From<&AssessmentStatus> for StatusJson {
    fn from(status: &AssessmentStatus) -> Self {
        Self {
            combined_status: status.combined_status,
            description: status.description.to_string(),
            color: status.color.to_string(),
            bg_color: status.bg_color.to_string(),
            text_color: status.text_color.to_string(),
            icon: status.icon.to_string(),
            can_edit: status.can_edit,
            can_submit: status.can_submit,
            can_resubmit: status.can_resubmit,
            show_feedback: status.show_feedback,
            show_progress: status.show_progress,
        }
    }
}

/// The full static table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableResponse {
    pub statuses: Vec<StatusJson>,
}

// =============================================================================
// RESOLVE REQUEST/RESPONSE
// =============================================================================

/// Single resolve request: the upstream session record.
pub type ResolveRequest = StatusInput;

/// One resolved session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedSession {
    pub status: StatusJson,
    /// Echo of the request's review stage, truncated to `MAX_STATUS_LENGTH`.
    pub review_stage: Option<String>,
    /// True when the inputs matched no table row and `in_progress` was used.
    pub fallback: bool,
}

/// Single resolve response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveResponse {
    pub success: bool,
    pub status: Option<StatusJson>,
    pub review_stage: Option<String>,
    pub fallback: bool,
    pub error: Option<String>,
}

impl ResolveResponse {
    pub fn success(resolved: ResolvedSession) -> Self {
        Self {
            success: true,
            status: Some(resolved.status),
            review_stage: resolved.review_stage,
            fallback: resolved.fallback,
            error: None,
        }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            status: None,
            review_stage: None,
            fallback: false,
            error: Some(msg.into()),
        }
    }
}

// =============================================================================
// BATCH REQUEST/RESPONSE
// =============================================================================

/// Batch resolve request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchRequest {
    pub sessions: Vec<StatusInput>,
}

impl BatchRequest {
    /// Check the batch size. Individual records are never rejected.
    pub fn validate(&self) -> Result<(), PenilaianError> {
        if self.sessions.len() > MAX_BATCH_SIZE {
            return Err(PenilaianError::BatchTooLarge {
                len: self.sessions.len(),
                max: MAX_BATCH_SIZE,
            });
        }
        Ok(())
    }
}

/// Batch resolve response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchResponse {
    pub success: bool,
    pub results: Vec<ResolvedSession>,
    pub summary: Option<StatusSummary>,
    pub error: Option<String>,
}

impl BatchResponse {
    pub fn success(results: Vec<ResolvedSession>, summary: StatusSummary) -> Self {
        Self {
            success: true,
            results,
            summary: Some(summary),
            error: None,
        }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            results: vec![],
            summary: None,
            error: Some(msg.into()),
        }
    }
}
