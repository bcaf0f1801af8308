//! # Core Type Definitions
//!
//! This module contains all core types for the Penilaian status resolver:
//! - Raw upstream signals (`SessionStatus`, `ReviewStatus`, `StatusInput`)
//! - The canonical output key (`CombinedStatus`)
//! - The permission vocabulary (`Action`, `Section`)
//! - Error types (`PenilaianError`)
//!
//! ## Open Inputs, Closed Outputs
//!
//! Upstream fields arrive as loosely-typed strings. The input enums keep an
//! `Other` variant so nothing is lost or rejected during parsing; only the
//! resolver decides what an unrecognized value means. `CombinedStatus` is
//! closed: it has exactly six variants.

use crate::primitives::MAX_STATUS_LENGTH;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// SESSION STATUS
// =============================================================================

/// Raw status of a participant's response session, as reported upstream.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SessionStatus {
    /// The participant is still filling in the assessment.
    InProgress,
    /// The participant submitted the assessment for review.
    Submitted,
    /// The participant submitted again after a revision request.
    Resubmitted,
    /// Any value the upstream sent that is not one of the above.
    Other(String),
}

impl SessionStatus {
    /// Parse a raw upstream value. Never fails.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "in_progress" => Self::InProgress,
            "submitted" => Self::Submitted,
            "resubmitted" => Self::Resubmitted,
            other => Self::Other(other.to_string()),
        }
    }

    /// The raw string form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::InProgress => "in_progress",
            Self::Submitted => "submitted",
            Self::Resubmitted => "resubmitted",
            Self::Other(raw) => raw,
        }
    }

    /// Whether this is one of the three documented session values.
    #[must_use]
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<&str> for SessionStatus {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<String> for SessionStatus {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<SessionStatus> for String {
    fn from(status: SessionStatus) -> Self {
        match status {
            SessionStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// REVIEW STATUS
// =============================================================================

/// Outcome of the latest review pass over a session.
///
/// Absence of a review is `Option::<ReviewStatus>::None`, not a variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ReviewStatus {
    /// The reviewer sent the session back to the participant.
    NeedsRevision,
    /// The reviewer accepted the session.
    Approved,
    /// Scoring of the session is finished.
    Completed,
    /// Any value the upstream sent that is not one of the above.
    Other(String),
}

impl ReviewStatus {
    /// Parse a raw upstream value. Never fails.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "needs_revision" => Self::NeedsRevision,
            "approved" => Self::Approved,
            "completed" => Self::Completed,
            other => Self::Other(other.to_string()),
        }
    }

    /// The raw string form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::NeedsRevision => "needs_revision",
            Self::Approved => "approved",
            Self::Completed => "completed",
            Self::Other(raw) => raw,
        }
    }

    /// Whether this is one of the three documented review outcomes.
    #[must_use]
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<&str> for ReviewStatus {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<String> for ReviewStatus {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<ReviewStatus> for String {
    fn from(status: ReviewStatus) -> Self {
        match status {
            ReviewStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// COMBINED STATUS
// =============================================================================

/// The single derived state the UI works with.
///
/// Ordering follows the participant's journey through the workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombinedStatus {
    InProgress,
    Submitted,
    NeedsRevision,
    Resubmitted,
    Approved,
    Completed,
}

impl CombinedStatus {
    /// All six keys in canonical order.
    pub const ALL: [CombinedStatus; 6] = [
        CombinedStatus::InProgress,
        CombinedStatus::Submitted,
        CombinedStatus::NeedsRevision,
        CombinedStatus::Resubmitted,
        CombinedStatus::Approved,
        CombinedStatus::Completed,
    ];

    /// The snake_case key used on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            CombinedStatus::InProgress => "in_progress",
            CombinedStatus::Submitted => "submitted",
            CombinedStatus::NeedsRevision => "needs_revision",
            CombinedStatus::Resubmitted => "resubmitted",
            CombinedStatus::Approved => "approved",
            CombinedStatus::Completed => "completed",
        }
    }

    /// Whether a reviewer has already weighed in on this state.
    #[must_use]
    pub fn is_reviewed(&self) -> bool {
        matches!(
            self,
            CombinedStatus::NeedsRevision | CombinedStatus::Approved | CombinedStatus::Completed
        )
    }

    /// Whether the next move belongs to a reviewer rather than the participant.
    #[must_use]
    pub fn awaits_review(&self) -> bool {
        matches!(self, CombinedStatus::Submitted | CombinedStatus::Resubmitted)
    }
}

impl fmt::Display for CombinedStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CombinedStatus {
    type Err = PenilaianError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CombinedStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| PenilaianError::UnknownCombinedStatus(s.to_string()))
    }
}

// =============================================================================
// PERMISSION VOCABULARY
// =============================================================================

/// A user action gated by the combined status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Edit,
    Submit,
    Resubmit,
}

/// A UI section whose visibility is gated by the combined status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Feedback,
    Progress,
}

// =============================================================================
// STATUS INPUT
// =============================================================================

/// The status-bearing part of an upstream session record.
///
/// Field names follow the upstream JSON (`sessionStatus`, `reviewStatus`,
/// `reviewStage`). `reviewStatus` and `reviewStage` may be `null` or absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusInput {
    pub session_status: SessionStatus,
    #[serde(default)]
    pub review_status: Option<ReviewStatus>,
    /// Multi-stage review marker (e.g. `juri_scoring`). Carried, never interpreted.
    #[serde(default)]
    pub review_stage: Option<String>,
}

impl StatusInput {
    /// Create an input with no review and no stage.
    #[must_use]
    pub fn new(session_status: impl Into<SessionStatus>) -> Self {
        Self {
            session_status: session_status.into(),
            review_status: None,
            review_stage: None,
        }
    }

    /// Attach a review outcome.
    #[must_use]
    pub fn with_review(mut self, review_status: impl Into<ReviewStatus>) -> Self {
        self.review_status = Some(review_status.into());
        self
    }

    /// Attach a review stage.
    #[must_use]
    pub fn with_stage(mut self, review_stage: impl Into<String>) -> Self {
        self.review_stage = Some(review_stage.into());
        self
    }

    /// The review stage as it should be echoed back to callers, cut to at
    /// most `MAX_STATUS_LENGTH` bytes on a char boundary.
    ///
    /// Session and review values are never rejected for length: an
    /// over-long value is just unrecognized and resolves to the fallback.
    #[must_use]
    pub fn echoed_stage(&self) -> Option<&str> {
        self.review_stage.as_deref().map(|stage| {
            let mut end = stage.len().min(MAX_STATUS_LENGTH);
            while !stage.is_char_boundary(end) {
                end -= 1;
            }
            &stage[..end]
        })
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur around the Penilaian resolver.
///
/// Resolution itself is total and never produces one of these. They cover
/// parsing of canonical keys and validation at the outer surfaces.
#[derive(Debug, Error)]
pub enum PenilaianError {
    /// A string is not one of the six canonical combined status keys.
    #[error("Unknown combined status: {0}")]
    UnknownCombinedStatus(String),

    /// A batch holds more sessions than accepted.
    #[error("Batch of {len} sessions exceeds maximum {max}")]
    BatchTooLarge { len: usize, max: usize },

    /// A serialization or deserialization error occurred.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// A configuration file could not be parsed.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(String),
}

// =============================================================================
// TESTS
// =============================================================================
