//! # Status Resolver
//!
//! Derives the single combined status from the two independent upstream
//! signals (session status and review status).
//!
//! ## Precedence
//!
//! 1. `resubmitted` sessions stay `resubmitted`, whatever the review says.
//! 2. `submitted` sessions take the review outcome when it is one of
//!    `needs_revision`, `approved`, `completed`; otherwise stay `submitted`.
//! 3. Every other session value is used as-is as the lookup key.
//!
//! A key missing from the table resolves to the `in_progress` row. The
//! resolver never fails: unexpected upstream data must still render.
//!
//! `review_stage` is accepted so callers can pass the whole upstream record
//! through, but no branch depends on it.

use super::table::{AssessmentStatus, DEFAULT_INDEX, STATUS_TABLE};
use crate::types::{CombinedStatus, ReviewStatus, SessionStatus, StatusInput};

// =============================================================================
// STATUS RESOLVER
// =============================================================================

/// Stateless resolver over the static status table.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusResolver;

impl StatusResolver {
    /// Create a new resolver.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Derive the combined key, without applying the fallback.
    ///
    /// `None` means the key is not in the table and resolution will fall
    /// back to `in_progress`.
    #[must_use]
    pub fn combine(
        &self,
        session_status: &SessionStatus,
        review_status: Option<&ReviewStatus>,
    ) -> Option<CombinedStatus> {
        // Re-parse so a hand-built `Other("submitted")` behaves like `Submitted`.
        let session_status = SessionStatus::parse(session_status.as_str());
        let review_status = review_status.map(|r| ReviewStatus::parse(r.as_str()));

        match session_status {
            SessionStatus::Resubmitted => Some(CombinedStatus::Resubmitted),
            SessionStatus::Submitted => Some(match review_status {
                Some(ReviewStatus::NeedsRevision) => CombinedStatus::NeedsRevision,
                Some(ReviewStatus::Approved) => CombinedStatus::Approved,
                Some(ReviewStatus::Completed) => CombinedStatus::Completed,
                Some(ReviewStatus::Other(_)) | None => CombinedStatus::Submitted,
            }),
            SessionStatus::InProgress => Some(CombinedStatus::InProgress),
            // The raw session value is the lookup key as-is.
            SessionStatus::Other(raw) => raw.parse().ok(),
        }
    }

    /// Resolve the descriptor for a session.
    #[must_use]
    pub fn resolve(
        &self,
        session_status: &SessionStatus,
        review_status: Option<&ReviewStatus>,
        _review_stage: Option<&str>,
    ) -> &'static AssessmentStatus {
        match self.combine(session_status, review_status) {
            Some(key) => key.descriptor(),
            None => &STATUS_TABLE[DEFAULT_INDEX],
        }
    }

    /// Resolve a full upstream record.
    #[must_use]
    pub fn resolve_input(&self, input: &StatusInput) -> &'static AssessmentStatus {
        self.resolve(
            &input.session_status,
            input.review_status.as_ref(),
            input.review_stage.as_deref(),
        )
    }

    /// Whether resolving these fields lands on the fallback row.
    #[must_use]
    pub fn is_fallback(
        &self,
        session_status: &SessionStatus,
        review_status: Option<&ReviewStatus>,
    ) -> bool {
        self.combine(session_status, review_status).is_none()
    }

    /// All six descriptors in canonical order.
    #[must_use]
    pub fn table(&self) -> &'static [AssessmentStatus] {
        &STATUS_TABLE
    }
}

/// Resolve from raw upstream strings.
///
/// Convenience over [`StatusResolver::resolve`] for callers holding the
/// loosely-typed fields directly.
#[must_use]
pub fn resolve_status(
    session_status: &str,
    review_status: Option<&str>,
    review_stage: Option<&str>,
) -> &'static AssessmentStatus {
    let review = review_status.map(ReviewStatus::parse);
    StatusResolver::new().resolve(
        &SessionStatus::parse(session_status),
        review.as_ref(),
        review_stage,
    )
}

impl StatusInput {
    /// Resolve this record with the default resolver.
    #[must_use]
    pub fn resolve(&self) -> &'static AssessmentStatus {
        StatusResolver::new().resolve_input(self)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const SESSIONS: [&str; 3] = ["in_progress", "submitted", "resubmitted"];
    const REVIEWS: [Option<&str>; 5] = [
        None,
        Some("needs_revision"),
        Some("approved"),
        Some("completed"),
        Some("anything-else"),
    ];

    #[test]
    fn every_documented_pair_lands_on_a_table_row() {
        let resolver = StatusResolver::new();
        for session in SESSIONS {
            for review in REVIEWS {
                let review = review.map(ReviewStatus::parse);
                let session = SessionStatus::parse(session);
                assert!(resolver.combine(&session, review.as_ref()).is_some());
                let resolved = resolver.resolve(&session, review.as_ref(), None);
                assert!(CombinedStatus::ALL.contains(&resolved.combined_status));
            }
        }
    }

    #[test]
    fn resubmitted_overrides_review() {
        for review in REVIEWS {
            let status = resolve_status("resubmitted", review, None);
            assert_eq!(status.combined_status, CombinedStatus::Resubmitted);
        }
    }

    #[test]
    fn submitted_needs_revision() {
        let status = resolve_status("submitted", Some("needs_revision"), None);
        assert_eq!(status.combined_status, CombinedStatus::NeedsRevision);
        assert!(status.can_resubmit);
        assert!(status.show_feedback);
    }

    #[test]
    fn submitted_approved() {
        let status = resolve_status("submitted", Some("approved"), None);
        assert_eq!(status.combined_status, CombinedStatus::Approved);
        assert!(!status.can_edit);
    }

    #[test]
    fn submitted_completed() {
        let status = resolve_status("submitted", Some("completed"), None);
        assert_eq!(status.combined_status, CombinedStatus::Completed);
        assert!(status.show_feedback);
    }

    #[test]
    fn submitted_without_review() {
        let status = resolve_status("submitted", None, None);
        assert_eq!(status.combined_status, CombinedStatus::Submitted);
        assert!(!status.can_submit);
        assert!(!status.can_edit);
    }

    #[test]
    fn submitted_with_unknown_review_stays_submitted() {
        let status = resolve_status("submitted", Some("rejected"), None);
        assert_eq!(status.combined_status, CombinedStatus::Submitted);
    }

    #[test]
    fn in_progress_without_review() {
        let status = resolve_status("in_progress", None, None);
        assert_eq!(status.combined_status, CombinedStatus::InProgress);
        assert!(status.can_edit);
        assert!(status.can_submit);
    }

    #[test]
    fn in_progress_ignores_review() {
        let status = resolve_status("in_progress", Some("approved"), None);
        assert_eq!(status.combined_status, CombinedStatus::InProgress);
    }

    #[test]
    fn unknown_session_falls_back_to_in_progress() {
        let status = resolve_status("unknown_bogus_status", Some("completed"), None);
        assert_eq!(status, CombinedStatus::InProgress.descriptor());
        assert!(StatusResolver::new().is_fallback(
            &SessionStatus::parse("unknown_bogus_status"),
            Some(&ReviewStatus::Completed)
        ));
    }

    #[test]
    fn session_value_matching_a_table_key_is_looked_up() {
        let status = resolve_status("needs_revision", None, None);
        assert_eq!(status.combined_status, CombinedStatus::NeedsRevision);
        assert!(!StatusResolver::new().is_fallback(&SessionStatus::parse("needs_revision"), None));
    }

    #[test]
    fn hand_built_other_with_known_value_follows_precedence() {
        let resolver = StatusResolver::new();
        let session = SessionStatus::Other("submitted".to_string());

        let status = resolver.resolve(&session, Some(&ReviewStatus::NeedsRevision), None);
        assert_eq!(status.combined_status, CombinedStatus::NeedsRevision);

        let review = ReviewStatus::Other("approved".to_string());
        let status = resolver.resolve(&SessionStatus::Submitted, Some(&review), None);
        assert_eq!(status.combined_status, CombinedStatus::Approved);

        let session = SessionStatus::Other("resubmitted".to_string());
        let status = resolver.resolve(&session, Some(&ReviewStatus::Completed), None);
        assert_eq!(status.combined_status, CombinedStatus::Resubmitted);
    }

    #[test]
    fn review_stage_does_not_change_the_result() {
        let plain = resolve_status("submitted", Some("approved"), None);
        let staged = resolve_status("submitted", Some("approved"), Some("juri_scoring"));
        assert_eq!(plain, staged);
    }

    #[test]
    fn resolve_is_idempotent() {
        let input = StatusInput::new("submitted").with_review("needs_revision");
        assert_eq!(input.resolve(), input.resolve());
        assert!(std::ptr::eq(input.resolve(), input.resolve()));
    }

    #[test]
    fn table_has_six_rows() {
        assert_eq!(StatusResolver::new().table().len(), 6);
    }
}
