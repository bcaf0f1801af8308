//! # Status Summary
//!
//! Per-status tallies over a batch of sessions, for dashboards that show
//! how many assessments sit in each workflow state.

use crate::status::StatusResolver;
use crate::types::{CombinedStatus, StatusInput};
use serde::{Deserialize, Serialize};

/// Count of sessions per combined status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSummary {
    pub in_progress: usize,
    pub submitted: usize,
    pub needs_revision: usize,
    pub resubmitted: usize,
    pub approved: usize,
    pub completed: usize,
    /// Total sessions recorded.
    pub total: usize,
    /// Sessions that only resolved through the `in_progress` fallback.
    /// Also counted under `in_progress`.
    pub fallbacks: usize,
}

impl StatusSummary {
    /// Create a summary with all zeros.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Resolve and tally every input.
    #[must_use]
    pub fn from_inputs(inputs: &[StatusInput]) -> Self {
        let resolver = StatusResolver::new();
        let mut summary = Self::empty();
        for input in inputs {
            let fell_back =
                resolver.is_fallback(&input.session_status, input.review_status.as_ref());
            summary.record(resolver.resolve_input(input).combined_status, fell_back);
        }
        summary
    }

    /// Record one resolved session.
    pub fn record(&mut self, status: CombinedStatus, fell_back: bool) {
        let slot = match status {
            CombinedStatus::InProgress => &mut self.in_progress,
            CombinedStatus::Submitted => &mut self.submitted,
            CombinedStatus::NeedsRevision => &mut self.needs_revision,
            CombinedStatus::Resubmitted => &mut self.resubmitted,
            CombinedStatus::Approved => &mut self.approved,
            CombinedStatus::Completed => &mut self.completed,
        };
        *slot = slot.saturating_add(1);
        self.total = self.total.saturating_add(1);
        if fell_back {
            self.fallbacks = self.fallbacks.saturating_add(1);
        }
    }

    /// Count for one status.
    #[must_use]
    pub fn count(&self, status: CombinedStatus) -> usize {
        match status {
            CombinedStatus::InProgress => self.in_progress,
            CombinedStatus::Submitted => self.submitted,
            CombinedStatus::NeedsRevision => self.needs_revision,
            CombinedStatus::Resubmitted => self.resubmitted,
            CombinedStatus::Approved => self.approved,
            CombinedStatus::Completed => self.completed,
        }
    }

    /// Sessions waiting on a jury member (submitted or resubmitted).
    #[must_use]
    pub fn awaiting_review(&self) -> usize {
        CombinedStatus::ALL
            .into_iter()
            .filter(CombinedStatus::awaits_review)
            .map(|s| self.count(s))
            .sum()
    }

    /// Sessions a reviewer has already ruled on.
    #[must_use]
    pub fn reviewed(&self) -> usize {
        CombinedStatus::ALL
            .into_iter()
            .filter(CombinedStatus::is_reviewed)
            .map(|s| self.count(s))
            .sum()
    }

    /// Share of sessions that are `completed`, in whole percent (integer only).
    #[must_use]
    pub fn completion_percent(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        let percent = self.completed.saturating_mul(100) / self.total;
        percent.min(100) as u8
    }
}
