//! # Status Table
//!
//! The six canonical descriptors. This is configuration, not logic: every
//! field is written out per row so the table can be read top to bottom.
//!
//! | key | edit | submit | resubmit | feedback | progress |
//! |-----|------|--------|----------|----------|----------|
//! | in_progress | ✓ | ✓ | | | ✓ |
//! | submitted | | | | | |
//! | needs_revision | ✓ | | ✓ | ✓ | ✓ |
//! | resubmitted | | | | | |
//! | approved | | | | | |
//! | completed | | | | ✓ | |

use crate::types::{Action, CombinedStatus, Section};
use serde::Serialize;

// =============================================================================
// DESCRIPTOR
// =============================================================================

/// Canonical combined state plus its display and permission attributes.
///
/// Descriptors only ever live in [`STATUS_TABLE`]; callers receive
/// `&'static` references and never build their own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentStatus {
    pub combined_status: CombinedStatus,
    /// Human-readable badge label.
    pub description: &'static str,
    pub color: &'static str,
    pub bg_color: &'static str,
    pub text_color: &'static str,
    pub icon: &'static str,
    pub can_edit: bool,
    pub can_submit: bool,
    pub can_resubmit: bool,
    pub show_feedback: bool,
    pub show_progress: bool,
}

impl AssessmentStatus {
    /// Whether the UI should enable `action`.
    #[must_use]
    pub fn allows(&self, action: Action) -> bool {
        match action {
            Action::Edit => self.can_edit,
            Action::Submit => self.can_submit,
            Action::Resubmit => self.can_resubmit,
        }
    }

    /// Whether the UI should render `section`.
    #[must_use]
    pub fn shows(&self, section: Section) -> bool {
        match section {
            Section::Feedback => self.show_feedback,
            Section::Progress => self.show_progress,
        }
    }

    /// Every action this state enables, in declaration order.
    #[must_use]
    pub fn allowed_actions(&self) -> Vec<Action> {
        [Action::Edit, Action::Submit, Action::Resubmit]
            .into_iter()
            .filter(|action| self.allows(*action))
            .collect()
    }
}

// =============================================================================
// TABLE
// =============================================================================

/// Index of the fallback row. Must stay the `in_progress` descriptor.
pub(crate) const DEFAULT_INDEX: usize = 0;

/// The static table, in [`CombinedStatus::ALL`] order.
pub static STATUS_TABLE: [AssessmentStatus; 6] = [
    AssessmentStatus {
        combined_status: CombinedStatus::InProgress,
        description: "In Progress",
        color: "blue",
        bg_color: "bg-blue-100",
        text_color: "text-blue-800",
        icon: "clock",
        can_edit: true,
        can_submit: true,
        can_resubmit: false,
        show_feedback: false,
        show_progress: true,
    },
    AssessmentStatus {
        combined_status: CombinedStatus::Submitted,
        description: "Submitted",
        color: "yellow",
        bg_color: "bg-yellow-100",
        text_color: "text-yellow-800",
        icon: "send",
        can_edit: false,
        can_submit: false,
        can_resubmit: false,
        show_feedback: false,
        show_progress: false,
    },
    AssessmentStatus {
        combined_status: CombinedStatus::NeedsRevision,
        description: "Needs Revision",
        color: "orange",
        bg_color: "bg-orange-100",
        text_color: "text-orange-800",
        icon: "alert-circle",
        can_edit: true,
        can_submit: false,
        can_resubmit: true,
        show_feedback: true,
        show_progress: true,
    },
    AssessmentStatus {
        combined_status: CombinedStatus::Resubmitted,
        description: "Resubmitted",
        color: "purple",
        bg_color: "bg-purple-100",
        text_color: "text-purple-800",
        icon: "refresh-cw",
        can_edit: false,
        can_submit: false,
        can_resubmit: false,
        show_feedback: false,
        show_progress: false,
    },
    AssessmentStatus {
        combined_status: CombinedStatus::Approved,
        description: "Approved",
        color: "green",
        bg_color: "bg-green-100",
        text_color: "text-green-800",
        icon: "check-circle",
        can_edit: false,
        can_submit: false,
        can_resubmit: false,
        show_feedback: false,
        show_progress: false,
    },
    AssessmentStatus {
        combined_status: CombinedStatus::Completed,
        description: "Completed",
        color: "emerald",
        bg_color: "bg-emerald-100",
        text_color: "text-emerald-800",
        icon: "award",
        can_edit: false,
        can_submit: false,
        can_resubmit: false,
        show_feedback: true,
        show_progress: false,
    },
];

impl CombinedStatus {
    /// The descriptor row for this key.
    #[must_use]
    pub fn descriptor(self) -> &'static AssessmentStatus {
        STATUS_TABLE
            .iter()
            .find(|row| row.combined_status == self)
            .unwrap_or(&STATUS_TABLE[DEFAULT_INDEX])
    }
}
