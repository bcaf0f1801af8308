//! # penilaian-core
//!
//! The assessment workflow status resolver for Penilaian - THE LOGIC.
//!
//! An assessment session carries two independent upstream signals: the
//! participant's session status and the latest review outcome. This crate
//! reconciles them into one of six canonical combined states, each with
//! fixed display hints and UI permissions.
//!
//! ```
//! use penilaian_core::{CombinedStatus, resolve_status};
//!
//! let status = resolve_status("submitted", Some("needs_revision"), None);
//! assert_eq!(status.combined_status, CombinedStatus::NeedsRevision);
//! assert!(status.can_resubmit);
//! ```
//!
//! ## Architectural Constraints
//!
//! - Pure: no async, no I/O, no shared mutable state
//! - Total: resolution never fails, unknown input renders as `in_progress`
//! - Static: the descriptor table is compile-time data

// =============================================================================
// MODULES
// =============================================================================

pub mod primitives;
pub mod status;
pub mod summary;
pub mod types;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use status::{AssessmentStatus, STATUS_TABLE, StatusResolver, resolve_status};
pub use summary::StatusSummary;
pub use types::{
    Action, CombinedStatus, PenilaianError, ReviewStatus, Section, SessionStatus, StatusInput,
};
