//! # Status Module
//!
//! Workflow status derivation: the static descriptor table and the resolver
//! that picks a row from it.

mod resolver;
mod table;

pub use resolver::*;
pub use table::{AssessmentStatus, STATUS_TABLE};
