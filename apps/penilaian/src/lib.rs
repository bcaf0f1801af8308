//! # Penilaian
//!
//! Library half of the Penilaian binary: the HTTP API, the CLI, and the
//! configuration they share. Exposed as a library so integration tests can
//! drive the router directly.

pub mod api;
pub mod cli;
pub mod config;
