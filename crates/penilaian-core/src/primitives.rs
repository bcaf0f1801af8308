//! # Innate Primitives
//!
//! Hardcoded limits for the Penilaian CORE.
//!
//! The resolver itself has no limits (it is total over all inputs). These
//! constants bound what the outer surfaces echo back or accept per request.

/// Maximum length of a review stage echoed back in responses.
///
/// Longer stages are truncated in the echo, never rejected; the resolver
/// does not read the stage at all.
pub const MAX_STATUS_LENGTH: usize = 64;

/// Maximum number of sessions in a single batch resolution.
///
/// Batches longer than this are rejected to keep a single request bounded.
pub const MAX_BATCH_SIZE: usize = 1000;
