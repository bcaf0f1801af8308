//! # Middleware Module
//!
//! Request throttling for the Penilaian HTTP API.
//!
//! The rate is `ServerConfig::rate_limit`, as produced by `Config::load`
//! followed by `Config::with_env_overrides`. A rate of 0 yields no limiter,
//! and `create_router` then leaves the layer out entirely. The limiter is
//! a single global bucket shared by every route, `/health` included.

use crate::config::ServerConfig;
use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::Response,
};
use governor::{
    Quota, RateLimiter,
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
};
use std::num::NonZeroU32;
use std::sync::Arc;

// =============================================================================
// RATE LIMITER
// =============================================================================

/// Shared limiter handed to the middleware as router state.
pub type GlobalRateLimiter = Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>;

/// Build the limiter for these server settings, or `None` when disabled.
pub fn limiter_from_settings(settings: &ServerConfig) -> Option<GlobalRateLimiter> {
    let rps = NonZeroU32::new(settings.rate_limit)?;
    Some(Arc::new(RateLimiter::direct(Quota::per_second(rps))))
}

/// Reject the request with 429 once the per-second quota is spent.
pub async fn rate_limit_middleware(
    State(limiter): State<GlobalRateLimiter>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, (StatusCode, &'static str)> {
    if limiter.check().is_err() {
        tracing::warn!(path = %request.uri().path(), "Rate limit exceeded");
        return Err((StatusCode::TOO_MANY_REQUESTS, "Too Many Requests"));
    }
    Ok(next.run(request).await)
}

// =============================================================================
// TESTS
// =============================================================================
