//! Admission decisions for persistence calls.
//!
//! A [`RateLimiter`] answers one question, "may this call proceed now?",
//! without ever waiting. The rate limited persistence clients ask it once per
//! gated call.

pub mod config;
pub mod token_bucket;

pub use config::{ConfigError, RateLimitConfig};
pub use token_bucket::TokenBucketRateLimiter;

use std::sync::Arc;

/// Non-blocking admission decision
///
/// Implementations must be safe to query from many threads at once and must
/// answer in bounded time.
pub trait RateLimiter: Send + Sync {
    /// Returns `true` if one more call may proceed now.
    fn allow(&self) -> bool;
}

impl<T: RateLimiter + ?Sized> RateLimiter for Arc<T> {
    fn allow(&self) -> bool {
        (**self).allow()
    }
}

/// Admits every call
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRateLimiter;

impl RateLimiter for NoopRateLimiter {
    fn allow(&self) -> bool {
        true
    }
}
