//! Rate limited persistence clients.
//!
//! [`RateLimitedClient`] wraps any persistence implementation and implements
//! the same trait on top of it. Each gated call asks the [`RateLimiter`] once:
//!
//! * denied: the call returns [`ERR_PERSISTENCE_LIMIT_EXCEEDED`] and the
//!   wrapped implementation is never invoked;
//! * allowed: the wrapped implementation is invoked exactly once with the
//!   same arguments and its result is returned as is.
//!
//! `get_name`, `close` and [`Queue::init`](crate::persistence::Queue::init)
//! bypass the limiter.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use ratelimited_persistence::persistence::*;
//! use ratelimited_persistence::quotas::{RateLimitConfig, TokenBucketRateLimiter};
//! use ratelimited_persistence::{ERR_PERSISTENCE_LIMIT_EXCEEDED, RateLimitedClient};
//! # use ratelimited_persistence::Result;
//! # struct InMemoryShards;
//! # impl ShardManager for InMemoryShards {
//! #     fn get_name(&self) -> &str { "memory" }
//! #     fn get_or_create_shard(
//! #         &self,
//! #         request: &GetOrCreateShardRequest,
//! #     ) -> Result<GetOrCreateShardResponse> {
//! #         let shard_info = ShardInfo { shard_id: request.shard_id, ..Default::default() };
//! #         Ok(GetOrCreateShardResponse { shard_info })
//! #     }
//! #     fn update_shard(&self, _request: &UpdateShardRequest) -> Result<()> { Ok(()) }
//! #     fn close(&self) {}
//! # }
//! # let store = Arc::new(InMemoryShards);
//!
//! let config = RateLimitConfig::new(1.0).burst(1);
//! let limiter = Arc::new(TokenBucketRateLimiter::new(&config)?);
//! let shards: Arc<dyn ShardManager> = Arc::new(RateLimitedClient::new(store, limiter));
//!
//! let request = GetOrCreateShardRequest { shard_id: 1, initial_shard_info: None };
//! assert_eq!(shards.get_or_create_shard(&request)?.shard_info.shard_id, 1);
//! assert_eq!(shards.get_or_create_shard(&request), Err(ERR_PERSISTENCE_LIMIT_EXCEEDED));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod cluster_metadata;
mod execution;
mod metadata;
mod queue;
mod shard;
mod task;

use crate::core::{ERR_PERSISTENCE_LIMIT_EXCEEDED, Result};
use crate::quotas::RateLimiter;
use log::trace;
use std::sync::Arc;

/// Admission controlled façade over a persistence implementation `P`
///
/// Holds no state besides the two references it is built with, so one
/// instance can be shared by any number of threads.
pub struct RateLimitedClient<P: ?Sized> {
    rate_limiter: Arc<dyn RateLimiter>,
    persistence: Arc<P>,
}

impl<P: ?Sized> RateLimitedClient<P> {
    pub fn new(persistence: Arc<P>, rate_limiter: Arc<dyn RateLimiter>) -> Self {
        Self {
            rate_limiter,
            persistence,
        }
    }

    /// The wrapped persistence implementation
    pub fn persistence(&self) -> &Arc<P> {
        &self.persistence
    }

    pub fn rate_limiter(&self) -> &Arc<dyn RateLimiter> {
        &self.rate_limiter
    }

    /// Asks the limiter for one call of `operation`
    fn admit(&self, category: &'static str, operation: &'static str) -> Result<()> {
        if self.rate_limiter.allow() {
            return Ok(());
        }

        trace!("{category} persistence call `{operation}` rejected: max QPS reached");
        Err(ERR_PERSISTENCE_LIMIT_EXCEEDED)
    }
}

impl<P: ?Sized> Clone for RateLimitedClient<P> {
    fn clone(&self) -> Self {
        Self {
            rate_limiter: Arc::clone(&self.rate_limiter),
            persistence: Arc::clone(&self.persistence),
        }
    }
}

/// Generates gated trait methods that forward to `self.persistence`.
///
/// Every listed method asks the limiter first and, when admitted, calls the
/// method of the same name on the wrapped implementation with the same
/// arguments.
macro_rules! rate_limited {
    (
        $category:literal;
        $( fn $method:ident(&self $(, $arg:ident: $ty:ty)*) -> $ret:ty; )+
    ) => {
        $(
            fn $method(&self $(, $arg: $ty)*) -> $crate::core::Result<$ret> {
                self.admit($category, stringify!($method))?;
                self.persistence.$method($($arg),*)
            }
        )+
    };
}
use rate_limited;
