// ============================================================================
// Rate limited persistence clients
// ============================================================================

pub mod core;
pub mod persistence;
pub mod quotas;
pub mod rate_limited;

// Re-export main types for convenience
pub use crate::core::{
    Context, ERR_PERSISTENCE_LIMIT_EXCEEDED, ErrorKind, OutcomeExt, PersistenceError,
    ResourceExhaustedCause, Result, ZeroValue,
};
pub use quotas::{NoopRateLimiter, RateLimitConfig, RateLimiter, TokenBucketRateLimiter};
pub use rate_limited::RateLimitedClient;

pub use persistence::{
    ClusterMetadataManager, ExecutionManager, MetadataManager, Queue, ShardManager, TaskManager,
};
