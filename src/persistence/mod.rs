//! Persistence contracts of the orchestration engine.
//!
//! One trait per operation family. Storage backends implement these traits;
//! [`crate::rate_limited::RateLimitedClient`] implements them again on top of
//! any backend so that callers can be handed either one.

pub mod cluster_metadata;
pub mod common;
pub mod execution;
pub mod history;
pub mod metadata;
pub mod queue;
pub mod shard;
pub mod task;

pub use cluster_metadata::*;
pub use common::*;
pub use execution::*;
pub use history::*;
pub use metadata::*;
pub use queue::*;
pub use shard::*;
pub use task::*;
