use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message carried by every rejection issued by the rate limited clients.
pub const PERSISTENCE_LIMIT_EXCEEDED_MESSAGE: &str = "Persistence Max QPS Reached.";

/// The error returned when the persistence QPS limit is reached.
///
/// Raised only by the rate limited clients, before the wrapped persistence
/// implementation is touched.
pub const ERR_PERSISTENCE_LIMIT_EXCEEDED: PersistenceError = PersistenceError::ResourceExhausted {
    cause: ResourceExhaustedCause::SystemOverloaded,
    message: PERSISTENCE_LIMIT_EXCEEDED_MESSAGE,
};

/// Why a resource was exhausted.
///
/// The codes are stable and meant to be matched on by callers deciding
/// whether to back off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceExhaustedCause {
    SystemOverloaded,
}

impl ResourceExhaustedCause {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SystemOverloaded => "SYSTEM_OVERLOADED",
        }
    }
}

impl fmt::Display for ResourceExhaustedCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    #[error("Resource exhausted ({cause}): {message}")]
    ResourceExhausted {
        cause: ResourceExhaustedCause,
        message: &'static str,
    },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Condition failed: {0}")]
    ConditionFailed(String),

    #[error("Current workflow condition failed: {msg} (run {run_id})")]
    CurrentWorkflowConditionFailed { msg: String, run_id: String },

    #[error("Shard ownership lost: shard {shard_id}: {msg}")]
    ShardOwnershipLost { shard_id: i32, msg: String },

    #[error("Persistence timeout: {0}")]
    Timeout(String),

    #[error("Persistence unavailable: {0}")]
    Unavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Operation canceled")]
    Canceled,

    #[error("Deadline exceeded")]
    DeadlineExceeded,
}

/// Discriminant of [`PersistenceError`], for callers that branch on the
/// kind of failure rather than its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    ResourceExhausted,
    NotFound,
    InvalidArgument,
    ConditionFailed,
    CurrentWorkflowConditionFailed,
    ShardOwnershipLost,
    Timeout,
    Unavailable,
    Internal,
    Canceled,
    DeadlineExceeded,
}

impl PersistenceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ResourceExhausted { .. } => ErrorKind::ResourceExhausted,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::ConditionFailed(_) => ErrorKind::ConditionFailed,
            Self::CurrentWorkflowConditionFailed { .. } => {
                ErrorKind::CurrentWorkflowConditionFailed
            }
            Self::ShardOwnershipLost { .. } => ErrorKind::ShardOwnershipLost,
            Self::Timeout(_) => ErrorKind::Timeout,
            Self::Unavailable(_) => ErrorKind::Unavailable,
            Self::Internal(_) => ErrorKind::Internal,
            Self::Canceled => ErrorKind::Canceled,
            Self::DeadlineExceeded => ErrorKind::DeadlineExceeded,
        }
    }

    pub fn is_resource_exhausted(&self) -> bool {
        matches!(self, Self::ResourceExhausted { .. })
    }

    /// The exhaustion cause, if this is a resource exhausted error.
    pub fn cause(&self) -> Option<ResourceExhaustedCause> {
        match self {
            Self::ResourceExhausted { cause, .. } => Some(*cause),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, PersistenceError>;
