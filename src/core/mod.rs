pub mod context;
pub mod error;
pub mod outcome;

pub use context::Context;
pub use error::{
    ERR_PERSISTENCE_LIMIT_EXCEEDED, ErrorKind, PERSISTENCE_LIMIT_EXCEEDED_MESSAGE,
    PersistenceError, ResourceExhaustedCause, Result,
};
pub use outcome::{OutcomeExt, ZeroValue};
pub(crate) use outcome::zero_value_via_default;
