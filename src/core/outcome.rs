// ============================================================================
// Zero values
// ============================================================================

use super::{PersistenceError, Result};

/// The "nothing happened" value of an operation output
///
/// This is what a caller observes for an operation that was rejected before
/// reaching storage: an empty response, an empty list, `false`, `0`, or a
/// type specific sentinel such as [`crate::persistence::MessageId::EMPTY`].
pub trait ZeroValue {
    fn zero_value() -> Self;
}

impl ZeroValue for () {
    fn zero_value() -> Self {}
}

impl ZeroValue for bool {
    fn zero_value() -> Self {
        false
    }
}

impl ZeroValue for usize {
    fn zero_value() -> Self {
        0
    }
}

impl<T> ZeroValue for Vec<T> {
    fn zero_value() -> Self {
        Vec::new()
    }
}

impl<A: ZeroValue, B: ZeroValue> ZeroValue for (A, B) {
    fn zero_value() -> Self {
        (A::zero_value(), B::zero_value())
    }
}

/// Implements [`ZeroValue`] as `Default::default()` for response types.
macro_rules! zero_value_via_default {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::core::ZeroValue for $ty {
                fn zero_value() -> Self {
                    <$ty as Default>::default()
                }
            }
        )+
    };
}
pub(crate) use zero_value_via_default;

// ============================================================================
// Outcome pairs
// ============================================================================

/// Splits an operation result into the `(value, error)` pair shape.
///
/// On error the value half is the output's [`ZeroValue`], so a rejected call
/// reads exactly like an uninitialized result.
pub trait OutcomeExt<T> {
    fn into_parts(self) -> (T, Option<PersistenceError>);
}

impl<T: ZeroValue> OutcomeExt<T> for Result<T> {
    fn into_parts(self) -> (T, Option<PersistenceError>) {
        match self {
            Ok(value) => (value, None),
            Err(err) => (T::zero_value(), Some(err)),
        }
    }
}
