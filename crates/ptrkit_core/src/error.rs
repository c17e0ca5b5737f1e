use core::any::type_name;

use thiserror::Error;

// -----------------------------------------------------------------------------
// Error

/// An empty optional was dereferenced where a value was required.
///
/// This is the only failure in the crate. It is returned by
/// [`try_from`](crate::try_from) and raised as a panic by
/// [`must_from`](crate::must_from).
///
/// # Examples
///
/// ```
/// use ptrkit_core::{DerefError, try_from};
///
/// let err: DerefError = try_from::<u32>(None).unwrap_err();
/// assert_eq!(err.type_name(), "u32");
/// assert_eq!(err.to_string(), "invalid dereference of an empty `Option<u32>`");
/// ```
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("invalid dereference of an empty `Option<{type_name}>`")]
pub struct DerefError {
    type_name: &'static str,
}

impl DerefError {
    /// Creates the error for an empty `Option<T>`.
    #[inline]
    pub fn new<T: ?Sized>() -> Self {
        Self {
            type_name: type_name::<T>(),
        }
    }

    /// The name of the type the empty optional would have held.
    #[inline]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Logs this error at `error` level, then panics with it.
    #[cold]
    #[inline(never)]
    pub fn handle_error(&self) -> ! {
        log::error!("{self}");
        panic!("{self}");
    }
}

// -----------------------------------------------------------------------------
// Tests
