use crate::DerefError;

// -----------------------------------------------------------------------------
// Construction

/// Wraps `v` in a non-empty optional.
///
/// Useful for filling optional fields from literals in a single expression.
///
/// # Examples
///
/// ```
/// use ptrkit_core::to;
///
/// let name = to("Alice");
/// let age = to(30);
///
/// assert_eq!(name, Some("Alice"));
/// assert_eq!(age, Some(30));
/// ```
#[inline(always)]
pub const fn to<T>(v: T) -> Option<T> {
    Some(v)
}

// -----------------------------------------------------------------------------
// Extraction

/// Returns the held value, or the zero value of `T` if `p` is empty.
///
/// # Examples
///
/// ```
/// use ptrkit_core::{from, to};
///
/// assert_eq!(from(to(42)), 42);
/// assert_eq!(from::<i32>(None), 0);
/// assert_eq!(from::<String>(None), "");
/// ```
#[inline]
pub fn from<T: Default>(p: Option<T>) -> T {
    p.unwrap_or_default()
}

/// Returns the held value, or `default` if `p` is empty.
///
/// # Examples
///
/// ```
/// use ptrkit_core::{from_or, to};
///
/// let port = to(8080);
/// let timeout: Option<u32> = None;
///
/// assert_eq!(from_or(port, 3000), 8080);
/// assert_eq!(from_or(timeout, 30), 30);
/// ```
#[inline]
pub fn from_or<T>(p: Option<T>, default: T) -> T {
    p.unwrap_or(default)
}

/// Another name for [`from_or`].
#[inline]
pub fn get_or<T>(p: Option<T>, default: T) -> T {
    from_or(p, default)
}

/// Returns the held value, or the result of `f` if `p` is empty.
///
/// `f` is only called when `p` is empty.
#[inline]
pub fn from_or_else<T>(p: Option<T>, f: impl FnOnce() -> T) -> T {
    p.unwrap_or_else(f)
}

/// Returns the held value.
///
/// Use this only where an empty optional is a programming error, never for
/// values that come from outside the program. See [`try_from`] for the
/// fallible form.
///
/// # Panics
///
/// Panics with a [`DerefError`] if `p` is empty. The error is also logged at
/// `error` level before the panic.
///
/// # Examples
///
/// ```
/// use ptrkit_core::{must_from, to};
///
/// assert_eq!(must_from(to("hello")), "hello");
/// ```
///
/// ```should_panic
/// use ptrkit_core::must_from;
///
/// must_from::<String>(None); // panics
/// ```
#[inline]
pub fn must_from<T>(p: Option<T>) -> T {
    match p {
        Some(v) => v,
        None => DerefError::new::<T>().handle_error(),
    }
}

/// Returns the held value, or a [`DerefError`] if `p` is empty.
///
/// # Examples
///
/// ```
/// use ptrkit_core::{to, try_from};
///
/// assert_eq!(try_from(to(7_u8)), Ok(7));
/// assert!(try_from::<u8>(None).is_err());
/// ```
#[inline]
pub fn try_from<T>(p: Option<T>) -> Result<T, DerefError> {
    p.ok_or_else(DerefError::new::<T>)
}

// -----------------------------------------------------------------------------
// Inspection

/// Returns an independent copy of `p`.
///
/// The copy is shallow: it is whatever [`Clone`] does for `T`, so shared
/// handles inside `T` (`Rc`, `Arc`, references) keep pointing at the same data.
///
/// # Examples
///
/// ```
/// use ptrkit_core::{duplicate, set, to};
///
/// let mut original = to(42);
/// let copy = duplicate(&original);
///
/// set(&mut original, 100);
/// assert_eq!(copy, Some(42));
/// assert_eq!(duplicate::<i32>(&None), None);
/// ```
#[inline]
pub fn duplicate<T: Clone>(p: &Option<T>) -> Option<T> {
    p.clone()
}

/// Returns `true` if `p` is empty.
#[inline]
pub const fn is_empty<T>(p: &Option<T>) -> bool {
    p.is_none()
}

/// Compares the held values of two optionals.
///
/// Two empty optionals are equal; an empty and a non-empty one never are.
///
/// # Examples
///
/// ```
/// use ptrkit_core::{equal, to};
///
/// assert!(equal(&to(42), &to(42)));
/// assert!(!equal(&to(42), &to(43)));
/// assert!(!equal(&to(0), &None));
/// assert!(equal::<i32>(&None, &None));
/// ```
#[inline]
pub fn equal<T: PartialEq>(a: &Option<T>, b: &Option<T>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    extern crate alloc;

    use super::*;
    use alloc::rc::Rc;
    use alloc::string::{String, ToString};
    use core::cell::Cell;
    use core::time::Duration;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Color {
        r: u8,
        g: u8,
        b: u8,
    }

    #[test]
    fn to_then_from() {
        assert_eq!(from(to(42)), 42);
        assert_eq!(from(to("hello".to_string())), "hello");
        assert_eq!(from(to(3.5_f64)), 3.5);
        assert!(from(to(true)));
        assert_eq!(from(to(Color { r: 255, g: 0, b: 0 })).r, 255);
    }

    #[test]
    fn from_empty_is_zero() {
        assert_eq!(from::<i32>(None), 0);
        assert_eq!(from::<String>(None), "");
        assert_eq!(from::<f64>(None), 0.0);
        assert!(!from::<bool>(None));
        assert_eq!(from::<char>(None), '\0');
        assert_eq!(from::<Duration>(None), Duration::ZERO);
        assert_eq!(from::<Color>(None), Color::default());
    }

    #[test]
    fn empty_is_not_zero() {
        assert_ne!(to(0), None);
        assert!(!is_empty(&to(0)));
        assert!(is_empty::<i32>(&None));
    }

    #[test]
    fn from_or_fallbacks() {
        assert_eq!(from_or(to("hello"), "default"), "hello");
        assert_eq!(from_or(None, "default"), "default");
        assert_eq!(get_or(to(42), 100), 42);
        assert_eq!(get_or(None, 100), 100);

        // Zero is a real value and must not be replaced.
        assert_eq!(from_or(to(0), 7), 0);
    }

    #[test]
    fn from_or_else_is_lazy() {
        let calls = Cell::new(0);
        let fallback = || {
            calls.set(calls.get() + 1);
            9
        };

        assert_eq!(from_or_else(to(1), fallback), 1);
        assert_eq!(calls.get(), 0);
        assert_eq!(from_or_else(None, fallback), 9);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn must_from_present() {
        assert_eq!(must_from(to("hello")), "hello");
        assert_eq!(must_from(to(0)), 0);
    }

    #[test]
    #[should_panic(expected = "invalid dereference of an empty `Option<i32>`")]
    fn must_from_empty_panics() {
        must_from::<i32>(None);
    }

    #[test]
    fn try_from_reports_type() {
        assert_eq!(try_from(to(5)), Ok(5));

        let err = try_from::<u16>(None).unwrap_err();
        assert_eq!(err.type_name(), "u16");
    }

    #[test]
    fn equal_cases() {
        assert!(equal::<i32>(&None, &None));
        assert!(!equal(&None, &to(1)));
        assert!(!equal(&to(1), &None));
        assert!(equal(&to(1), &to(1)));
        assert!(!equal(&to(1), &to(2)));
        assert!(equal(
            &to(Color { r: 255, g: 0, b: 0 }),
            &to(Color { r: 255, g: 0, b: 0 })
        ));
    }

    #[test]
    fn duplicate_is_independent() {
        assert_eq!(duplicate::<i32>(&None), None);

        let mut original = to(Color { r: 0, g: 0, b: 255 });
        let copy = duplicate(&original);
        assert_eq!(copy, original);

        if let Some(color) = original.as_mut() {
            color.r = 128;
        }
        assert_eq!(copy, to(Color { r: 0, g: 0, b: 255 }));
        assert_eq!(original.map(|c| c.r), Some(128));
    }

    #[test]
    fn duplicate_is_shallow() {
        let shared = Rc::new(Cell::new(1));
        let original = to(Rc::clone(&shared));
        let copy = duplicate(&original);

        shared.set(2);
        assert_eq!(copy.as_ref().map(|c| c.get()), Some(2));
        assert_eq!(Rc::strong_count(&shared), 3);

        drop(copy);
        assert_eq!(Rc::strong_count(&shared), 2);
    }
}
