use core::mem;

// -----------------------------------------------------------------------------
// Transformation

/// Applies `f` to the held value and wraps the result.
///
/// Returns `None` without calling `f` if `p` is empty.
///
/// # Examples
///
/// ```
/// use ptrkit_core::{map, to};
///
/// let name = to("Alice");
/// assert_eq!(map(name, str::len), Some(5));
/// assert_eq!(map(None::<&str>, str::len), None);
/// ```
#[inline]
pub fn map<T, R>(p: Option<T>, f: impl FnOnce(T) -> R) -> Option<R> {
    p.map(f)
}

/// Keeps `p` only if its value satisfies `pred`.
///
/// `pred` is not called for an empty optional.
///
/// # Examples
///
/// ```
/// use ptrkit_core::{filter, to};
///
/// assert_eq!(filter(to(42), |v| *v > 40), Some(42));
/// assert_eq!(filter(to(42), |v| *v > 50), None);
/// ```
#[inline]
pub fn filter<T>(p: Option<T>, pred: impl FnOnce(&T) -> bool) -> Option<T> {
    p.filter(pred)
}

/// Chains `p` through `f`, which itself may produce an empty optional.
///
/// The result of `f` is returned as is, never wrapped twice. `f` is not
/// called for an empty optional.
///
/// # Examples
///
/// ```
/// use ptrkit_core::{flat_map, to};
///
/// let parse = |s: &str| s.parse::<i32>().ok();
///
/// assert_eq!(flat_map(to("42"), parse), Some(42));
/// assert_eq!(flat_map(to("invalid"), parse), None);
/// ```
#[inline]
pub fn flat_map<T, R>(p: Option<T>, f: impl FnOnce(T) -> Option<R>) -> Option<R> {
    p.and_then(f)
}

/// Another name for [`flat_map`].
#[inline]
pub fn bind<T, R>(p: Option<T>, f: impl FnOnce(T) -> Option<R>) -> Option<R> {
    flat_map(p, f)
}

// -----------------------------------------------------------------------------
// Selection

/// Returns the first non-empty candidate, or `None` if there is none.
///
/// Candidates are pulled in order and iteration stops at the first hit, so a
/// lazy iterator only evaluates what it needs.
///
/// # Examples
///
/// ```
/// use ptrkit_core::{coalesce, to};
///
/// let env_port = None;
/// let file_port = None;
/// let default_port = to(8080);
///
/// assert_eq!(coalesce([env_port, file_port, default_port]), Some(8080));
/// assert_eq!(coalesce::<u16>([]), None);
/// ```
#[inline]
pub fn coalesce<T>(candidates: impl IntoIterator<Item = Option<T>>) -> Option<T> {
    candidates.into_iter().flatten().next()
}

/// Returns `a` if it is non-empty, otherwise `b`.
///
/// # Examples
///
/// ```
/// use ptrkit_core::{or, to};
///
/// assert_eq!(or(to("first"), to("second")), Some("first"));
/// assert_eq!(or(None, to("second")), Some("second"));
/// ```
#[inline]
pub fn or<T>(a: Option<T>, b: Option<T>) -> Option<T> {
    a.or(b)
}

// -----------------------------------------------------------------------------
// In-place mutation

/// Overwrites the held value with `value`.
///
/// Returns `true` if the value was written. An empty optional stays empty and
/// `false` is returned.
///
/// # Examples
///
/// ```
/// use ptrkit_core::{set, to};
///
/// let mut email = to("old@example.com");
/// assert!(set(&mut email, "new@example.com"));
/// assert_eq!(email, Some("new@example.com"));
///
/// let mut missing: Option<&str> = None;
/// assert!(!set(&mut missing, "new@example.com"));
/// assert_eq!(missing, None);
/// ```
#[inline]
pub fn set<T>(p: &mut Option<T>, value: T) -> bool {
    match p {
        Some(slot) => {
            *slot = value;
            true
        }
        None => false,
    }
}

/// Replaces the held value with `f(current)`.
///
/// Returns `false` without calling `f` if `p` is empty.
///
/// # Examples
///
/// ```
/// use ptrkit_core::{modify, to};
///
/// let mut p = to(5);
/// assert!(modify(&mut p, |v| v * 2));
/// assert_eq!(p, Some(10));
/// ```
#[inline]
pub fn modify<T>(p: &mut Option<T>, f: impl FnOnce(T) -> T) -> bool {
    match p.take() {
        Some(v) => {
            *p = Some(f(v));
            true
        }
        None => false,
    }
}

/// Calls `f` with the held value for its side effects.
///
/// Returns `false` without calling `f` if `p` is empty.
#[inline]
pub fn apply<T>(p: &Option<T>, f: impl FnOnce(&T)) -> bool {
    match p {
        Some(v) => {
            f(v);
            true
        }
        None => false,
    }
}

/// Exchanges the held values of `a` and `b`.
///
/// Nothing happens unless both are non-empty; in particular a value is never
/// moved into an empty optional.
///
/// # Examples
///
/// ```
/// use ptrkit_core::{swap, to};
///
/// let mut a = to(1);
/// let mut b = to(2);
/// swap(&mut a, &mut b);
/// assert_eq!((a, b), (Some(2), Some(1)));
///
/// let mut c = None;
/// swap(&mut a, &mut c);
/// assert_eq!((a, c), (Some(2), None));
/// ```
#[inline]
pub fn swap<T>(a: &mut Option<T>, b: &mut Option<T>) {
    if let (Some(a), Some(b)) = (a, b) {
        mem::swap(a, b);
    }
}

// -----------------------------------------------------------------------------
// Zero values

/// Wraps `v`, or returns `None` if `v` is the zero value of `T`.
///
/// Handy for leaving default values out of optional-field encodings.
///
/// # Examples
///
/// ```
/// use ptrkit_core::non_zero;
///
/// assert_eq!(non_zero(42), Some(42));
/// assert_eq!(non_zero(0), None);
/// assert_eq!(non_zero(""), None);
/// assert_eq!(non_zero(false), None);
/// ```
#[inline]
pub fn non_zero<T: Default + PartialEq>(v: T) -> Option<T> {
    if v == T::default() { None } else { Some(v) }
}

/// Returns `true` if `p` is empty or holds the zero value of `T`.
///
/// # Examples
///
/// ```
/// use ptrkit_core::{is_zero, to};
///
/// assert!(is_zero::<i32>(&None));
/// assert!(is_zero(&to(0)));
/// assert!(!is_zero(&to(42)));
/// ```
#[inline]
pub fn is_zero<T: Default + PartialEq>(p: &Option<T>) -> bool {
    p.as_ref().is_none_or(|v| *v == T::default())
}

// -----------------------------------------------------------------------------
// Tests
