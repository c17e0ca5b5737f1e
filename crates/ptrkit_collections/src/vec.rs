use alloc::vec::Vec;

use ptrkit_core::from_or_else;

// -----------------------------------------------------------------------------
// Values to optionals

/// Converts a sequence of values into a sequence of non-empty optionals.
///
/// Order and length are preserved. A missing sequence stays missing and an
/// empty one stays empty.
///
/// # Examples
///
/// ```
/// use ptrkit_collections::to_vec;
///
/// assert_eq!(to_vec(Some(vec![25, 30])), Some(vec![Some(25), Some(30)]));
/// assert_eq!(to_vec::<i32>(Some(vec![])), Some(vec![]));
/// assert_eq!(to_vec::<i32>(None), None);
/// ```
pub fn to_vec<T>(values: Option<Vec<T>>) -> Option<Vec<Option<T>>> {
    let values = values?;
    Some(values.into_iter().map(Some).collect())
}

// -----------------------------------------------------------------------------
// Optionals to values

/// Converts a sequence of optionals into a sequence of values.
///
/// Empty elements become the zero value of `T`. Order and length are
/// preserved; a missing sequence stays missing.
///
/// # Examples
///
/// ```
/// use ptrkit_collections::from_vec;
///
/// let ptrs = vec![Some(1), None, Some(3)];
/// assert_eq!(from_vec(Some(ptrs)), Some(vec![1, 0, 3]));
/// ```
pub fn from_vec<T: Default>(ptrs: Option<Vec<Option<T>>>) -> Option<Vec<T>> {
    let ptrs = ptrs?;
    Some(ptrs.into_iter().map(Option::unwrap_or_default).collect())
}

/// Like [`from_vec`], but empty elements become a clone of `zero`.
///
/// For element types without a [`Default`] implementation, or whose zero is
/// not their default.
pub fn from_vec_or<T: Clone>(ptrs: Option<Vec<Option<T>>>, zero: T) -> Option<Vec<T>> {
    let ptrs = ptrs?;
    Some(ptrs.into_iter().map(|p| from_or_else(p, || zero.clone())).collect())
}

// -----------------------------------------------------------------------------
// Tests
