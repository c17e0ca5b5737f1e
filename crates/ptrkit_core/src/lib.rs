//! This crate provides the generic core of `ptrkit`: helpers that build, read
//! and combine optional values.
//!
//! An optional value is a plain [`Option<T>`]. `Some(v)` holds exactly one value
//! and `None` is *empty*, which stays distinguishable from the type's zero value
//! (`Some(0)` is not `None`). The zero value of a type is its [`Default`].
//!
//! **Construction and extraction**
//!
//! [`to`] wraps a value, [`from`] reads it back (falling back to the zero value),
//! [`from_or`] falls back to a caller supplied value and [`must_from`] treats an
//! empty optional as a programming error. [`try_from`] is the non-panicking
//! form of `must_from`.
//!
//! **Combinators**
//!
//! [`map`], [`filter`], [`flat_map`], [`coalesce`] and [`or`] transform or select
//! optionals. [`set`], [`modify`], [`apply`] and [`swap`] act on the held value in
//! place and never populate an empty optional. [`non_zero`] and [`is_zero`]
//! treat the zero value as "absent".
//!
//! Read-only predicates take `&Option<T>`, so they can be used directly as serde
//! `skip_serializing_if` functions.
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Modules

mod combinators;
mod error;
mod value;

#[cfg(feature = "serde")]
pub mod serde;

// -----------------------------------------------------------------------------
// Top-level exports

pub use combinators::{apply, is_zero, modify, non_zero, set, swap};
pub use combinators::{bind, coalesce, filter, flat_map, map, or};
pub use error::DerefError;
pub use value::{duplicate, equal, is_empty};
pub use value::{from, from_or, from_or_else, get_or, must_from, to, try_from};
