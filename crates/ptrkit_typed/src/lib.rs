//! Named helpers for concrete types, generated over the `ptrkit` generic core.
//!
//! Every type gets the same seven functions. For `i32`:
//!
//! | function | generic equivalent |
//! |---|---|
//! | `i32(v)` | [`to`](ptrkit_core::to) |
//! | `to_i32(p)` | [`from`](ptrkit_core::from) |
//! | `must_i32(p)` | [`must_from`](ptrkit_core::must_from) |
//! | `i32_vec(vs)` / `to_i32_vec(ps)` | [`to_vec`] / [`from_vec`] |
//! | `i32_map(m)` / `to_i32_map(m)` | [`to_map`] / [`from_map`], keyed by `String` |
//!
//! Covered types: `String`, every signed and unsigned integer (including
//! `isize`/`usize`), `f32`, `f64`, `bool`, `char`, byte (`u8` under the `byte`
//! names), [`Duration`](core::time::Duration), `SystemTime` (with the `std`
//! feature; its zero value is `UNIX_EPOCH`), and the complex numbers
//! [`Complex32`] and [`Complex64`].
//!
//! # Examples
//!
//! ```
//! use ptrkit_typed::{i32, must_string, string, to_i32, to_i32_vec, to_string};
//!
//! let name = string("Alice".to_string());
//! let age = i32(30);
//!
//! assert_eq!(to_string(name.clone()), "Alice");
//! assert_eq!(to_i32(age), 30);
//! assert_eq!(to_i32(None), 0);
//! assert_eq!(must_string(name), "Alice");
//!
//! let ages = to_i32_vec(Some(vec![Some(25), None]));
//! assert_eq!(ages, Some(vec![25, 0]));
//! ```
//!
//! [`to_vec`]: ptrkit_collections::to_vec
//! [`from_vec`]: ptrkit_collections::from_vec
//! [`to_map`]: ptrkit_collections::to_map
//! [`from_map`]: ptrkit_collections::from_map
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// No STD Support

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

// -----------------------------------------------------------------------------
// Modules

#[macro_use]
mod macros;

mod complex;
mod primitive;
mod time;

// -----------------------------------------------------------------------------
// Top-level exports

pub use complex::*;
pub use primitive::*;
pub use time::*;

pub use num_complex::{Complex32, Complex64};
