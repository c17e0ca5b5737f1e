//! Serde helpers for optional fields.
//!
//! [`is_empty`](crate::is_empty) and [`is_zero`](crate::is_zero) take
//! `&Option<T>` and work as `skip_serializing_if` predicates as they are.
//! This module adds the decode side.
//!
//! # Examples
//!
//! ```
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct User {
//!     name: String,
//!     #[serde(default, skip_serializing_if = "ptrkit_core::is_empty")]
//!     email: Option<String>,
//!     #[serde(
//!         default,
//!         skip_serializing_if = "ptrkit_core::is_zero",
//!         deserialize_with = "ptrkit_core::serde::deserialize_non_zero"
//!     )]
//!     age: Option<u32>,
//! }
//!
//! let bob = User { name: "Bob".into(), email: None, age: Some(0) };
//! assert_eq!(serde_json::to_string(&bob).unwrap(), r#"{"name":"Bob"}"#);
//!
//! let alice: User = serde_json::from_str(r#"{"name":"Alice","age":0}"#).unwrap();
//! assert_eq!(alice.age, None);
//! ```

use serde_core::{Deserialize, Deserializer};

use crate::non_zero;

/// Decodes an `Option<T>`, turning a decoded zero value into `None`.
///
/// Use with `#[serde(default, deserialize_with = "...")]` so that a missing
/// field also decodes as `None`.
pub fn deserialize_non_zero<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default + PartialEq,
{
    Ok(Option::<T>::deserialize(deserializer)?.and_then(non_zero))
}

// -----------------------------------------------------------------------------
// Tests
