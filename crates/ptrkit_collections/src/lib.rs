//! Conversions between collections of values and collections of optionals.
//!
//! **Sequences**
//!
//! [`to_vec`] turns `Vec<T>` into `Vec<Option<T>>` and [`from_vec`] goes back,
//! reading empty elements as the zero value of `T`.
//!
//! **Mappings**
//!
//! [`to_map`] and [`from_map`] do the same for [`hashbrown`] maps, keeping the
//! exact key set and the hasher of the input. [`HashMap`] is the default map
//! type, hashed with a fixed-seed [`foldhash`] state.
//!
//! A missing collection (`None`) stays missing, and an empty collection stays
//! empty. Going from optionals to values and back is not a round trip: every
//! element comes back non-empty.
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// No STD Support

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod map;
mod vec;

pub mod hash;

// -----------------------------------------------------------------------------
// Top-level exports

pub use hash::{FixedHashState, HashMap};
pub use map::{from_map, from_map_or, to_map};
pub use vec::{from_vec, from_vec_or, to_vec};

// -----------------------------------------------------------------------------
// Re-export crates

pub use foldhash;
pub use hashbrown;
