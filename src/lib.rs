#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use ptrkit_collections as collections;
pub use ptrkit_typed as typed;

// -----------------------------------------------------------------------------
// Flattened catalog

pub use ptrkit_core::*;

pub use ptrkit_collections::{FixedHashState, HashMap};
pub use ptrkit_collections::{from_map, from_map_or, to_map};
pub use ptrkit_collections::{from_vec, from_vec_or, to_vec};

pub use ptrkit_typed::*;
