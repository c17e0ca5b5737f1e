//! The default map type used by the mapping conversions.
//!
//! [`FixedHashState`] is based on `foldhash` with a fixed seed, so hashes (and
//! therefore iteration order) only depend on the inserted keys.

use core::hash::BuildHasher;

use foldhash::fast::{FixedState, FoldHasher};

// -----------------------------------------------------------------------------
// FixedHashState

const MAP_SEED: FixedState = FixedState::with_seed(0x6A09E667F3BCC908);

/// The default hash state of the typed mapping conversions.
///
/// A key hashes the same way in every map and every run, so converting the
/// same input twice gives maps that iterate in the same order.
///
/// # Examples
///
/// ```
/// use ptrkit_collections::{HashMap, to_map};
///
/// let convert = || {
///     let values: HashMap<String, i32> = (0..8).map(|i| (i.to_string(), i)).collect();
///     to_map(Some(values)).unwrap()
/// };
///
/// assert!(convert().keys().eq(convert().keys()));
/// ```
#[derive(Copy, Clone, Default, Debug)]
pub struct FixedHashState;

impl BuildHasher for FixedHashState {
    type Hasher = FoldHasher<'static>;

    #[inline]
    fn build_hasher(&self) -> Self::Hasher {
        MAP_SEED.build_hasher()
    }
}

// -----------------------------------------------------------------------------
// HashMap

/// A [`hashbrown::HashMap`] using [`FixedHashState`] by default.
///
/// # Examples
///
/// ```
/// use ptrkit_collections::HashMap;
///
/// let mut map: HashMap<String, i32> = HashMap::default();
/// map.insert("a".to_string(), 1);
/// assert_eq!(map.get("a"), Some(&1));
/// ```
pub type HashMap<K, V, S = FixedHashState> = hashbrown::HashMap<K, V, S>;

// -----------------------------------------------------------------------------
// Tests
