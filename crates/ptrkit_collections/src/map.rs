use core::hash::{BuildHasher, Hash};

use hashbrown::HashMap;
use ptrkit_core::from_or_else;

// -----------------------------------------------------------------------------
// Values to optionals

/// Converts a map of values into a map of non-empty optionals.
///
/// The key set is preserved exactly and the output reuses the input's hasher.
/// A missing map stays missing and an empty one stays empty.
///
/// # Examples
///
/// ```
/// use ptrkit_collections::{HashMap, to_map};
///
/// let mut values: HashMap<String, i32> = HashMap::default();
/// values.insert("a".into(), 1);
///
/// let ptrs = to_map(Some(values)).unwrap();
/// assert_eq!(ptrs["a"], Some(1));
/// ```
pub fn to_map<K, T, S>(values: Option<HashMap<K, T, S>>) -> Option<HashMap<K, Option<T>, S>>
where
    K: Eq + Hash,
    S: BuildHasher + Clone,
{
    let values = values?;
    let mut ptrs = HashMap::with_capacity_and_hasher(values.len(), values.hasher().clone());
    ptrs.extend(values.into_iter().map(|(k, v)| (k, Some(v))));
    Some(ptrs)
}

// -----------------------------------------------------------------------------
// Optionals to values

/// Converts a map of optionals into a map of values.
///
/// Empty values become the zero value of `T`. The key set is preserved
/// exactly; a missing map stays missing.
///
/// # Examples
///
/// ```
/// use ptrkit_collections::{HashMap, from_map};
///
/// let mut ptrs: HashMap<String, Option<i32>> = HashMap::default();
/// ptrs.insert("a".into(), Some(1));
/// ptrs.insert("b".into(), None);
///
/// let values = from_map(Some(ptrs)).unwrap();
/// assert_eq!(values["a"], 1);
/// assert_eq!(values["b"], 0);
/// ```
pub fn from_map<K, T, S>(ptrs: Option<HashMap<K, Option<T>, S>>) -> Option<HashMap<K, T, S>>
where
    K: Eq + Hash,
    T: Default,
    S: BuildHasher + Clone,
{
    let ptrs = ptrs?;
    let mut values = HashMap::with_capacity_and_hasher(ptrs.len(), ptrs.hasher().clone());
    values.extend(ptrs.into_iter().map(|(k, p)| (k, p.unwrap_or_default())));
    Some(values)
}

/// Like [`from_map`], but empty values become a clone of `zero`.
pub fn from_map_or<K, T, S>(
    ptrs: Option<HashMap<K, Option<T>, S>>,
    zero: T,
) -> Option<HashMap<K, T, S>>
where
    K: Eq + Hash,
    T: Clone,
    S: BuildHasher + Clone,
{
    let ptrs = ptrs?;
    let mut values = HashMap::with_capacity_and_hasher(ptrs.len(), ptrs.hasher().clone());
    values.extend(ptrs.into_iter().map(|(k, p)| (k, from_or_else(p, || zero.clone()))));
    Some(values)
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::HashMap;
    use alloc::string::{String, ToString};
    use alloc::vec::Vec;
    use core::cell::Cell;
    use ptrkit_core::set;

    struct Counted<'a> {
        v: u8,
        clones: &'a Cell<usize>,
    }

    impl Clone for Counted<'_> {
        fn clone(&self) -> Self {
            self.clones.set(self.clones.get() + 1);
            Counted {
                v: self.v,
                clones: self.clones,
            }
        }
    }

    fn map_of<T>(entries: impl IntoIterator<Item = (&'static str, T)>) -> HashMap<String, T> {
        entries.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
    }

    fn sorted_keys<T>(map: &HashMap<String, T>) -> Vec<&str> {
        let mut keys: Vec<&str> = map.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    #[test]
    fn missing_stays_missing() {
        assert!(to_map(None::<HashMap<String, i32>>).is_none());
        assert!(from_map(None::<HashMap<String, Option<i32>>>).is_none());
        assert!(from_map_or(None::<HashMap<String, Option<i32>>>, 1).is_none());
    }

    #[test]
    fn empty_stays_present() {
        let ptrs = to_map(Some(map_of::<i32>([]))).unwrap();
        assert!(ptrs.is_empty());

        let values = from_map(Some(map_of::<Option<i32>>([]))).unwrap();
        assert!(values.is_empty());
    }

    #[test]
    fn to_map_wraps_every_value() {
        let ptrs = to_map(Some(map_of([("a", 1), ("b", 2), ("c", 3)]))).unwrap();
        assert_eq!(sorted_keys(&ptrs), ["a", "b", "c"]);
        assert_eq!(ptrs["a"], Some(1));
        assert_eq!(ptrs["b"], Some(2));
        assert_eq!(ptrs["c"], Some(3));
    }

    #[test]
    fn to_map_does_not_alias() {
        let mut ptrs = to_map(Some(map_of([("a", 1), ("b", 1)]))).unwrap();
        if let Some(a) = ptrs.get_mut("a") {
            assert!(set(a, 9));
        }
        assert_eq!(ptrs["a"], Some(9));
        assert_eq!(ptrs["b"], Some(1));
    }

    #[test]
    fn from_map_fills_zero() {
        let values = from_map(Some(map_of([("a", Some(1)), ("b", None)]))).unwrap();
        assert_eq!(sorted_keys(&values), ["a", "b"]);
        assert_eq!(values["a"], 1);
        assert_eq!(values["b"], 0);
    }

    #[test]
    fn from_map_or_fills_given_zero() {
        let values = from_map_or(Some(map_of([("a", Some(1)), ("b", None)])), 42).unwrap();
        assert_eq!(values["a"], 1);
        assert_eq!(values["b"], 42);
    }

    #[test]
    fn from_map_or_clones_only_for_empty() {
        let clones = Cell::new(0);
        let item = |v| Counted { v, clones: &clones };

        let ptrs = map_of([("a", Some(item(1))), ("b", None), ("c", Some(item(3)))]);
        let values = from_map_or(Some(ptrs), item(0)).unwrap();

        assert_eq!(values["a"].v, 1);
        assert_eq!(values["b"].v, 0);
        assert_eq!(values["c"].v, 3);
        assert_eq!(clones.get(), 1);
    }

    #[test]
    fn values_round_trip() {
        let values = map_of([("x", "1".to_string()), ("y", String::new())]);
        let back = from_map(to_map(Some(values.clone()))).unwrap();
        assert_eq!(back, values);
    }
}
