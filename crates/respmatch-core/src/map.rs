//! Expected-driven map matching

use crate::Structural;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// Match map entries against a lookup into the actual map.
///
/// Only keys yielded by `expected` are examined, so extra keys on the actual
/// side never cause a mismatch. A key missing from the actual map is
/// compared as `V::default()`: an expected default value and an absent key
/// are indistinguishable.
pub fn match_map_entries<'e, 'a, K, V, F>(
    expected: impl IntoIterator<Item = (&'e K, &'e V)>,
    mut lookup: F,
) -> bool
where
    K: ?Sized + 'e,
    V: Structural + Default + 'e + 'a,
    F: FnMut(&K) -> Option<&'a V>,
{
    expected.into_iter().all(|(key, want)| match lookup(key) {
        Some(have) => want.structurally_matches(have),
        None => want.structurally_matches(&V::default()),
    })
}

impl<K, V, S> Structural for HashMap<K, V, S>
where
    K: Eq + Hash,
    V: Structural + Default,
    S: BuildHasher,
{
    fn structurally_matches(&self, actual: &Self) -> bool {
        match_map_entries(self, |key| actual.get(key))
    }
}

impl<K, V> Structural for BTreeMap<K, V>
where
    K: Ord,
    V: Structural + Default,
{
    fn structurally_matches(&self, actual: &Self) -> bool {
        match_map_entries(self, |key| actual.get(key))
    }
}
