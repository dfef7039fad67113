//! `IndexMap` support, enabled with the `indexmap` feature
//!
//! Insertion order is ignored, like every other map.

use crate::map::match_map_entries;
use crate::Structural;
use indexmap::IndexMap;
use std::hash::{BuildHasher, Hash};

impl<K, V, S> Structural for IndexMap<K, V, S>
where
    K: Eq + Hash,
    V: Structural + Default,
    S: BuildHasher,
{
    fn structurally_matches(&self, actual: &Self) -> bool {
        match_map_entries(self, |key| actual.get(key))
    }
}
