//! Order-agnostic sequence matching

use crate::Structural;
use std::collections::{BTreeSet, HashSet, VecDeque};
use std::hash::BuildHasher;

/// Match two sequences as multisets.
///
/// Lengths must be equal. Each expected element, in order, consumes the
/// first not-yet-consumed actual element that matches it. If some expected
/// element finds no such partner the sequences do not match.
///
/// The search is greedy first-fit and costs O(n²) element comparisons in
/// the worst case.
pub fn match_unordered<'e, 'a, T>(
    expected: impl IntoIterator<Item = &'e T>,
    actual: impl IntoIterator<Item = &'a T>,
) -> bool
where
    T: Structural + ?Sized + 'e + 'a,
{
    let expected: Vec<&T> = expected.into_iter().collect();
    let actual: Vec<&T> = actual.into_iter().collect();
    if expected.len() != actual.len() {
        return false;
    }

    let mut consumed = vec![false; actual.len()];
    expected.iter().all(|want| {
        let hit = actual
            .iter()
            .enumerate()
            .find(|(idx, have)| !consumed[*idx] && T::structurally_matches(*want, **have));
        match hit {
            Some((idx, _)) => {
                consumed[idx] = true;
                true
            }
            None => false,
        }
    })
}

impl<T: Structural> Structural for [T] {
    fn structurally_matches(&self, actual: &Self) -> bool {
        match_unordered(self, actual)
    }
}

impl<T: Structural, const N: usize> Structural for [T; N] {
    fn structurally_matches(&self, actual: &Self) -> bool {
        match_unordered(self, actual)
    }
}

impl<T: Structural> Structural for Vec<T> {
    fn structurally_matches(&self, actual: &Self) -> bool {
        match_unordered(self, actual)
    }
}

impl<T: Structural> Structural for VecDeque<T> {
    fn structurally_matches(&self, actual: &Self) -> bool {
        match_unordered(self, actual)
    }
}

// Sets hold no duplicates, but their elements may still match loosely
// (e.g. records with skipped fields), so they go through the same search.
impl<T: Structural, S: BuildHasher> Structural for HashSet<T, S> {
    fn structurally_matches(&self, actual: &Self) -> bool {
        match_unordered(self, actual)
    }
}

impl<T: Structural> Structural for BTreeSet<T> {
    fn structurally_matches(&self, actual: &Self) -> bool {
        match_unordered(self, actual)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_does_not_matter() {
        assert!(match_unordered(&[1, 2, 3], &[3, 1, 2]));
    }

    #[test]
    fn test_duplicates_need_distinct_partners() {
        assert!(match_unordered(&[1, 2, 2], &[2, 1, 2]));
        assert!(!match_unordered(&[1, 2, 2], &[1, 2, 3]));
        assert!(!match_unordered(&[2, 2, 1], &[1, 1, 2]));
    }

    #[test]
    fn test_length_mismatch() {
        assert!(!match_unordered(&[1, 2], &[1, 2, 3]));
        assert!(!match_unordered(&[1, 2, 3], &[1, 2]));
    }

    #[test]
    fn test_empty_sequences() {
        let empty: [i32; 0] = [];
        assert!(match_unordered(&empty, &empty));
        assert!(Vec::<String>::new().structurally_matches(&Vec::new()));
    }

    #[test]
    fn test_nested_sequences() {
        let expected = vec![vec![1, 2], vec![3]];
        let actual = vec![vec![3], vec![2, 1]];
        assert!(expected.structurally_matches(&actual));

        let actual = vec![vec![3], vec![2, 2]];
        assert!(!expected.structurally_matches(&actual));
    }

    #[test]
    fn test_unsized_elements() {
        let expected: Vec<&str> = vec!["a", "b"];
        let actual: Vec<&str> = vec!["b", "a"];
        assert!(match_unordered(expected.iter().copied(), actual.iter().copied()));
    }

    #[test]
    fn test_deque_and_sets() {
        let expected: VecDeque<u8> = VecDeque::from(vec![1, 2, 3]);
        let actual: VecDeque<u8> = VecDeque::from(vec![3, 2, 1]);
        assert!(expected.structurally_matches(&actual));

        let expected: BTreeSet<&str> = ["x", "y"].into_iter().collect();
        let actual: BTreeSet<&str> = ["y", "x"].into_iter().collect();
        assert!(expected.structurally_matches(&actual));

        let expected: HashSet<u32> = [1, 2].into_iter().collect();
        let actual: HashSet<u32> = [1, 3].into_iter().collect();
        assert!(!expected.structurally_matches(&actual));
    }
}
