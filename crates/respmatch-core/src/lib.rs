//! Structural matching for arbitrary values
//!
//! This crate decides whether an *expected* value matches an *actual* value
//! under rules looser than `PartialEq`:
//!
//! - sequences match regardless of element order, but multiplicity counts
//! - maps are compared only on the keys present in the expected map
//! - records are compared only on their declared comparable fields
//! - optional values match when both are absent or both present and matching
//! - everything else is compared by primitive equality
//!
//! The result is always a plain `bool`. Nothing here reports *where* two
//! values differ.
//!
//! ```
//! use respmatch_core::matches;
//!
//! assert!(matches(&vec![1, 2, 2], &vec![2, 1, 2]));
//! assert!(!matches(&vec![1, 2, 2], &vec![1, 2, 3]));
//! assert!(!matches(&1i64, &"1"));
//! ```

use std::any::Any;

#[cfg(feature = "http")]
mod http_types;
#[cfg(feature = "indexmap")]
mod index_map;
mod json;
mod map;
mod record;
mod scalar;
mod sequence;
mod wrappers;

pub use map::match_map_entries;
pub use sequence::match_unordered;

/// A value that can be structurally compared against another value of the
/// same type.
///
/// Implementations exist for scalars, sequences, maps, `Option`, smart
/// pointers, tuples and `serde_json::Value`. Structs opt in with
/// [`structural_record!`], which names the fields that take part in the
/// comparison.
pub trait Structural {
    /// Returns `true` when `actual` matches `self`, with `self` as the expected side.
    fn structurally_matches(&self, actual: &Self) -> bool;
}

/// Match two values of possibly different types.
///
/// Operands of different types never match. Otherwise this is
/// [`Structural::structurally_matches`] with `expected` as the receiver.
pub fn matches<E, A>(expected: &E, actual: &A) -> bool
where
    E: Structural + Any,
    A: Any,
{
    match (actual as &dyn Any).downcast_ref::<E>() {
        Some(actual) => expected.structurally_matches(actual),
        None => false,
    }
}

/// Match two values of the same, possibly borrowed or unsized, type.
pub fn matches_same<T>(expected: &T, actual: &T) -> bool
where
    T: Structural + ?Sized,
{
    expected.structurally_matches(actual)
}

/// Assert that `actual` structurally matches `expected`.
///
/// On failure both operands are printed with their `Debug` representation.
///
/// ```
/// use respmatch_core::assert_structural_match;
/// use serde_json::json;
///
/// assert_structural_match!(json!({"a": [1, 2]}), json!({"a": [2, 1], "b": true}));
/// ```
#[macro_export]
macro_rules! assert_structural_match {
    ($expected:expr, $actual:expr $(,)?) => {{
        let expected = &$expected;
        let actual = &$actual;
        if !$crate::matches_same(expected, actual) {
            panic!(
                "values do not match structurally\nexpected: {:?}\n  actual: {:?}",
                expected, actual
            );
        }
    }};
    ($expected:expr, $actual:expr, $($arg:tt)+) => {{
        let expected = &$expected;
        let actual = &$actual;
        if !$crate::matches_same(expected, actual) {
            panic!(
                "values do not match structurally: {}\nexpected: {:?}\n  actual: {:?}",
                format_args!($($arg)+),
                expected,
                actual
            );
        }
    }};
}
