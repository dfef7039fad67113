//! Records: structs and tuples compared field by field

use crate::Structural;

/// Implement [`Structural`] for a struct from an explicit list of
/// comparable fields.
///
/// Only the listed fields take part in the comparison. Fields left out of
/// the list never affect the verdict, and a record with an empty list
/// matches any other value of its type. Tuple structs list field indices.
///
/// ```
/// use respmatch_core::{matches, structural_record};
///
/// struct Reading {
///     sensor: String,
///     values: Vec<u32>,
///     received_at: u64,
/// }
///
/// structural_record!(Reading { sensor, values });
///
/// let expected = Reading { sensor: "t1".into(), values: vec![1, 2], received_at: 10 };
/// let actual = Reading { sensor: "t1".into(), values: vec![2, 1], received_at: 99 };
/// assert!(matches(&expected, &actual));
/// ```
///
/// Generic structs name their type parameters up front; each one is
/// required to be [`Structural`]:
///
/// ```
/// use respmatch_core::{matches_same, structural_record};
///
/// struct Pair<T>(T, T);
///
/// structural_record!(impl<T> Pair<T> { 0, 1 });
///
/// assert!(matches_same(&Pair(vec![1, 2], vec![3]), &Pair(vec![2, 1], vec![3])));
/// ```
#[macro_export]
macro_rules! structural_record {
    (impl<$($gen:ident),+ $(,)?> $ty:ty { $($field:tt),* $(,)? }) => {
        impl<$($gen: $crate::Structural),+> $crate::Structural for $ty {
            #[allow(unused_variables)]
            fn structurally_matches(&self, actual: &Self) -> bool {
                true $(&& $crate::Structural::structurally_matches(&self.$field, &actual.$field))*
            }
        }
    };
    ($ty:ty { $($field:tt),* $(,)? }) => {
        impl $crate::Structural for $ty {
            #[allow(unused_variables)]
            fn structurally_matches(&self, actual: &Self) -> bool {
                true $(&& $crate::Structural::structurally_matches(&self.$field, &actual.$field))*
            }
        }
    };
}

impl Structural for () {
    fn structurally_matches(&self, _actual: &Self) -> bool {
        true
    }
}

macro_rules! tuple_record {
    ($(($($name:ident $idx:tt),+)),+ $(,)?) => {
        $(
            impl<$($name: Structural),+> Structural for ($($name,)+) {
                fn structurally_matches(&self, actual: &Self) -> bool {
                    $(self.$idx.structurally_matches(&actual.$idx))&&+
                }
            }
        )+
    };
}

tuple_record! {
    (A 0),
    (A 0, B 1),
    (A 0, B 1, C 2),
    (A 0, B 1, C 2, D 3),
    (A 0, B 1, C 2, D 3, E 4),
    (A 0, B 1, C 2, D 3, E 4, F 5),
    (A 0, B 1, C 2, D 3, E 4, F 5, G 6),
    (A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7),
}
