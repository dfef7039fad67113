//! Leaf values compared by primitive equality

macro_rules! scalar {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Structural for $ty {
                #[inline]
                fn structurally_matches(&self, actual: &Self) -> bool {
                    self == actual
                }
            }
        )+
    };
}

pub(crate) use scalar;

scalar!(bool, char, str, String);
scalar!(i8, i16, i32, i64, i128, isize);
scalar!(u8, u16, u32, u64, u128, usize);
scalar!(f32, f64);
