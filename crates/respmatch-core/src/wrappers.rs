//! Optional values and pointer-like wrappers

use crate::Structural;
use std::borrow::Cow;
use std::rc::Rc;
use std::sync::Arc;

impl<T: Structural> Structural for Option<T> {
    fn structurally_matches(&self, actual: &Self) -> bool {
        match (self, actual) {
            (None, None) => true,
            (Some(want), Some(have)) => want.structurally_matches(have),
            _ => false,
        }
    }
}

impl<T: Structural + ?Sized> Structural for &T {
    fn structurally_matches(&self, actual: &Self) -> bool {
        T::structurally_matches(*self, *actual)
    }
}

impl<T: Structural + ?Sized> Structural for &mut T {
    fn structurally_matches(&self, actual: &Self) -> bool {
        T::structurally_matches(&**self, &**actual)
    }
}

impl<T: Structural + ?Sized> Structural for Box<T> {
    fn structurally_matches(&self, actual: &Self) -> bool {
        T::structurally_matches(self, actual)
    }
}

impl<T: Structural + ?Sized> Structural for Rc<T> {
    fn structurally_matches(&self, actual: &Self) -> bool {
        T::structurally_matches(self, actual)
    }
}

impl<T: Structural + ?Sized> Structural for Arc<T> {
    fn structurally_matches(&self, actual: &Self) -> bool {
        T::structurally_matches(self, actual)
    }
}

impl<B> Structural for Cow<'_, B>
where
    B: Structural + ToOwned + ?Sized,
{
    fn structurally_matches(&self, actual: &Self) -> bool {
        B::structurally_matches(self, actual)
    }
}
