//! Types from the `http` crate, enabled with the `http` feature

use crate::scalar::scalar;
use crate::sequence::match_unordered;
use crate::Structural;
use bytes::Bytes;
use http::header::{HeaderMap, HeaderName, HeaderValue};
use http::{Method, StatusCode, Uri, Version};

scalar!(Bytes, StatusCode, Method, Version, Uri, HeaderName, HeaderValue);

/// A header map is a map from name to a list of values.
///
/// Every name in the expected map must be present in the actual map with
/// the same values, in any order and with the same count. Names only the
/// actual map carries are ignored.
impl<T: Structural> Structural for HeaderMap<T> {
    fn structurally_matches(&self, actual: &Self) -> bool {
        self.keys()
            .all(|name| match_unordered(self.get_all(name), actual.get_all(name)))
    }
}
