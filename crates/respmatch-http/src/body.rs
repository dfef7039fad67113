//! Response body capture and comparison

use crate::error::{BodyError, BodyResult};
use bytes::Bytes;
use respmatch_core::Structural;
use serde_json::Value;
use std::io::Read;
use tracing::{debug, trace};

/// Drain a body stream to its end.
///
/// The reader is consumed: nothing is left for a second read.
pub fn capture_body<R>(reader: &mut R) -> BodyResult<Bytes>
where
    R: Read + ?Sized,
{
    let mut buf = Vec::new();
    reader
        .read_to_end(&mut buf)
        .map_err(|source| BodyError::Read { source })?;
    Ok(Bytes::from(buf))
}

/// A captured body, interpreted
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// The body is a complete JSON document
    Json(Value),
    /// Anything else, including an empty body
    Raw(Bytes),
}

impl Body {
    /// Interpret raw bytes as JSON when they parse as a single document.
    pub fn parse(raw: &Bytes) -> Self {
        match serde_json::from_slice(raw) {
            Ok(value) => Body::Json(value),
            Err(_) => Body::Raw(raw.clone()),
        }
    }

    /// Whether the body parsed as a JSON document
    pub fn is_json(&self) -> bool {
        matches!(self, Body::Json(_))
    }
}

/// Compare two captured bodies.
///
/// The expected body decides the mode. If it is JSON, the actual body must
/// also be JSON and match it structurally. Otherwise the bodies must be
/// byte-identical.
pub fn bodies_match(expected: &Bytes, actual: &Bytes) -> bool {
    match Body::parse(expected) {
        Body::Raw(raw) => {
            trace!(len = raw.len(), "expected body is not JSON, comparing bytes");
            raw == *actual
        }
        Body::Json(want) => match serde_json::from_slice::<Value>(actual) {
            Ok(have) => want.structurally_matches(&have),
            Err(err) => {
                debug!(error = %err, "expected a JSON body, actual body does not parse");
                false
            }
        },
    }
}
