//! Response matching

use crate::body::{bodies_match, capture_body};
use crate::snapshot::ResponseSnapshot;
use http::HeaderMap;
use respmatch_core::Structural;
use tracing::debug;

/// Decide whether `actual` matches `expected`.
///
/// Steps run in order and stop at the first mismatch:
///
/// 1. status codes are equal
/// 2. every expected header is present in `actual` with the same values
///    (in any order); extra actual headers are ignored
/// 3. both bodies are drained. If either read fails, the responses match
///    only when both reads failed with the same [`std::io::ErrorKind`]
/// 4. trailers follow the header rule
/// 5. bodies match as JSON documents when the expected body is JSON,
///    byte for byte otherwise
///
/// Both bodies are consumed whenever step 3 is reached.
pub fn matches_response<E, A>(expected: &mut E, actual: &mut A) -> bool
where
    E: ResponseSnapshot + ?Sized,
    A: ResponseSnapshot + ?Sized,
{
    if expected.status() != actual.status() {
        debug!(
            expected = %expected.status(),
            actual = %actual.status(),
            "status mismatch"
        );
        return false;
    }

    if !expected.headers().structurally_matches(actual.headers()) {
        debug!("header mismatch");
        return false;
    }

    let expected_body = capture_body(expected.body_reader());
    let actual_body = capture_body(actual.body_reader());
    let (expected_body, actual_body) = match (expected_body, actual_body) {
        (Ok(expected_body), Ok(actual_body)) => (expected_body, actual_body),
        (Err(expected_err), Err(actual_err)) => {
            let same = expected_err.kind() == actual_err.kind();
            debug!(
                expected = %expected_err,
                actual = %actual_err,
                same,
                "both bodies unreadable"
            );
            return same;
        }
        (Err(err), Ok(_)) | (Ok(_), Err(err)) => {
            debug!(error = %err, "only one body could be read");
            return false;
        }
    };

    let empty = HeaderMap::new();
    let expected_trailers = expected.trailers().unwrap_or(&empty);
    let actual_trailers = actual.trailers().unwrap_or(&empty);
    if !expected_trailers.structurally_matches(actual_trailers) {
        debug!("trailer mismatch");
        return false;
    }

    let matched = bodies_match(&expected_body, &actual_body);
    if !matched {
        debug!(
            expected_len = expected_body.len(),
            actual_len = actual_body.len(),
            "body mismatch"
        );
    }
    matched
}
