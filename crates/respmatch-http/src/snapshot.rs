//! The response shape the matcher reads from

use http::{HeaderMap, Response, StatusCode};
use std::io::Read;

/// Read access to the parts of an HTTP response that take part in a match.
///
/// The body is a one-shot stream: the matcher drains it exactly once and
/// never expects it to be readable again.
///
/// `http::Response<B>` implements this for any `B: Read`. Responses whose
/// body is already in memory (`Bytes`, `Vec<u8>`, `String`) are wrapped in
/// a [`std::io::Cursor`] first, e.g. `response.map(Cursor::new)`.
pub trait ResponseSnapshot {
    fn status(&self) -> StatusCode;

    fn headers(&self) -> &HeaderMap;

    /// Trailing headers, if the response carried any
    fn trailers(&self) -> Option<&HeaderMap>;

    /// The body stream
    fn body_reader(&mut self) -> &mut dyn Read;
}

/// Trailing headers attached to an [`http::Response`] as an extension.
///
/// `http::Response` has no trailer slot of its own, so callers that
/// collected trailers insert them with
/// `response.extensions_mut().insert(Trailers(map))`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trailers(pub HeaderMap);

impl<B: Read> ResponseSnapshot for Response<B> {
    fn status(&self) -> StatusCode {
        Response::status(self)
    }

    fn headers(&self) -> &HeaderMap {
        Response::headers(self)
    }

    fn trailers(&self) -> Option<&HeaderMap> {
        self.extensions().get::<Trailers>().map(|t| &t.0)
    }

    fn body_reader(&mut self) -> &mut dyn Read {
        self.body_mut()
    }
}

#[cfg(feature = "reqwest")]
impl ResponseSnapshot for reqwest::blocking::Response {
    fn status(&self) -> StatusCode {
        reqwest::blocking::Response::status(self)
    }

    fn headers(&self) -> &HeaderMap {
        reqwest::blocking::Response::headers(self)
    }

    // The blocking client does not expose trailers.
    fn trailers(&self) -> Option<&HeaderMap> {
        None
    }

    fn body_reader(&mut self) -> &mut dyn Read {
        self
    }
}
