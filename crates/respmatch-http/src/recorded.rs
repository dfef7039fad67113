//! Owned response snapshots for fixtures and replay

use crate::snapshot::ResponseSnapshot;
use bytes::Bytes;
use http::header::{HeaderMap, HeaderValue, IntoHeaderName};
use http::StatusCode;
use serde_json::Value;
use std::io::{self, Cursor, Read};

/// A fully materialized response: status, headers, trailers and a body that
/// can be read once.
#[derive(Debug)]
pub struct RecordedResponse {
    status: StatusCode,
    headers: HeaderMap,
    trailers: HeaderMap,
    body: RecordedBody,
}

#[derive(Debug)]
enum RecordedBody {
    Bytes(Cursor<Bytes>),
    /// Every read fails with this kind
    Unreadable(io::ErrorKind),
}

impl Read for RecordedBody {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            RecordedBody::Bytes(cursor) => cursor.read(buf),
            // Readers retry `Interrupted`, so it is reported as `Other`
            // to keep the failure terminal.
            RecordedBody::Unreadable(io::ErrorKind::Interrupted) => Err(io::Error::new(
                io::ErrorKind::Other,
                "recorded body is unreadable (interrupted)",
            )),
            RecordedBody::Unreadable(kind) => {
                Err(io::Error::new(*kind, "recorded body is unreadable"))
            }
        }
    }
}

impl RecordedResponse {
    /// An empty response with the given status
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            trailers: HeaderMap::new(),
            body: RecordedBody::Bytes(Cursor::new(Bytes::new())),
        }
    }

    /// Append a header value, keeping earlier values for the same name
    pub fn header<K: IntoHeaderName>(mut self, name: K, value: HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }

    /// Append a trailer value, keeping earlier values for the same name
    pub fn trailer<K: IntoHeaderName>(mut self, name: K, value: HeaderValue) -> Self {
        self.trailers.append(name, value);
        self
    }

    /// Replace the body with the given bytes
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = RecordedBody::Bytes(Cursor::new(body.into()));
        self
    }

    /// Use the serialized form of a JSON document as the body
    pub fn json(self, value: &Value) -> Self {
        self.body(value.to_string())
    }

    /// Make every body read fail with `kind`.
    ///
    /// `io::ErrorKind::Interrupted` is surfaced as `io::ErrorKind::Other`,
    /// since readers would retry it forever.
    pub fn unreadable_body(mut self, kind: io::ErrorKind) -> Self {
        self.body = RecordedBody::Unreadable(kind);
        self
    }
}

impl ResponseSnapshot for RecordedResponse {
    fn status(&self) -> StatusCode {
        self.status
    }

    fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    fn trailers(&self) -> Option<&HeaderMap> {
        Some(&self.trailers)
    }

    fn body_reader(&mut self) -> &mut dyn Read {
        &mut self.body
    }
}
