//! HTTP response matching
//!
//! Decides whether an actual HTTP response matches an expected one, for
//! test assertions and for verifying replayed traffic. Status codes must be
//! equal, headers and trailers are compared with the expected-subset map
//! rule from [`respmatch_core`], and bodies are compared as JSON documents
//! when the expected body parses as JSON, byte for byte otherwise.
//!
//! # Flow
//!
//! ```text
//!   expected ─┐                        ┌─ status ── equal?
//!             ├─► matches_response ────┼─ headers ─ Structural
//!   actual ───┘                        ├─ bodies ── read once each
//!                                      ├─ trailers ─ Structural
//!                                      └─ bodies ── JSON or raw bytes
//! ```
//!
//! ```
//! use http::StatusCode;
//! use respmatch_http::{matches_response, RecordedResponse};
//!
//! let mut expected = RecordedResponse::new(StatusCode::OK).body(r#"{"ids": [1, 2]}"#);
//! let mut actual = RecordedResponse::new(StatusCode::OK).body(r#"{"ids": [2, 1]}"#);
//! assert!(matches_response(&mut expected, &mut actual));
//! ```

mod body;
mod error;
mod matcher;
mod recorded;
mod snapshot;

pub use body::{bodies_match, capture_body, Body};
pub use error::{BodyError, BodyResult};
pub use matcher::matches_response;
pub use recorded::RecordedResponse;
pub use snapshot::{ResponseSnapshot, Trailers};

pub use respmatch_core::{matches, Structural};
