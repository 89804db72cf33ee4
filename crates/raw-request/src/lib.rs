//! Conversion between HTTP requests and their raw HTTP/1.1 text
//!
//! This crate turns an in-memory request into the text that would travel on
//! the wire, and parses such text back into a request:
//!
//! ```text
//! GET /foo HTTP/1.1\r\n
//! Host:example.com\r\n
//! \r\n
//! hello
//! ```
//!
//! # Example
//!
//! ```
//! use raw_request::codec::RawRequestCodec;
//! use raw_request::protocol::{ByteStream, BytesStream, Request, ServerRequest};
//!
//! let codec = RawRequestCodec::new();
//!
//! let mut request = Request::new("GET", "/foo")
//!     .with_added_header("Host", "example.com")
//!     .with_body(BytesStream::from("hello"));
//! let raw = codec.serialize(&mut request);
//! assert_eq!(raw, "GET /foo HTTP/1.1\r\nHost:example.com\r\n\r\nhello");
//!
//! let mut parsed = codec.deserialize(&raw);
//! assert_eq!(parsed.target(), Some("/foo"));
//! assert_eq!(parsed.body_mut().contents(), "hello");
//! ```
//!
//! # Architecture
//!
//! - [`codec`]: the [`codec::RawRequestCodec`] transcoder with its encoder and decoder
//! - [`protocol`]: request model, headers, body streams, form data and errors
//!
//! # Leniency
//!
//! Parsing never fails. Whatever cannot be recognized is left out: a missing
//! method, target or version is `None`, a header line without a colon is
//! skipped. Nothing is validated against the HTTP grammar, use the
//! `TryFrom<Request> for http::Request<Bytes>` conversion when validated
//! types are needed.
//!
//! # Limitations
//!
//! - HTTP/1.1 text only, no HTTP/2 or HTTP/3 framing
//! - No chunked transfer-coding and no streaming, bodies are buffered strings
//! - Multipart bodies are recognized by content type but not parsed

pub mod codec;
pub mod protocol;
