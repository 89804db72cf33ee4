//! Raw request codec module for encoding and decoding HTTP/1.1 request text
//!
//! # Architecture
//!
//! - [`RequestEncoder`]: serializes a request into raw text
//! - [`RequestDecoder`]: parses raw text into a request built by the injected factories
//! - [`RawRequestCodec`]: the transcoder combining both, also usable as a
//!   `tokio_util` codec inside `FramedRead`/`FramedWrite`
//!
//! # Example
//!
//! ```
//! use raw_request::codec::RawRequestCodec;
//! use raw_request::protocol::{BytesStream, Request, ServerRequest};
//!
//! let codec = RawRequestCodec::new();
//! let mut request = Request::new("POST", "/form")
//!     .with_added_header("Content-Type", "application/x-www-form-urlencoded")
//!     .with_body(BytesStream::from("a=1&b=2"));
//!
//! let raw = codec.serialize(&mut request);
//! let decoded = codec.deserialize(&raw);
//!
//! let form = decoded.parsed_body().unwrap();
//! assert_eq!(form.text("a"), Some("1"));
//! assert_eq!(form.text("b"), Some("2"));
//! ```
//!
//! # Limitations
//!
//! - No chunked transfer-coding, the body is whatever follows the blank line
//! - A body is cut at its last CRLF when parsed back
//! - `multipart/form-data` bodies are not split into parts

mod raw_codec;
mod request_decoder;
mod request_encoder;

pub use raw_codec::RawRequestCodec;
pub use request_decoder::RequestDecoder;
pub use request_encoder::RequestEncoder;
