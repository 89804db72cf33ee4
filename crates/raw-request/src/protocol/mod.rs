//! Request model used on both sides of the codec.
//!
//! # Components
//!
//! - **Requests** ([`request`]): the [`ServerRequest`] trait, the default
//!   [`Request`] value and the [`RequestFactory`] that creates base requests
//! - **Headers** ([`header`]): ordered, case-insensitive [`Headers`]
//! - **Bodies** ([`stream`]): read-once [`ByteStream`] bodies created by a
//!   [`StreamFactory`]
//! - **Form data** ([`form`]): [`FormData`] decoded from form-urlencoded bodies
//! - **Interop**: conversions between [`Request`] and `http::Request`
//! - **Errors** ([`error`]): [`ConvertError`] and [`CodecError`]
//!
//! Collaborators are traits so that callers can bring their own request or
//! body representation, the crate ships a default for each.

mod request;
pub use request::DefaultRequestFactory;
pub use request::Request;
pub use request::RequestFactory;
pub use request::ServerRequest;
pub use request::DEFAULT_PROTOCOL_VERSION;

mod header;
pub use header::Headers;
pub use header::HEADER_VALUE_SEPARATOR;

mod stream;
pub use stream::ByteStream;
pub use stream::BytesStream;
pub use stream::BytesStreamFactory;
pub use stream::StreamFactory;

mod form;
pub use form::FormData;
pub use form::FormValue;

mod convert;

mod error;
pub use error::CodecError;
pub use error::ConvertError;
