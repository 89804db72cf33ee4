//! Request values and the factory used to build them.
//!
//! Requests follow a consume-and-return style: every `with_*` method takes the
//! request by value and hands back the updated one, so a request is never
//! changed behind the back of another owner. Reading the body is the one
//! exception, since draining a stream is inherently a mutation.

use crate::protocol::form::FormData;
use crate::protocol::header::Headers;
use crate::protocol::stream::{ByteStream, BytesStream};

/// Protocol version assigned to freshly created requests
pub const DEFAULT_PROTOCOL_VERSION: &str = "1.1";

/// Read access and consuming mutators of a server side request.
///
/// The codec works against this trait, so any request type providing these
/// operations can be serialized and produced by deserialization.
pub trait ServerRequest: Sized {
    type Body: ByteStream;

    fn method(&self) -> Option<&str>;

    /// The request target exactly as it appears on the request line.
    fn target(&self) -> Option<&str>;

    /// The protocol version without the `HTTP/` prefix, e.g. `1.1`.
    fn protocol_version(&self) -> Option<&str>;

    fn headers(&self) -> &Headers;

    /// Returns all values of `name` as one comma separated line.
    fn header_line(&self, name: &str) -> String {
        self.headers().line(name)
    }

    fn body_mut(&mut self) -> &mut Self::Body;

    fn parsed_body(&self) -> Option<&FormData>;

    #[must_use]
    fn with_protocol_version(self, version: Option<&str>) -> Self;

    #[must_use]
    fn with_body(self, body: Self::Body) -> Self;

    /// Adds `value` to the values already present under `name`.
    #[must_use]
    fn with_added_header(self, name: &str, value: &str) -> Self;

    #[must_use]
    fn with_parsed_body(self, parsed_body: FormData) -> Self;
}

/// Creates the base request the decoder fills in.
pub trait RequestFactory {
    type Request: ServerRequest;

    fn create_request(&self, method: Option<&str>, target: Option<&str>) -> Self::Request;
}

/// The default request type, holding its body as [`BytesStream`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    method: Option<String>,
    target: Option<String>,
    protocol_version: Option<String>,
    headers: Headers,
    body: BytesStream,
    parsed_body: Option<FormData>,
}

impl Request {
    /// Creates a request with an empty body, no headers and protocol version `1.1`.
    pub fn new(method: impl Into<String>, target: impl Into<String>) -> Self {
        Self::from_parts(Some(method.into()), Some(target.into()))
    }

    fn from_parts(method: Option<String>, target: Option<String>) -> Self {
        Self {
            method,
            target,
            protocol_version: Some(DEFAULT_PROTOCOL_VERSION.to_string()),
            ..Self::default()
        }
    }

    pub fn body(&self) -> &BytesStream {
        &self.body
    }
}

impl ServerRequest for Request {
    type Body = BytesStream;

    fn method(&self) -> Option<&str> {
        self.method.as_deref()
    }

    fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    fn protocol_version(&self) -> Option<&str> {
        self.protocol_version.as_deref()
    }

    fn headers(&self) -> &Headers {
        &self.headers
    }

    fn body_mut(&mut self) -> &mut Self::Body {
        &mut self.body
    }

    fn parsed_body(&self) -> Option<&FormData> {
        self.parsed_body.as_ref()
    }

    fn with_protocol_version(mut self, version: Option<&str>) -> Self {
        self.protocol_version = version.map(str::to_string);
        self
    }

    fn with_body(mut self, body: Self::Body) -> Self {
        self.body = body;
        self
    }

    /// Surrounding spaces and tabs are stripped from `value` before it is stored.
    fn with_added_header(mut self, name: &str, value: &str) -> Self {
        self.headers.append(name, value.trim_matches([' ', '\t']));
        self
    }

    fn with_parsed_body(mut self, parsed_body: FormData) -> Self {
        self.parsed_body = Some(parsed_body);
        self
    }
}

/// The default [`RequestFactory`], producing [`Request`] values.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRequestFactory;

impl RequestFactory for DefaultRequestFactory {
    type Request = Request;

    fn create_request(&self, method: Option<&str>, target: Option<&str>) -> Self::Request {
        Request::from_parts(method.map(str::to_string), target.map(str::to_string))
    }
}
