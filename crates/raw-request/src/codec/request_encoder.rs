//! Serialization of requests into raw HTTP/1.1 text
//!
//! The output follows the request message grammar:
//!
//! ```text
//! <METHOD> SP <TARGET> SP HTTP/<VERSION> CRLF
//! (<Name>:<Value> CRLF)*
//! CRLF
//! <Body>
//! ```
//!
//! One line is written per distinct header name, with all of its values
//! collapsed by [`ServerRequest::header_line`]. The header block always ends
//! with a CRLF, so a request without headers produces two consecutive CRLF
//! right after the request line.

use crate::protocol::{ByteStream, ServerRequest};

pub(crate) const CRLF: &str = "\r\n";
pub(crate) const SP: &str = " ";
pub(crate) const HTTP_PREFIX: &str = "HTTP/";

/// Initial buffer size reserved for the request line and headers
const INIT_HEAD_SIZE: usize = 1024;

/// Stateless serializer turning a [`ServerRequest`] into its wire text.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestEncoder;

impl RequestEncoder {
    /// Serializes `request`, draining its body.
    ///
    /// Absent method, target or version are written as empty strings. The
    /// body is not rewound, so encoding the same request twice yields an empty
    /// body the second time.
    pub fn encode<R: ServerRequest>(&self, request: &mut R) -> String {
        let header_lines: Vec<String> =
            request.headers().iter().map(|(name, _)| format!("{name}:{}", request.header_line(name))).collect();

        let body = request.body_mut().contents();

        let mut raw = String::with_capacity(INIT_HEAD_SIZE + body.len());
        raw.push_str(request.method().unwrap_or_default());
        raw.push_str(SP);
        raw.push_str(request.target().unwrap_or_default());
        raw.push_str(SP);
        raw.push_str(HTTP_PREFIX);
        raw.push_str(request.protocol_version().unwrap_or_default());
        raw.push_str(CRLF);

        raw.push_str(&header_lines.join(CRLF));
        raw.push_str(CRLF);

        raw.push_str(CRLF);
        raw.push_str(&body);
        raw
    }
}
