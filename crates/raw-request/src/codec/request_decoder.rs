//! Parsing of raw HTTP/1.1 text into requests
//!
//! The decoder is lenient by construction: it never returns an error. Missing
//! request line tokens become `None`, header lines without a colon are skipped
//! and an input without any CRLF yields a request without body.
//!
//! # Implementation Details
//!
//! The raw text is split on CRLF:
//!
//! 1. The first line is the request line, split on its first two spaces
//! 2. The last line (if there is more than one) is the body
//! 3. Every line in between is a header candidate, split on its first colon,
//!    its value split again on every comma, each piece added separately
//!
//! A body containing CRLF is therefore cut at its last CRLF, the leading part
//! ending up among the header candidates.
//!
//! Form bodies of `POST` requests are decoded into [`FormData`]. The content
//! type has to match `application/x-www-form-urlencoded` or
//! `multipart/form-data` exactly; a multipart body is decoded with the
//! urlencoded rules too, its boundary-delimited parts are never parsed.

use tracing::{debug, trace};

use crate::codec::request_encoder::CRLF;
use crate::protocol::{
    BytesStreamFactory, DefaultRequestFactory, FormData, RequestFactory, ServerRequest, StreamFactory,
};

const REQUEST_LINE_PARTS: usize = 3;

const FORM_METHOD: &str = "POST";

/// Parses raw request text with the help of a [`RequestFactory`] and a [`StreamFactory`].
#[derive(Debug, Clone, Default)]
pub struct RequestDecoder<RF = DefaultRequestFactory, SF = BytesStreamFactory> {
    request_factory: RF,
    stream_factory: SF,
}

impl<RF, SF> RequestDecoder<RF, SF>
where
    RF: RequestFactory,
    SF: StreamFactory<Stream = <RF::Request as ServerRequest>::Body>,
{
    pub fn new(request_factory: RF, stream_factory: SF) -> Self {
        Self { request_factory, stream_factory }
    }

    /// Parses `raw` into a request.
    ///
    /// # Arguments
    ///
    /// * `raw` - CRLF delimited request text, no length limit is enforced
    ///
    /// # Returns
    ///
    /// The request built by the factory, with every part of `raw` that could be
    /// recognized filled in.
    pub fn decode(&self, raw: &str) -> RF::Request {
        let mut lines = raw.split(CRLF);
        let request_line = RequestLine::parse(lines.next().unwrap_or_default());
        let mut header_lines: Vec<&str> = lines.collect();
        let body = header_lines.pop().unwrap_or_default();

        trace!(
            method = request_line.method,
            target = request_line.target,
            version = request_line.protocol_version,
            header_lines = header_lines.len(),
            body_size = body.len(),
            "parsed request line"
        );

        let mut request = self
            .request_factory
            .create_request(request_line.method, request_line.target)
            .with_protocol_version(request_line.protocol_version)
            .with_body(self.stream_factory.create_stream(body));

        for line in header_lines {
            let Some((name, value)) = line.split_once(':') else {
                trace!(line, "skip header line without colon");
                continue;
            };

            for value in value.split(',') {
                request = request.with_added_header(name, value);
            }
        }

        if !body.is_empty() && request_line.method == Some(FORM_METHOD) && is_form_content_type(&request) {
            let parsed_body = FormData::parse(body);
            debug!(fields = parsed_body.len(), "attach parsed form body");
            request = request.with_parsed_body(parsed_body);
        }

        request
    }
}

/// The three tokens of a request line, each absent when missing or empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RequestLine<'a> {
    method: Option<&'a str>,
    target: Option<&'a str>,
    protocol_version: Option<&'a str>,
}

impl<'a> RequestLine<'a> {
    fn parse(line: &'a str) -> Self {
        let mut parts = line.splitn(REQUEST_LINE_PARTS, ' ').map(non_empty);
        let method = parts.next().flatten();
        let target = parts.next().flatten();
        let protocol_version =
            parts.next().flatten().and_then(|token| token.split_once('/')).and_then(|(_, version)| non_empty(version));

        Self { method, target, protocol_version }
    }
}

fn non_empty(s: &str) -> Option<&str> {
    (!s.is_empty()).then_some(s)
}

fn is_form_content_type<R: ServerRequest>(request: &R) -> bool {
    let content_type = request.header_line(http::header::CONTENT_TYPE.as_str());
    content_type == mime::APPLICATION_WWW_FORM_URLENCODED.essence_str()
        || content_type == mime::MULTIPART_FORM_DATA.essence_str()
}
