//! Conversions between [`Request`] and [`http::Request`].
//!
//! Going to `http` is fallible because the raw request never validates its
//! method, target, version or headers. Coming from `http` always succeeds.

use bytes::Bytes;
use http::{HeaderName, HeaderValue, Method, Uri, Version};

use crate::protocol::error::ConvertError;
use crate::protocol::request::{DefaultRequestFactory, Request, RequestFactory, ServerRequest};
use crate::protocol::stream::BytesStream;

/// Converts a request into an [`http::Request`], draining its body.
///
/// An absent protocol version maps to HTTP/1.1. Every stored header value
/// becomes a separate [`HeaderValue`], the parsed body is not carried over.
impl TryFrom<Request> for http::Request<Bytes> {
    type Error = ConvertError;

    fn try_from(mut request: Request) -> Result<Self, Self::Error> {
        let method = request.method().ok_or(ConvertError::MissingMethod)?;
        let method = Method::from_bytes(method.as_bytes())
            .map_err(|source| ConvertError::InvalidMethod { value: method.to_string(), source })?;

        let target = request.target().ok_or(ConvertError::MissingUri)?;
        let uri = target.parse::<Uri>().map_err(|source| ConvertError::InvalidUri { value: target.to_string(), source })?;

        let version = parse_version(request.protocol_version())?;

        let mut header_map = http::HeaderMap::with_capacity(request.headers().len());
        for (name, values) in request.headers().iter() {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|source| ConvertError::InvalidHeaderName { value: name.to_string(), source })?;

            for value in values {
                let header_value = HeaderValue::from_str(value)
                    .map_err(|source| ConvertError::InvalidHeaderValue { name: name.to_string(), source })?;
                header_map.append(header_name.clone(), header_value);
            }
        }

        let mut converted = http::Request::new(request.body_mut().take_bytes());
        *converted.method_mut() = method;
        *converted.uri_mut() = uri;
        *converted.version_mut() = version;
        *converted.headers_mut() = header_map;
        Ok(converted)
    }
}

/// Copies method, uri, version and headers; the body becomes a [`BytesStream`].
///
/// Header values that are not valid UTF-8 are converted lossily.
impl<B: Into<Bytes>> From<http::Request<B>> for Request {
    fn from(value: http::Request<B>) -> Self {
        let (parts, body) = value.into_parts();

        let mut request = DefaultRequestFactory
            .create_request(Some(parts.method.as_str()), Some(&parts.uri.to_string()))
            .with_protocol_version(Some(version_str(parts.version)))
            .with_body(BytesStream::new(body));

        for (name, value) in &parts.headers {
            request = request.with_added_header(name.as_str(), &String::from_utf8_lossy(value.as_bytes()));
        }
        request
    }
}

fn parse_version(version: Option<&str>) -> Result<Version, ConvertError> {
    match version {
        None | Some("1.1") => Ok(Version::HTTP_11),
        Some("1.0") => Ok(Version::HTTP_10),
        Some("0.9") => Ok(Version::HTTP_09),
        Some("2" | "2.0") => Ok(Version::HTTP_2),
        Some("3" | "3.0") => Ok(Version::HTTP_3),
        Some(other) => Err(ConvertError::invalid_version(other)),
    }
}

fn version_str(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "0.9",
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        Version::HTTP_3 => "3",
        _ => "1.1",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::stream::ByteStream;

    #[test]
    fn into_http_request() {
        let request = Request::new("POST", "/submit?x=1")
            .with_added_header("Host", "example.com")
            .with_added_header("Accept", "text/html")
            .with_added_header("Accept", "*/*")
            .with_body(BytesStream::from("payload"));

        let converted = http::Request::<Bytes>::try_from(request).unwrap();

        assert_eq!(converted.method(), &Method::POST);
        assert_eq!(converted.uri().path(), "/submit");
        assert_eq!(converted.uri().query(), Some("x=1"));
        assert_eq!(converted.version(), Version::HTTP_11);
        assert_eq!(converted.headers().get(http::header::HOST), Some(&HeaderValue::from_static("example.com")));

        let accept: Vec<&HeaderValue> = converted.headers().get_all(http::header::ACCEPT).iter().collect();
        assert_eq!(accept, vec![&HeaderValue::from_static("text/html"), &HeaderValue::from_static("*/*")]);

        assert_eq!(converted.body(), &Bytes::from_static(b"payload"));
    }

    #[test]
    fn missing_parts_are_reported() {
        let request = DefaultRequestFactory.create_request(None, Some("/"));
        assert!(matches!(http::Request::<Bytes>::try_from(request), Err(ConvertError::MissingMethod)));

        let request = DefaultRequestFactory.create_request(Some("GET"), None);
        assert!(matches!(http::Request::<Bytes>::try_from(request), Err(ConvertError::MissingUri)));
    }

    #[test]
    fn invalid_parts_are_reported() {
        let request = Request::new("GET", "/").with_protocol_version(Some("4.2"));
        assert!(matches!(http::Request::<Bytes>::try_from(request), Err(ConvertError::InvalidVersion(v)) if v == "4.2"));

        let request = Request::new("GET", "/").with_added_header("Bad Name", "x");
        assert!(matches!(http::Request::<Bytes>::try_from(request), Err(ConvertError::InvalidHeaderName { .. })));

        let request = Request::new("GET", "/ spaced");
        assert!(matches!(http::Request::<Bytes>::try_from(request), Err(ConvertError::InvalidUri { .. })));
    }

    #[test]
    fn from_http_request() {
        let source = http::Request::builder()
            .method(Method::PUT)
            .uri("/items/1")
            .version(Version::HTTP_10)
            .header("X-Trace", "abc")
            .body("body")
            .unwrap();

        let mut request = Request::from(source);

        assert_eq!(request.method(), Some("PUT"));
        assert_eq!(request.target(), Some("/items/1"));
        assert_eq!(request.protocol_version(), Some("1.0"));
        assert_eq!(request.header_line("x-trace"), "abc");
        assert_eq!(request.body_mut().contents(), "body");
    }
}
