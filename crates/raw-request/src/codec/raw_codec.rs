//! The request transcoder and its `tokio_util` codec implementation
//!
//! [`RawRequestCodec`] combines [`RequestEncoder`] and [`RequestDecoder`]
//! behind the two plain operations [`serialize`](RawRequestCodec::serialize)
//! and [`deserialize`](RawRequestCodec::deserialize).
//!
//! It also implements [`Encoder`] and [`Decoder`] so it can sit inside
//! `FramedWrite`/`FramedRead`. On the decoding side a message is delimited by
//! the end of the stream: nothing is produced until the transport reports EOF,
//! then the whole buffer is parsed as one request.

use bytes::{BufMut, BytesMut};
use tokio_util::codec::{Decoder, Encoder};
use tracing::trace;

use crate::codec::request_decoder::RequestDecoder;
use crate::codec::request_encoder::RequestEncoder;
use crate::protocol::{
    BytesStreamFactory, CodecError, DefaultRequestFactory, RequestFactory, ServerRequest, StreamFactory,
};

/// Converts requests to raw HTTP/1.1 text and back.
///
/// The codec holds no state besides its two collaborators, every call is
/// independent of the previous ones.
///
/// # Example
///
/// ```
/// use raw_request::codec::RawRequestCodec;
/// use raw_request::protocol::{ByteStream, ServerRequest};
///
/// let codec = RawRequestCodec::new();
/// let mut request = codec.deserialize("GET /foo HTTP/1.1\r\nHost:example.com\r\n\r\nhello");
///
/// assert_eq!(request.method(), Some("GET"));
/// assert_eq!(request.header_line("host"), "example.com");
/// assert_eq!(codec.serialize(&mut request), "GET /foo HTTP/1.1\r\nHost:example.com\r\n\r\nhello");
/// ```
#[derive(Debug, Clone, Default)]
pub struct RawRequestCodec<RF = DefaultRequestFactory, SF = BytesStreamFactory> {
    encoder: RequestEncoder,
    decoder: RequestDecoder<RF, SF>,
}

impl RawRequestCodec {
    /// Creates a codec producing [`Request`](crate::protocol::Request) values.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<RF, SF> RawRequestCodec<RF, SF>
where
    RF: RequestFactory,
    SF: StreamFactory<Stream = <RF::Request as ServerRequest>::Body>,
{
    /// Creates a codec using custom collaborators for building requests and bodies.
    pub fn with_factories(request_factory: RF, stream_factory: SF) -> Self {
        Self { encoder: RequestEncoder, decoder: RequestDecoder::new(request_factory, stream_factory) }
    }

    /// Serializes `request` into raw text, draining its body.
    pub fn serialize<R: ServerRequest>(&self, request: &mut R) -> String {
        self.encoder.encode(request)
    }

    /// Parses raw text into a request, never failing.
    pub fn deserialize(&self, raw: &str) -> RF::Request {
        self.decoder.decode(raw)
    }
}

impl<RF, SF, R> Encoder<R> for RawRequestCodec<RF, SF>
where
    R: ServerRequest,
{
    type Error = CodecError;

    fn encode(&mut self, mut item: R, dst: &mut BytesMut) -> Result<(), Self::Error> {
        let raw = self.encoder.encode(&mut item);
        dst.reserve(raw.len());
        dst.put_slice(raw.as_bytes());
        Ok(())
    }
}

impl<RF, SF> Decoder for RawRequestCodec<RF, SF>
where
    RF: RequestFactory,
    SF: StreamFactory<Stream = <RF::Request as ServerRequest>::Body>,
{
    type Item = RF::Request;
    type Error = CodecError;

    /// Keeps buffering, a request is only complete once the stream ends.
    fn decode(&mut self, _src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        Ok(None)
    }

    fn decode_eof(&mut self, buf: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        if buf.is_empty() {
            return Ok(None);
        }

        let bytes = buf.split().freeze();
        trace!(size = bytes.len(), "decode buffered request at end of stream");
        Ok(Some(self.decoder.decode(&String::from_utf8_lossy(&bytes))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{ByteStream, BytesStream, Headers, Request};
    use futures::{SinkExt, StreamExt};
    use tokio_util::codec::{FramedRead, FramedWrite};

    #[test]
    fn serialize_then_deserialize() {
        let codec = RawRequestCodec::new();
        let mut request = Request::new("PUT", "/items/1")
            .with_added_header("Host", "localhost")
            .with_body(BytesStream::from("{\"id\":1}"));

        let raw = codec.serialize(&mut request);
        let mut decoded = codec.deserialize(&raw);

        assert_eq!(decoded.method(), Some("PUT"));
        assert_eq!(decoded.target(), Some("/items/1"));
        assert_eq!(decoded.protocol_version(), Some("1.1"));
        assert_eq!(decoded.body_mut().contents(), "{\"id\":1}");
    }

    #[test]
    fn decode_eof_parses_whole_buffer() {
        let mut codec = RawRequestCodec::new();
        let mut buf = BytesMut::from("GET / HTTP/1.1\r\nHost:a\r\n\r\n");

        assert!(codec.decode(&mut buf).unwrap().is_none());
        assert_eq!(buf.len(), 26);

        let request = codec.decode_eof(&mut buf).unwrap().unwrap();
        assert_eq!(request.header_line("host"), "a");
        assert!(buf.is_empty());

        assert!(codec.decode_eof(&mut buf).unwrap().is_none());
    }

    #[tokio::test]
    async fn framed_read_yields_single_request() {
        let input: &[u8] = b"POST /form HTTP/1.1\r\nContent-Type:application/x-www-form-urlencoded\r\n\r\nk=v";
        let mut framed = FramedRead::new(input, RawRequestCodec::new());

        let request = framed.next().await.unwrap().unwrap();
        assert_eq!(request.parsed_body().and_then(|form| form.text("k")), Some("v"));

        assert!(framed.next().await.is_none());
    }

    #[tokio::test]
    async fn framed_write_serializes_request() {
        let mut framed = FramedWrite::new(Vec::new(), RawRequestCodec::new());
        let request = Request::new("GET", "/").with_added_header("Host", "localhost");

        framed.send(request).await.unwrap();

        assert_eq!(framed.get_ref().as_slice(), b"GET / HTTP/1.1\r\nHost:localhost\r\n\r\n");
    }

    /// A request type living outside the crate, used to check the factory seams.
    #[derive(Debug, Default)]
    struct TaggedRequest {
        tag: &'static str,
        method: Option<String>,
        target: Option<String>,
        version: Option<String>,
        headers: Headers,
        body: BytesStream,
    }

    impl ServerRequest for TaggedRequest {
        type Body = BytesStream;

        fn method(&self) -> Option<&str> {
            self.method.as_deref()
        }

        fn target(&self) -> Option<&str> {
            self.target.as_deref()
        }

        fn protocol_version(&self) -> Option<&str> {
            self.version.as_deref()
        }

        fn headers(&self) -> &Headers {
            &self.headers
        }

        fn body_mut(&mut self) -> &mut Self::Body {
            &mut self.body
        }

        fn parsed_body(&self) -> Option<&crate::protocol::FormData> {
            None
        }

        fn with_protocol_version(mut self, version: Option<&str>) -> Self {
            self.version = version.map(str::to_string);
            self
        }

        fn with_body(mut self, body: Self::Body) -> Self {
            self.body = body;
            self
        }

        fn with_added_header(mut self, name: &str, value: &str) -> Self {
            self.headers.append(name, value);
            self
        }

        fn with_parsed_body(self, _parsed_body: crate::protocol::FormData) -> Self {
            self
        }
    }

    #[derive(Debug, Clone, Copy)]
    struct TaggedFactory;

    impl RequestFactory for TaggedFactory {
        type Request = TaggedRequest;

        fn create_request(&self, method: Option<&str>, target: Option<&str>) -> Self::Request {
            TaggedRequest {
                tag: "tagged",
                method: method.map(str::to_string),
                target: target.map(str::to_string),
                ..TaggedRequest::default()
            }
        }
    }

    #[derive(Debug, Clone, Copy)]
    struct UppercaseStreamFactory;

    impl StreamFactory for UppercaseStreamFactory {
        type Stream = BytesStream;

        fn create_stream(&self, contents: &str) -> Self::Stream {
            BytesStream::from(contents.to_uppercase())
        }
    }

    #[test]
    fn custom_collaborators_are_used() {
        let codec = RawRequestCodec::with_factories(TaggedFactory, UppercaseStreamFactory);

        let mut request = codec.deserialize("GET /x HTTP/1.0\r\nX-A: 1\r\n\r\nbody");

        assert_eq!(request.tag, "tagged");
        assert_eq!(request.protocol_version(), Some("1.0"));
        // no trimming without the default request type
        assert_eq!(request.header_line("x-a"), " 1");
        assert_eq!(codec.serialize(&mut request), "GET /x HTTP/1.0\r\nX-A: 1\r\n\r\nBODY");
    }
}
