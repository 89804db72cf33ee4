//! Request body streams.
//!
//! A body is read exactly once: [`ByteStream::contents`] hands back everything
//! that remains and leaves the stream drained. [`StreamFactory`] is the seam
//! through which the decoder turns the raw body text into a stream, so callers
//! can plug in their own body representation.

use bytes::Bytes;

/// A readable request body.
pub trait ByteStream {
    /// Drains all remaining bytes and returns them as a string.
    ///
    /// Calling it again returns whatever was left after the previous call,
    /// which for a drained stream is the empty string.
    fn contents(&mut self) -> String;
}

/// Creates body streams from raw body text.
pub trait StreamFactory {
    type Stream: ByteStream;

    fn create_stream(&self, contents: &str) -> Self::Stream;
}

/// In-memory body backed by [`Bytes`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BytesStream {
    remaining: Bytes,
}

impl BytesStream {
    pub fn new(bytes: impl Into<Bytes>) -> Self {
        Self { remaining: bytes.into() }
    }

    /// Number of bytes not yet drained.
    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }

    pub fn is_drained(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Drains the stream without any text conversion.
    pub fn take_bytes(&mut self) -> Bytes {
        std::mem::take(&mut self.remaining)
    }
}

impl ByteStream for BytesStream {
    fn contents(&mut self) -> String {
        String::from_utf8_lossy(&self.take_bytes()).into_owned()
    }
}

impl From<&str> for BytesStream {
    fn from(value: &str) -> Self {
        Self::new(Bytes::copy_from_slice(value.as_bytes()))
    }
}

impl From<String> for BytesStream {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<Bytes> for BytesStream {
    fn from(value: Bytes) -> Self {
        Self::new(value)
    }
}

/// The default [`StreamFactory`], producing [`BytesStream`] bodies.
#[derive(Debug, Clone, Copy, Default)]
pub struct BytesStreamFactory;

impl StreamFactory for BytesStreamFactory {
    type Stream = BytesStream;

    fn create_stream(&self, contents: &str) -> Self::Stream {
        BytesStream::from(contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contents_drains_stream() {
        let mut stream = BytesStreamFactory.create_stream("hello");
        assert_eq!(stream.remaining(), 5);

        assert_eq!(stream.contents(), "hello");
        assert!(stream.is_drained());
        assert_eq!(stream.contents(), "");
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let mut stream = BytesStream::new(Bytes::from_static(b"ab\xffcd"));
        assert_eq!(stream.contents(), "ab\u{fffd}cd");
    }
}
