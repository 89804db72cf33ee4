use std::io;
use thiserror::Error;

/// Errors raised when a [`Request`](crate::protocol::Request) is turned into an [`http::Request`].
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("request has no method")]
    MissingMethod,

    #[error("request has no target uri")]
    MissingUri,

    #[error("invalid http method {value:?}: {source}")]
    InvalidMethod {
        value: String,
        #[source]
        source: http::method::InvalidMethod,
    },

    #[error("invalid http uri {value:?}: {source}")]
    InvalidUri {
        value: String,
        #[source]
        source: http::uri::InvalidUri,
    },

    #[error("invalid http version: {0:?}")]
    InvalidVersion(String),

    #[error("invalid header name {value:?}: {source}")]
    InvalidHeaderName {
        value: String,
        #[source]
        source: http::header::InvalidHeaderName,
    },

    #[error("invalid value for header {name:?}: {source}")]
    InvalidHeaderValue {
        name: String,
        #[source]
        source: http::header::InvalidHeaderValue,
    },
}

impl ConvertError {
    pub fn invalid_version<S: ToString>(str: S) -> Self {
        Self::InvalidVersion(str.to_string())
    }
}

/// Errors surfaced by [`RawRequestCodec`](crate::codec::RawRequestCodec) when framed over a transport.
///
/// Transcoding itself never fails, only the underlying io can.
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("io error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },
}
