//! Error types for the items clients.
//!
//! # Design
//! Failures fall into two coarse kinds. Construction failures (bad base
//! address, bad default header, malformed route declaration) surface when a
//! transport or proxy is built. Call failures (network error, non-2xx status,
//! undecodable body) surface from `get_item`. Neither kind is retried;
//! `ClientError::kind` reports which one a given error belongs to.

/// Coarse classification of a [`ClientError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Raised while building a transport or a proxy client.
    Construction,
    /// Raised while executing a request.
    Call,
}

/// Errors returned by transports, route compilation and both adapters.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The configured base address is not an absolute http(s) URL.
    #[error("invalid base address {address:?}: {reason}")]
    InvalidBaseAddress { address: String, reason: String },

    /// A default header name or value could not be encoded.
    #[error("invalid default header {name:?}: {reason}")]
    InvalidHeader { name: String, reason: String },

    /// A declared route does not agree with its operation signature.
    #[error("malformed route for `{operation}`: {reason}")]
    MalformedRoute { operation: String, reason: String },

    /// The underlying HTTP client could not be initialised.
    #[error("failed to initialise HTTP transport: {0}")]
    TransportInit(#[source] reqwest::Error),

    /// The request never produced a response (connection refused, timeout, ...).
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// The response body could not be decoded into the expected type.
    #[error("response body could not be decoded: {0}")]
    Decode(String),
}

impl ClientError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClientError::InvalidBaseAddress { .. }
            | ClientError::InvalidHeader { .. }
            | ClientError::MalformedRoute { .. }
            | ClientError::TransportInit(_) => ErrorKind::Construction,
            ClientError::Transport { .. } | ClientError::HttpStatus { .. } | ClientError::Decode(_) => {
                ErrorKind::Call
            }
        }
    }

    pub(crate) fn malformed_route(operation: &str, reason: impl Into<String>) -> Self {
        ClientError::MalformedRoute {
            operation: operation.to_string(),
            reason: reason.into(),
        }
    }
}
