//! Error types for the network client.
//!
//! # Design
//! `ApiError` is a closed set: every failed `execute` call reports exactly one
//! variant. Transport implementations report their own failures as
//! `TransportError`; the client decides which of those mean "not an HTTP
//! response" and wraps the rest in `ApiError::NetworkError`.

use thiserror::Error;

/// Errors returned by `Networking::execute`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The base URL joined with the endpoint path is not a valid URL.
    #[error("invalid URL")]
    BadUrl,

    /// The transport produced something that is not an HTTP response.
    #[error("bad server response")]
    BadServerResponse,

    /// The server answered with a status outside 200–299.
    #[error("invalid status code: {status_code}")]
    InvalidStatusCode { status_code: u16 },

    /// The response body could not be decoded into the requested type.
    #[error("failed to parse response: {0}")]
    Parsing(#[source] serde_json::Error),

    /// Any other failure while performing the request.
    #[error("network error: {0}")]
    NetworkError(#[source] TransportError),
}

/// Failures reported by a `Transport`.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The peer answered, but not with something readable as HTTP.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}
