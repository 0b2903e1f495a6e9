//! Failure taxonomy for roster service calls.

use serde::Deserialize;
use thiserror::Error;

/// A roster service call that did not succeed.
///
/// `Application` is the common case: the service answered with its usual
/// JSON error body. `Transport` means no usable HTTP response existed at
/// all, and `MalformedBody` covers non-2xx answers whose body could not be
/// decoded (proxies, crash pages).
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response, like a refused connection or
    /// a timeout.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service rejected the request and said why.
    #[error("{message} [{status}] [{error}]")]
    Application {
        message: String,
        status: u16,
        error: String,
    },

    /// Non-2xx answer with a body that is not the expected JSON shape.
    #[error("unreadable error response [{status}]")]
    MalformedBody { status: u16 },
}

/// Error body emitted by the service on non-2xx responses.
///
/// Decoding is lenient: any missing field falls back to its default so a
/// sparse body still yields a usable `Application` error.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: u16,
    #[serde(default)]
    error: String,
}

impl ApiError {
    /// Decode a non-2xx response body into the structured error shape.
    ///
    /// `http_status` is only used when the body itself is undecodable.
    pub(crate) fn from_error_body(http_status: u16, body: &[u8]) -> Self {
        match serde_json::from_slice::<ErrorBody>(body) {
            Ok(body) => ApiError::Application {
                message: body.message,
                status: body.status,
                error: body.error,
            },
            Err(_) => ApiError::MalformedBody {
                status: http_status,
            },
        }
    }
}
