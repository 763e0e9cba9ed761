//! `TmdbError` - error taxonomy for the TMDB client.

use crate::types::StatusResponse;

/// Errors surfaced by every endpoint method.
///
/// Nothing is retried, cached, or logged-and-swallowed internally; each
/// variant is the caller's to interpret.
#[derive(Debug, thiserror::Error)]
pub enum TmdbError {
    /// Network-level failure, propagated unchanged from the transport.
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API rejected the request with a non-success status.
    ///
    /// Raised by the response-validation step before any body decoding,
    /// so a decode error never masks a server-side rejection.
    #[error("TMDB API error (HTTP {status}): {message}")]
    Api {
        /// HTTP status code of the rejected request.
        status: u16,
        /// Server-provided message, or the raw body when no error
        /// envelope could be parsed.
        message: String,
        /// Parsed error envelope, when the body contained one.
        payload: Option<StatusResponse>,
    },

    /// The response body did not match the expected schema.
    #[error("failed to decode JSON response at {path}: {source}")]
    Decode {
        /// JSON path of the failing field.
        path: String,
        /// Underlying serde error.
        source: serde_json::Error,
    },

    /// Client construction failed (missing credential, invalid URL).
    #[error("client configuration error: {0}")]
    Config(String),
}
