//! HTTP and connect error types for the InvenTree API client.
//!
//! # Error Handling
//!
//! The client uses specific error types for different failure scenarios:
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the API
//! - [`InvalidRequestError`]: When a request fails validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//! - [`ConnectError`]: Failures of the connect handshake
//!
//! No error is retried internally; every failure surfaces to the immediate
//! caller with enough information (status code, body) to act on.

use thiserror::Error;

/// Error carrying a non-successful HTTP response.
///
/// Includes the status code and the raw response body for caller inspection.
///
/// # Example
///
/// ```rust
/// use inventree_client::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 405,
///     body: r#"{"detail":"Method not allowed"}"#.to_string(),
/// };
///
/// assert!(error.to_string().contains("405"));
/// ```
#[derive(Debug, Error)]
#[error("HTTP {code}: {body}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The raw response body.
    pub body: String,
}

/// Error returned when a request fails validation before sending.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidRequestError {
    /// A POST/PATCH/PUT request was built without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// The endpoint path cannot be joined onto the API root URL.
    #[error("Invalid endpoint path '{path}'.")]
    InvalidPath {
        /// The path that was provided.
        path: String,
    },
}

/// Unified error type for HTTP operations.
///
/// # Example
///
/// ```rust,ignore
/// match client.send(request).await {
///     Ok(response) => println!("Status: {}", response.code),
///     Err(HttpError::Response(e)) => println!("API error {}: {}", e.code, e.body),
///     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
///     Err(HttpError::Network(e)) => println!("Network error: {e}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Errors from the connect handshake.
///
/// Connecting verifies the server, checks its API version, and resolves the
/// configured credentials into a token. Each step has a distinct failure mode.
#[derive(Debug, Error)]
pub enum ConnectError {
    /// The host is unreachable or the TLS handshake failed.
    #[error("Failed to reach server: {0}")]
    Connection(#[source] reqwest::Error),

    /// The server rejected the configured credentials.
    #[error("Authentication failed (HTTP {status}). Check the configured credentials.")]
    Auth {
        /// The HTTP status code of the rejection.
        status: u16,
    },

    /// The server's API version is older than the minimum this client supports.
    #[error("Server API version {server} is older than the minimum supported version {required}.")]
    UnsupportedApiVersion {
        /// The API version reported by the server.
        server: u32,
        /// The minimum API version this client supports.
        required: u32,
    },

    /// The server responded, but not with the expected handshake payload.
    #[error("Unexpected server response: {detail}")]
    UnexpectedResponse {
        /// A description of what was wrong with the response.
        detail: String,
    },

    /// An HTTP-level error occurred during the handshake.
    #[error(transparent)]
    Http(#[from] HttpError),
}
