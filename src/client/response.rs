//! HTTP response type for the InvenTree API client.
//!
//! The server signals everything of interest (pagination links, error
//! details, validation messages) in the JSON body, so the response type is a
//! thin pairing of status code and parsed body.

use crate::client::errors::{HttpError, HttpResponseError};

/// A parsed HTTP response from the API.
///
/// # Example
///
/// ```rust
/// use inventree_client::HttpResponse;
/// use serde_json::json;
///
/// let response = HttpResponse::new(200, json!({"pk": 10, "name": "M3 screw"}));
/// assert!(response.is_ok());
/// assert_eq!(response.body["name"], "M3 screw");
/// ```
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// The response body parsed as JSON (`{}` for empty bodies).
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new response from a status code and parsed body.
    #[must_use]
    pub const fn new(code: u16, body: serde_json::Value) -> Self {
        Self { code, body }
    }

    /// Returns `true` if the status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code < 300
    }

    /// Converts a non-2xx response into an [`HttpError::Response`].
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Response`] carrying the status code and raw body
    /// if the status is not 2xx.
    pub fn error_for_status(self) -> Result<Self, HttpError> {
        if self.is_ok() {
            Ok(self)
        } else {
            Err(HttpError::Response(HttpResponseError {
                code: self.code,
                body: self.body.to_string(),
            }))
        }
    }

    /// Returns the server's `detail` error message, if present.
    ///
    /// The server reports most non-validation errors as `{"detail": "..."}`.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        self.body.get("detail").and_then(serde_json::Value::as_str)
    }
}
