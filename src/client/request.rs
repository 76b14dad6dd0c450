//! HTTP request types for the InvenTree API client.
//!
//! This module provides the [`ApiRequest`] type and its builder for
//! constructing requests against API endpoints.

use std::collections::BTreeMap;
use std::fmt;

use crate::client::errors::InvalidRequestError;

/// HTTP methods supported by the API.
///
/// The server maps CRUD operations onto the conventional verbs: POST creates,
/// GET retrieves and lists, PATCH partially updates, PUT replaces, DELETE
/// removes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PATCH method for partial updates.
    Patch,
    /// HTTP PUT method for full replacement.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Patch => write!(f, "patch"),
            Self::Put => write!(f, "put"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// An HTTP request to be sent to the API.
///
/// Use [`ApiRequest::builder`] to construct requests with the builder pattern.
/// Bodies are always JSON; query parameters are kept ordered so request URLs
/// are deterministic.
///
/// # Example
///
/// ```rust
/// use inventree_client::{ApiRequest, HttpMethod};
/// use serde_json::json;
///
/// // GET request with a query parameter
/// let list = ApiRequest::builder(HttpMethod::Get, "part/")
///     .query_param("category", "7")
///     .build()
///     .unwrap();
///
/// // POST request with a JSON body
/// let create = ApiRequest::builder(HttpMethod::Post, "part/")
///     .body(json!({"name": "M3 screw"}))
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct ApiRequest {
    /// The HTTP method for this request.
    pub method: HttpMethod,
    /// The endpoint path, relative to the API root.
    pub path: String,
    /// The JSON request body, if any.
    pub body: Option<serde_json::Value>,
    /// Query parameters to append to the URL.
    pub query: BTreeMap<String, String>,
}

impl ApiRequest {
    /// Creates a new builder for constructing an `ApiRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> ApiRequestBuilder {
        ApiRequestBuilder::new(method, path)
    }

    /// Validates the request, ensuring it meets all requirements.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRequestError::MissingBody`] if the method is POST,
    /// PATCH, or PUT and no body is set.
    pub fn verify(&self) -> Result<(), InvalidRequestError> {
        if matches!(
            self.method,
            HttpMethod::Post | HttpMethod::Patch | HttpMethod::Put
        ) && self.body.is_none()
        {
            return Err(InvalidRequestError::MissingBody {
                method: self.method.to_string(),
            });
        }

        Ok(())
    }
}

/// Builder for constructing [`ApiRequest`] instances.
///
/// Provides a fluent API for building requests with optional parameters.
#[derive(Debug)]
pub struct ApiRequestBuilder {
    method: HttpMethod,
    path: String,
    body: Option<serde_json::Value>,
    query: BTreeMap<String, String>,
}

impl ApiRequestBuilder {
    /// Creates a new builder with the required method and path.
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            query: BTreeMap::new(),
        }
    }

    /// Sets the JSON request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets all query parameters at once.
    #[must_use]
    pub fn query(mut self, query: BTreeMap<String, String>) -> Self {
        self.query = query;
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Builds and validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRequestError`] if the request fails validation
    /// (see [`ApiRequest::verify`]).
    pub fn build(self) -> Result<ApiRequest, InvalidRequestError> {
        let request = ApiRequest {
            method: self.method,
            path: self.path,
            body: self.body,
            query: self.query,
        };
        request.verify()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "get");
        assert_eq!(HttpMethod::Post.to_string(), "post");
        assert_eq!(HttpMethod::Patch.to_string(), "patch");
        assert_eq!(HttpMethod::Put.to_string(), "put");
        assert_eq!(HttpMethod::Delete.to_string(), "delete");
    }

    #[test]
    fn test_get_request_builds_without_body() {
        let request = ApiRequest::builder(HttpMethod::Get, "part/")
            .query_param("limit", "10")
            .build()
            .unwrap();

        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.path, "part/");
        assert_eq!(request.query.get("limit"), Some(&"10".to_string()));
        assert!(request.body.is_none());
    }

    #[test]
    fn test_post_without_body_fails_validation() {
        let result = ApiRequest::builder(HttpMethod::Post, "part/").build();

        assert!(matches!(
            result,
            Err(InvalidRequestError::MissingBody { .. })
        ));
    }

    #[test]
    fn test_patch_without_body_fails_validation() {
        let result = ApiRequest::builder(HttpMethod::Patch, "part/1/").build();

        assert!(matches!(
            result,
            Err(InvalidRequestError::MissingBody { .. })
        ));
    }

    #[test]
    fn test_delete_builds_without_body() {
        let request = ApiRequest::builder(HttpMethod::Delete, "part/1/")
            .build()
            .unwrap();
        assert_eq!(request.method, HttpMethod::Delete);
    }

    #[test]
    fn test_post_with_body_builds() {
        let request = ApiRequest::builder(HttpMethod::Post, "part/")
            .body(json!({"name": "M3 screw"}))
            .build()
            .unwrap();

        assert_eq!(request.body, Some(json!({"name": "M3 screw"})));
    }

    #[test]
    fn test_query_params_are_ordered() {
        let request = ApiRequest::builder(HttpMethod::Get, "part/")
            .query_param("offset", "20")
            .query_param("category", "7")
            .query_param("limit", "10")
            .build()
            .unwrap();

        let keys: Vec<&str> = request.query.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["category", "limit", "offset"]);
    }
}
