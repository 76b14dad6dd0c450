//! Error types for resource operations.
//!
//! This module maps HTTP status codes to semantic errors for resource
//! operations, and adds the purely local failure modes of instances
//! (use-after-delete, unknown fields).
//!
//! # Error Handling
//!
//! - **404** on retrieve/delete: [`ResourceError::NotFound`]
//! - **404** on update/refresh: [`ResourceError::StaleInstance`]
//! - **400/422** on create/update: [`ResourceError::ValidationFailed`] with
//!   per-field server messages
//! - **Other non-2xx**: [`ResourceError::Http`] carrying status and raw body
//! - Field access after delete: [`ResourceError::InvalidInstance`] (local,
//!   never reaches the network)
//!
//! # Example
//!
//! ```rust,ignore
//! use inventree_client::{Model, Part, ResourceError};
//!
//! match Part::retrieve(&client, 123).await {
//!     Ok(part) => println!("Found: {:?}", part.get_str("name")),
//!     Err(ResourceError::NotFound { resource, pk }) => {
//!         println!("{resource} {pk} does not exist");
//!     }
//!     Err(ResourceError::ValidationFailed { errors, .. }) => {
//!         for (field, messages) in errors {
//!             println!("{field}: {messages:?}");
//!         }
//!     }
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use std::collections::HashMap;

use crate::client::{HttpError, HttpResponse, HttpResponseError};
use crate::resource::schema::ResourceSchema;
use thiserror::Error;

/// Error type for resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The resource was not found (HTTP 404 on retrieve or delete).
    #[error("{resource} with pk {pk} not found")]
    NotFound {
        /// The type name of the resource (e.g., "Part").
        resource: &'static str,
        /// The primary key that was requested.
        pk: i64,
    },

    /// The server rejected a create or update (HTTP 400/422).
    #[error("Validation failed for {resource}: {errors:?}")]
    ValidationFailed {
        /// The type name of the resource.
        resource: &'static str,
        /// A map of field names to server-reported error messages.
        errors: HashMap<String, Vec<String>>,
    },

    /// The instance's primary key no longer resolves on the server
    /// (HTTP 404 on update or refresh).
    #[error("{resource} with pk {pk} no longer exists on the server")]
    StaleInstance {
        /// The type name of the resource.
        resource: &'static str,
        /// The primary key of the stale instance.
        pk: i64,
    },

    /// The instance was deleted locally and can no longer be used.
    ///
    /// This is a local precondition failure; no request is made.
    #[error("This {resource} instance has been deleted and can no longer be used")]
    InvalidInstance {
        /// The type name of the resource.
        resource: &'static str,
    },

    /// The requested field is not present in the instance data.
    #[error("{resource} has no field named '{field}'")]
    UnknownField {
        /// The type name of the resource.
        resource: &'static str,
        /// The field that was requested.
        field: String,
    },

    /// The primary-key field of an instance is immutable.
    #[error("The '{pk_field}' field of {resource} is immutable")]
    ImmutablePk {
        /// The type name of the resource.
        resource: &'static str,
        /// The name of the primary-key field.
        pk_field: &'static str,
    },

    /// The server response does not contain a valid primary key.
    #[error("{resource} data does not contain a positive integer '{pk_field}' value")]
    MissingPk {
        /// The type name of the resource.
        resource: &'static str,
        /// The name of the primary-key field.
        pk_field: &'static str,
    },

    /// A JSON value (response body or caller-supplied field data) has an
    /// unexpected shape.
    #[error("Unexpected data for {resource}: {detail}")]
    UnexpectedBody {
        /// The type name of the resource.
        resource: &'static str,
        /// A description of what was wrong with the data.
        detail: String,
    },

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl ResourceError {
    /// Maps a non-2xx response to a semantic resource error.
    ///
    /// - 404 becomes [`ResourceError::NotFound`] (call sites re-map to
    ///   [`ResourceError::StaleInstance`] where the pk was known-good before)
    /// - 400 and 422 become [`ResourceError::ValidationFailed`]
    /// - everything else is wrapped as [`ResourceError::Http`]
    #[must_use]
    pub fn from_response(schema: ResourceSchema, response: &HttpResponse, pk: Option<i64>) -> Self {
        match response.code {
            404 => Self::NotFound {
                resource: schema.name,
                pk: pk.unwrap_or_default(),
            },
            400 | 422 => Self::ValidationFailed {
                resource: schema.name,
                errors: parse_validation_errors(&response.body),
            },
            code => Self::Http(HttpError::Response(HttpResponseError {
                code,
                body: response.body.to_string(),
            })),
        }
    }

    /// Re-maps a 404-derived `NotFound` to `StaleInstance`.
    ///
    /// Used by update and refresh, where the pk resolved when the instance
    /// was fetched but no longer does.
    #[must_use]
    pub fn into_stale(self) -> Self {
        match self {
            Self::NotFound { resource, pk } => Self::StaleInstance { resource, pk },
            other => other,
        }
    }
}

/// Parses per-field validation messages from an error body.
///
/// The server reports validation errors as an object keyed by field name:
///
/// ```json
/// {
///   "name": ["This field is required."],
///   "minimum_stock": ["A valid number is required."]
/// }
/// ```
///
/// Non-field errors arrive either under `non_field_errors`, as a bare array,
/// or as a `detail` string; all are collected under `non_field_errors`.
fn parse_validation_errors(body: &serde_json::Value) -> HashMap<String, Vec<String>> {
    let mut result = HashMap::new();

    match body {
        serde_json::Value::Object(map) => {
            for (field, messages) in map {
                let msgs: Vec<String> = match messages {
                    serde_json::Value::Array(arr) => arr
                        .iter()
                        .map(|v| v.as_str().map_or_else(|| v.to_string(), ToString::to_string))
                        .collect(),
                    serde_json::Value::String(s) => vec![s.clone()],
                    other => vec![other.to_string()],
                };
                result.insert(field.clone(), msgs);
            }
        }
        serde_json::Value::Array(arr) => {
            let msgs: Vec<String> = arr
                .iter()
                .filter_map(|v| v.as_str().map(ToString::to_string))
                .collect();
            if !msgs.is_empty() {
                result.insert("non_field_errors".to_string(), msgs);
            }
        }
        serde_json::Value::String(s) => {
            result.insert("non_field_errors".to_string(), vec![s.clone()]);
        }
        _ => {}
    }

    result
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};
