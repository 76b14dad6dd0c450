//! Error types for client configuration.
//!
//! This module contains error types used when building and validating the
//! client configuration.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use inventree_client::{ConfigError, Secret};
//!
//! let result = Secret::new("");
//! assert!(matches!(result, Err(ConfigError::EmptySecret)));
//! ```

use thiserror::Error;

/// Errors that can occur during client configuration.
///
/// This enum represents all possible errors that can occur when creating
/// or validating configuration types. Each variant provides a clear,
/// actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The server base URL is invalid.
    #[error("Invalid server URL '{url}'. Please provide a valid http(s) URL (e.g., 'https://inventree.example.com').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A credential value (password or token) is empty.
    #[error("Credential value cannot be empty. Please provide a valid password or token.")]
    EmptySecret,

    /// The username for basic authentication is empty.
    #[error("Username cannot be empty. Please provide a valid username.")]
    EmptyUsername,

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
