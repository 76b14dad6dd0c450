//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;
use url::Url;

/// A validated server base URL.
///
/// This newtype ensures the URL is a well-formed http(s) URL with a host, and
/// normalizes it to end with a trailing slash so endpoint paths join cleanly.
///
/// # Example
///
/// ```rust
/// use inventree_client::HostUrl;
///
/// let url = HostUrl::new("https://inventree.example.com").unwrap();
/// assert_eq!(url.as_ref(), "https://inventree.example.com/");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostUrl(Url);

impl HostUrl {
    /// Creates a new validated server base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHostUrl`] if the URL cannot be parsed,
    /// uses a scheme other than `http`/`https`, or has no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = url.into();
        let trimmed = raw.trim();

        let mut parsed = Url::parse(trimmed)
            .map_err(|_| ConfigError::InvalidHostUrl { url: raw.clone() })?;

        if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
            return Err(ConfigError::InvalidHostUrl { url: raw });
        }

        // Endpoint paths are joined relative to the base, so it must end with '/'
        if !parsed.path().ends_with('/') {
            let path = format!("{}/", parsed.path());
            parsed.set_path(&path);
        }

        Ok(Self(parsed))
    }

    /// Returns the API root URL (`{base}/api/`) for this server.
    ///
    /// # Panics
    ///
    /// Does not panic: the base URL is validated on construction, so joining
    /// a relative path cannot fail.
    #[must_use]
    pub fn api_url(&self) -> Url {
        self.0
            .join("api/")
            .unwrap_or_else(|_| unreachable!("validated base URL joins 'api/'"))
    }

    /// Returns the underlying parsed URL.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.0
    }
}

impl AsRef<str> for HostUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

/// A validated secret value (password or API token).
///
/// This newtype ensures the value is non-empty and masks its contents in
/// debug output to prevent accidental exposure in logs.
///
/// # Security
///
/// The `Debug` implementation masks the secret value, displaying only
/// `Secret(*****)` instead of the actual contents.
///
/// # Example
///
/// ```rust
/// use inventree_client::Secret;
///
/// let secret = Secret::new("hunter2").unwrap();
/// assert_eq!(format!("{:?}", secret), "Secret(*****)");
/// assert_eq!(secret.expose(), "hunter2");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    /// Creates a new validated secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptySecret`] if the value is empty.
    pub fn new(value: impl Into<String>) -> Result<Self, ConfigError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ConfigError::EmptySecret);
        }
        Ok(Self(value))
    }

    /// Returns the underlying secret value.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(*****)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_url_normalizes_trailing_slash() {
        let url = HostUrl::new("https://inventree.example.com").unwrap();
        assert_eq!(url.as_ref(), "https://inventree.example.com/");

        let url = HostUrl::new("https://inventree.example.com/").unwrap();
        assert_eq!(url.as_ref(), "https://inventree.example.com/");
    }

    #[test]
    fn test_host_url_preserves_sub_path() {
        let url = HostUrl::new("https://example.com/inventree").unwrap();
        assert_eq!(url.as_ref(), "https://example.com/inventree/");
        assert_eq!(
            url.api_url().as_str(),
            "https://example.com/inventree/api/"
        );
    }

    #[test]
    fn test_host_url_api_url() {
        let url = HostUrl::new("http://localhost:8000").unwrap();
        assert_eq!(url.api_url().as_str(), "http://localhost:8000/api/");
    }

    #[test]
    fn test_host_url_accepts_port_and_http() {
        let url = HostUrl::new("http://localhost:8000").unwrap();
        assert_eq!(url.url().scheme(), "http");
        assert_eq!(url.url().port(), Some(8000));
    }

    #[test]
    fn test_host_url_rejects_invalid() {
        // No scheme
        assert!(HostUrl::new("inventree.example.com").is_err());

        // Unsupported scheme
        assert!(HostUrl::new("ftp://example.com").is_err());

        // No host
        assert!(HostUrl::new("https://").is_err());

        // Not a URL at all
        assert!(HostUrl::new("not a url").is_err());
    }

    #[test]
    fn test_host_url_trims_whitespace() {
        let url = HostUrl::new("  https://example.com  ").unwrap();
        assert_eq!(url.as_ref(), "https://example.com/");
    }

    #[test]
    fn test_secret_rejects_empty_value() {
        let result = Secret::new("");
        assert!(matches!(result, Err(ConfigError::EmptySecret)));
    }

    #[test]
    fn test_secret_masks_value_in_debug() {
        let secret = Secret::new("super-secret-token").unwrap();
        let debug_output = format!("{secret:?}");
        assert_eq!(debug_output, "Secret(*****)");
        assert!(!debug_output.contains("super-secret-token"));
    }

    #[test]
    fn test_secret_exposes_value_explicitly() {
        let secret = Secret::new("hunter2").unwrap();
        assert_eq!(secret.expose(), "hunter2");
    }
}
