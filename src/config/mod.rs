//! Configuration types for the InvenTree API client.
//!
//! This module provides the core configuration types used to initialize
//! a connection to an InvenTree server.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ClientConfig`]: The main configuration struct holding all connection settings
//! - [`ClientConfigBuilder`]: A builder for constructing [`ClientConfig`] instances
//! - [`HostUrl`]: A validated server base URL
//! - [`Secret`]: A masked wrapper for passwords and tokens
//! - [`TlsPolicy`]: Certificate-trust selection for TLS connections
//!
//! # Example
//!
//! ```rust
//! use inventree_client::{ClientConfig, Credentials, HostUrl, Secret};
//!
//! let config = ClientConfig::builder()
//!     .host(HostUrl::new("https://inventree.example.com").unwrap())
//!     .credentials(Credentials::basic("reader", Secret::new("hunter2").unwrap()).unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{HostUrl, Secret};

use crate::auth::Credentials;
use crate::error::ConfigError;
use std::time::Duration;

/// Default request timeout, applied when the builder does not override it.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default name under which a token is requested from the server.
pub const DEFAULT_TOKEN_NAME: &str = "inventree-client";

/// Certificate-trust policy for TLS connections.
///
/// Selection affects only how server certificates are validated, never which
/// endpoints are contacted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TlsPolicy {
    /// Validate certificates against the root certificates bundled with the
    /// client (rustls with webpki roots).
    #[default]
    BundledRoots,
    /// Validate certificates against the operating system's certificate store.
    SystemStore,
}

/// Configuration for a connection to an InvenTree server.
///
/// This struct holds everything needed to establish an authenticated
/// connection: the server base URL, credentials, TLS trust policy, request
/// timeout, and the name under which an API token is requested.
///
/// # Thread Safety
///
/// `ClientConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use inventree_client::{ClientConfig, Credentials, HostUrl, Secret, TlsPolicy};
/// use std::time::Duration;
///
/// let config = ClientConfig::builder()
///     .host(HostUrl::new("https://inventree.example.com").unwrap())
///     .credentials(Credentials::token(Secret::new("inv-token").unwrap()))
///     .tls_policy(TlsPolicy::SystemStore)
///     .timeout(Duration::from_secs(30))
///     .build()
///     .unwrap();
///
/// assert_eq!(config.timeout(), Duration::from_secs(30));
/// ```
#[derive(Clone, Debug)]
pub struct ClientConfig {
    host: HostUrl,
    credentials: Credentials,
    tls_policy: TlsPolicy,
    timeout: Duration,
    token_name: String,
}

impl ClientConfig {
    /// Creates a new builder for constructing a `ClientConfig`.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Returns the server base URL.
    #[must_use]
    pub const fn host(&self) -> &HostUrl {
        &self.host
    }

    /// Returns the configured credentials.
    #[must_use]
    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Returns the TLS certificate-trust policy.
    #[must_use]
    pub const fn tls_policy(&self) -> TlsPolicy {
        self.tls_policy
    }

    /// Returns the request timeout applied to every request.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the name under which a token is requested from the server.
    #[must_use]
    pub fn token_name(&self) -> &str {
        &self.token_name
    }
}

// Verify ClientConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClientConfig>();
};

/// Builder for constructing [`ClientConfig`] instances.
///
/// Required fields are `host` and `credentials`. All other fields have
/// sensible defaults.
///
/// # Defaults
///
/// - `tls_policy`: [`TlsPolicy::BundledRoots`]
/// - `timeout`: [`DEFAULT_TIMEOUT`] (10 seconds)
/// - `token_name`: [`DEFAULT_TOKEN_NAME`]
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    host: Option<HostUrl>,
    credentials: Option<Credentials>,
    tls_policy: Option<TlsPolicy>,
    timeout: Option<Duration>,
    token_name: Option<String>,
}

impl ClientConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the server base URL (required).
    #[must_use]
    pub fn host(mut self, host: HostUrl) -> Self {
        self.host = Some(host);
        self
    }

    /// Sets the credentials (required).
    #[must_use]
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Sets the TLS certificate-trust policy.
    #[must_use]
    pub const fn tls_policy(mut self, policy: TlsPolicy) -> Self {
        self.tls_policy = Some(policy);
        self
    }

    /// Sets the request timeout applied to every request.
    ///
    /// This is a client-wide setting, not a per-call override.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the name under which a token is requested from the server.
    ///
    /// Only relevant for basic-auth credentials; the server associates the
    /// issued token with this name.
    #[must_use]
    pub fn token_name(mut self, name: impl Into<String>) -> Self {
        self.token_name = Some(name.into());
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `host` or
    /// `credentials` has not been set.
    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        let host = self
            .host
            .ok_or(ConfigError::MissingRequiredField { field: "host" })?;
        let credentials = self.credentials.ok_or(ConfigError::MissingRequiredField {
            field: "credentials",
        })?;

        Ok(ClientConfig {
            host,
            credentials,
            tls_policy: self.tls_policy.unwrap_or_default(),
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            token_name: self
                .token_name
                .unwrap_or_else(|| DEFAULT_TOKEN_NAME.to_string()),
        })
    }
}
