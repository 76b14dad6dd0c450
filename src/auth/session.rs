//! Session state for an authenticated server connection.
//!
//! This module provides the [`Session`] type holding the state established
//! by the connect handshake.

use crate::config::Secret;
use url::Url;

/// The authenticated state of a server connection.
///
/// A session is created by the connect handshake and is read-only afterwards:
/// the API root URL, the resolved token, and the server details never change
/// for the lifetime of the connection. Callers needing different credentials
/// or a different server connect again.
///
/// # Thread Safety
///
/// `Session` is `Send + Sync`, making it safe to share across async tasks.
#[derive(Clone, Debug)]
pub struct Session {
    api_url: Url,
    token: Secret,
    server_name: String,
    api_version: u32,
}

impl Session {
    /// Creates a new session from the results of the connect handshake.
    pub(crate) const fn new(
        api_url: Url,
        token: Secret,
        server_name: String,
        api_version: u32,
    ) -> Self {
        Self {
            api_url,
            token,
            server_name,
            api_version,
        }
    }

    /// Returns the API root URL (`{base}/api/`).
    #[must_use]
    pub const fn api_url(&self) -> &Url {
        &self.api_url
    }

    /// Returns the token used to authenticate requests.
    pub(crate) const fn token(&self) -> &Secret {
        &self.token
    }

    /// Returns the server name reported by the handshake.
    #[must_use]
    pub fn server_name(&self) -> &str {
        &self.server_name
    }

    /// Returns the API version reported by the handshake.
    #[must_use]
    pub const fn api_version(&self) -> u32 {
        self.api_version
    }
}

// Verify Session is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Session>();
};
