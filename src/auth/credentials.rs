//! Credential types for authenticating against an InvenTree server.

use crate::config::Secret;
use crate::error::ConfigError;

/// Credentials used when connecting to the server.
///
/// The server accepts either HTTP basic authentication (username/password)
/// or a previously-issued API token. With basic credentials the connect
/// handshake exchanges them for a token, so the password is only ever sent
/// once per connection.
///
/// # Example
///
/// ```rust
/// use inventree_client::{Credentials, Secret};
///
/// let basic = Credentials::basic("reader", Secret::new("hunter2").unwrap()).unwrap();
/// let token = Credentials::token(Secret::new("inv-token-abc").unwrap());
///
/// // Secrets stay masked in debug output
/// assert!(!format!("{basic:?}").contains("hunter2"));
/// assert!(!format!("{token:?}").contains("inv-token-abc"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Credentials {
    /// HTTP basic authentication with username and password.
    Basic {
        /// The account username.
        username: String,
        /// The account password.
        password: Secret,
    },
    /// A previously-issued API token.
    Token(Secret),
}

impl Credentials {
    /// Creates basic-auth credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyUsername`] if the username is empty.
    pub fn basic(username: impl Into<String>, password: Secret) -> Result<Self, ConfigError> {
        let username = username.into();
        if username.is_empty() {
            return Err(ConfigError::EmptyUsername);
        }
        Ok(Self::Basic { username, password })
    }

    /// Creates token credentials.
    #[must_use]
    pub const fn token(token: Secret) -> Self {
        Self::Token(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_rejects_empty_username() {
        let result = Credentials::basic("", Secret::new("pw").unwrap());
        assert!(matches!(result, Err(ConfigError::EmptyUsername)));
    }

    #[test]
    fn test_basic_holds_username_and_password() {
        let creds = Credentials::basic("reader", Secret::new("pw").unwrap()).unwrap();
        match creds {
            Credentials::Basic { username, password } => {
                assert_eq!(username, "reader");
                assert_eq!(password.expose(), "pw");
            }
            Credentials::Token(_) => panic!("expected basic credentials"),
        }
    }

    #[test]
    fn test_debug_output_masks_secrets() {
        let creds = Credentials::basic("reader", Secret::new("hunter2").unwrap()).unwrap();
        let debug = format!("{creds:?}");
        assert!(debug.contains("reader"));
        assert!(!debug.contains("hunter2"));
    }
}
