//! Authentication types for the InvenTree API client.
//!
//! This module provides the credential and session types used by the connect
//! handshake. The handshake itself lives in [`crate::client`]: it verifies the
//! server, checks the API version, and resolves the configured credentials
//! into a token-backed [`Session`].

mod credentials;
mod session;

pub use credentials::Credentials;
pub use session::Session;
