//! HTTP transport for the InvenTree API.
//!
//! This module provides the authenticated [`ApiClient`], the request and
//! response types it works with, and the transport-level error types.
//!
//! Higher-level resource operations live in [`crate::resource`]; they thread
//! a `&ApiClient` through every call rather than relying on any global state.

mod errors;
mod http;
mod request;
mod response;

pub use errors::{ConnectError, HttpError, HttpResponseError, InvalidRequestError};
pub use http::{ApiClient, CLIENT_VERSION, MIN_SUPPORTED_API_VERSION};
pub use request::{ApiRequest, ApiRequestBuilder, HttpMethod};
pub use response::HttpResponse;
