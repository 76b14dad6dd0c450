//! # InvenTree API Client
//!
//! A Rust client for the InvenTree parts-management REST API, exposing
//! server-side tables as typed resource objects with create/retrieve/list/
//! update/delete operations, transparent pagination, filtering, and
//! relationship traversal.
//!
//! ## Overview
//!
//! This client provides:
//! - Type-safe configuration via [`ClientConfig`] and [`ClientConfigBuilder`]
//! - Validated newtypes for the server URL and credentials
//! - A connect handshake that verifies the server, checks its API version,
//!   and resolves credentials into a token-backed [`Session`]
//! - A generic resource engine: [`Model`] for class-level CRUD, [`Instance`]
//!   for row-level state with dirty tracking and partial updates
//! - Transparent pagination: [`Model::list`] follows the server's `next`
//!   links and returns one flattened sequence
//! - Relationship traversal, e.g. a part fetching its BOM items
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use inventree_client::{
//!     ApiClient, ClientConfig, Credentials, FilterSet, HostUrl, Model, Part, Secret,
//! };
//! use serde_json::json;
//!
//! // Configure and connect
//! let config = ClientConfig::builder()
//!     .host(HostUrl::new("https://inventree.example.com")?)
//!     .credentials(Credentials::basic("reader", Secret::new("hunter2")?)?)
//!     .build()?;
//! let client = ApiClient::connect(&config).await?;
//!
//! // Create a part
//! let mut part = Part::create(&client, json!({
//!     "name": "M3 screw",
//!     "description": "M3 x 8mm pan head",
//!     "category": 7,
//! })).await?;
//!
//! // List parts in a category (pagination handled transparently)
//! let parts = Part::list(&client, FilterSet::new().with("category", 7)).await?;
//!
//! // Update only the changed fields
//! part.set("description", "M3 x 10mm pan head")?;
//! part.save(&client).await?;
//!
//! // Traverse relationships
//! let bom = part.bom_items(&client, FilterSet::new()).await?;
//!
//! // Delete (invalidates the local instance)
//! part.delete(&client).await?;
//! ```
//!
//! ## Error Handling
//!
//! Failures are surfaced immediately as typed errors; the client never
//! retries and never swallows an error:
//!
//! - [`ConnectError`] for handshake failures (unreachable host, bad
//!   credentials, unsupported server version)
//! - [`HttpError`] for transport-level failures
//! - [`ResourceError`] for semantic failures: [`ResourceError::NotFound`],
//!   [`ResourceError::ValidationFailed`] with per-field messages,
//!   [`ResourceError::StaleInstance`], and the purely local
//!   [`ResourceError::InvalidInstance`] after a delete
//!
//! ## Design Principles
//!
//! - **No global state**: the client is passed explicitly to every operation
//! - **Fail-fast validation**: all newtypes validate on construction
//! - **Thread-safe**: all shared types are `Send + Sync`
//! - **Async-first**: designed for use with the Tokio runtime
//! - **No implicit I/O**: field edits are local until an explicit save

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod resource;
pub mod resources;

// Re-export public types at crate root for convenience
pub use auth::{Credentials, Session};
pub use config::{
    ClientConfig, ClientConfigBuilder, HostUrl, Secret, TlsPolicy, DEFAULT_TIMEOUT,
    DEFAULT_TOKEN_NAME,
};
pub use error::ConfigError;

// Re-export transport types
pub use client::{
    ApiClient, ApiRequest, ApiRequestBuilder, ConnectError, HttpError, HttpMethod, HttpResponse,
    HttpResponseError, InvalidRequestError, CLIENT_VERSION, MIN_SUPPORTED_API_VERSION,
};

// Re-export the resource engine
pub use resource::{FilterSet, Instance, Model, ResourceError, ResourceSchema, ResourceType};

// Re-export the resource catalog
pub use resources::{
    BomItem, Build, Company, Part, PartCategory, StockItem, StockLocation, SupplierPart,
    SupplierPriceBreak,
};
