//! Generic resource engine: schemas, instances, queries, and CRUD.
//!
//! A resource is one server-side table exposed via REST endpoints. Each
//! resource type is a zero-sized marker declaring a static [`ResourceSchema`];
//! the engine in this module supplies everything else:
//!
//! - [`Model`]: class-level `create` / `retrieve` / `list` / `count`
//! - [`Instance`]: one row with field access, dirty tracking, `save` /
//!   `update` / `refresh` / `delete`, and relationship traversal
//! - [`FilterSet`]: verbatim query filters for list operations
//! - [`ResourceError`]: the semantic error taxonomy for all of the above
//!
//! The concrete resource catalog (parts, stock, companies, builds) lives in
//! [`crate::resources`].

mod errors;
mod instance;
mod model;
mod query;
mod schema;

pub use errors::ResourceError;
pub use instance::Instance;
pub use model::Model;
pub use query::FilterSet;
pub use schema::{ResourceSchema, ResourceType};
