//! Static schemas describing server-side resources.
//!
//! Every resource type declares one [`ResourceSchema`] constant: its human
//! name, its endpoint path, and its primary-key field. The generic engine in
//! [`crate::resource`] is parameterized over these schemas, so each resource
//! type is a zero-sized marker rather than a hand-written client.

/// The immutable description of one server-side resource.
///
/// Defined at compile time and never mutated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResourceSchema {
    /// Human-readable type name, used in error messages (e.g., "Part").
    pub name: &'static str,
    /// Endpoint path relative to the API root, without slashes (e.g.,
    /// "part" or "part/category").
    pub endpoint: &'static str,
    /// Name of the primary-key field in instance data.
    pub pk_field: &'static str,
}

impl ResourceSchema {
    /// Creates a schema with the default primary-key field (`pk`).
    #[must_use]
    pub const fn new(name: &'static str, endpoint: &'static str) -> Self {
        Self {
            name,
            endpoint,
            pk_field: "pk",
        }
    }

    /// Returns the list/create endpoint path (`{endpoint}/`).
    #[must_use]
    pub fn list_path(&self) -> String {
        format!("{}/", self.endpoint)
    }

    /// Returns the endpoint path for one instance (`{endpoint}/{pk}/`).
    #[must_use]
    pub fn instance_path(&self, pk: i64) -> String {
        format!("{}/{pk}/", self.endpoint)
    }
}

/// A server-side resource type.
///
/// Implementors are zero-sized markers (e.g., [`Part`](crate::resources::Part))
/// carrying a static schema. All operations come from the blanket
/// [`Model`](crate::resource::Model) implementation.
pub trait ResourceType: Send + Sync + Sized {
    /// The static schema for this resource type.
    const SCHEMA: ResourceSchema;
}
