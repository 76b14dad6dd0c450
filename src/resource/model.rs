//! Class-level CRUD operations, generic over resource types.
//!
//! [`Model`] is blanket-implemented for every [`ResourceType`], so a marker
//! type like [`Part`](crate::resources::Part) gets `create`, `retrieve`,
//! `list`, and `count` from its schema alone.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::client::ApiClient;
use crate::resource::errors::ResourceError;
use crate::resource::instance::Instance;
use crate::resource::query::{FilterSet, Paginator};
use crate::resource::schema::ResourceType;

/// Class-level operations on a resource type.
///
/// All operations take the client explicitly; there is no global session.
///
/// # Example
///
/// ```rust,ignore
/// use inventree_client::{FilterSet, Model, Part};
/// use serde_json::json;
///
/// let part = Part::create(&client, json!({"name": "M3 screw", "category": 7})).await?;
/// let same = Part::retrieve(&client, part.pk()).await?;
/// let all = Part::list(&client, FilterSet::new().with("category", 7)).await?;
/// let total = Part::count(&client, FilterSet::new()).await?;
/// ```
#[allow(async_fn_in_trait)]
pub trait Model: ResourceType {
    /// Creates a new row with the given fields.
    ///
    /// Any primary-key entry in `fields` is stripped; the server assigns the
    /// key. The returned instance is populated from the server's response.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] with per-field messages if
    /// the server rejects the fields, and [`ResourceError::UnexpectedBody`]
    /// if `fields` is not a JSON object.
    async fn create(
        client: &ApiClient,
        fields: impl Into<Value> + Send,
    ) -> Result<Instance<Self>, ResourceError> {
        let fields = fields.into();
        let Value::Object(mut fields) = fields else {
            return Err(ResourceError::UnexpectedBody {
                resource: Self::SCHEMA.name,
                detail: format!("create data must be a JSON object, got: {fields}"),
            });
        };
        fields.remove(Self::SCHEMA.pk_field);

        tracing::debug!(resource = Self::SCHEMA.name, "Creating instance");
        let response = client
            .post(&Self::SCHEMA.list_path(), Value::Object(fields))
            .await?;
        if !response.is_ok() {
            return Err(ResourceError::from_response(Self::SCHEMA, &response, None));
        }

        Instance::from_value(response.body)
    }

    /// Retrieves one row by primary key.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the primary key does not exist.
    async fn retrieve(client: &ApiClient, pk: i64) -> Result<Instance<Self>, ResourceError> {
        let path = Self::SCHEMA.instance_path(pk);
        let response = client.get(&path, &BTreeMap::new()).await?;
        if !response.is_ok() {
            return Err(ResourceError::from_response(Self::SCHEMA, &response, Some(pk)));
        }

        Instance::from_value(response.body)
    }

    /// Lists rows matching the given filters.
    ///
    /// Pagination is followed transparently: every page is fetched in order
    /// and the items are returned as one flattened sequence in server order.
    /// An empty table yields an empty vector, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] for non-2xx responses and
    /// [`ResourceError::UnexpectedBody`] for malformed list bodies.
    async fn list(
        client: &ApiClient,
        filters: FilterSet,
    ) -> Result<Vec<Instance<Self>>, ResourceError> {
        let values = Paginator::new(client, Self::SCHEMA, filters)
            .collect_all()
            .await?;

        values.into_iter().map(Instance::from_value).collect()
    }

    /// Counts rows matching the given filters without fetching them all.
    ///
    /// Asks for a single-item page and reads the server's `count` field; for
    /// unpaginated (bare array) responses the array length is returned.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] for non-2xx responses and
    /// [`ResourceError::UnexpectedBody`] for bodies with no count.
    async fn count(client: &ApiClient, filters: FilterSet) -> Result<u64, ResourceError> {
        let query = filters.with("limit", 1).into_query();
        let response = client.get(&Self::SCHEMA.list_path(), &query).await?;
        if !response.is_ok() {
            return Err(ResourceError::from_response(Self::SCHEMA, &response, None));
        }

        match &response.body {
            Value::Array(items) => Ok(items.len() as u64),
            Value::Object(map) => map
                .get("count")
                .and_then(Value::as_u64)
                .ok_or_else(|| ResourceError::UnexpectedBody {
                    resource: Self::SCHEMA.name,
                    detail: "list body has no 'count' field".to_string(),
                }),
            other => Err(ResourceError::UnexpectedBody {
                resource: Self::SCHEMA.name,
                detail: format!("expected a list body, got: {other}"),
            }),
        }
    }
}

impl<T: ResourceType> Model for T {}
