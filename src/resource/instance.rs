//! In-memory representation of one server-side row.
//!
//! An [`Instance`] holds the row's field data as a JSON object map, the
//! immutable primary key, and a baseline snapshot used to compute the partial
//! PATCH body on save. Field edits are purely local until [`Instance::save`]
//! or [`Instance::update`] is called; there is no implicit flushing.

use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

use serde_json::{Map, Value};

use crate::client::ApiClient;
use crate::resource::errors::ResourceError;
use crate::resource::model::Model;
use crate::resource::query::FilterSet;
use crate::resource::schema::ResourceType;

/// A local instance of one server-side row.
///
/// Created by the `create`, `retrieve`, and `list` operations on
/// [`Model`]. The primary key is immutable once fetched; field values may be
/// refreshed by [`Instance::refresh`] or mutated locally with
/// [`Instance::set`] and then explicitly saved.
///
/// Deleting an instance invalidates it: any further field access or
/// operation fails locally with [`ResourceError::InvalidInstance`] without
/// touching the network.
///
/// # Example
///
/// ```rust,ignore
/// use inventree_client::{FilterSet, Instance, Model, Part};
///
/// let mut part = Part::retrieve(&client, 10).await?;
/// println!("{:?}", part.get_str("name")?);
///
/// part.set("description", "Updated description")?;
/// part.save(&client).await?; // PATCHes only the changed field
/// ```
pub struct Instance<T: ResourceType> {
    fields: Map<String, Value>,
    baseline: Map<String, Value>,
    pk: i64,
    deleted: bool,
    _marker: PhantomData<T>,
}

impl<T: ResourceType> Instance<T> {
    /// Builds an instance from a server-returned JSON object.
    pub(crate) fn from_value(value: Value) -> Result<Self, ResourceError> {
        let Value::Object(fields) = value else {
            return Err(ResourceError::UnexpectedBody {
                resource: T::SCHEMA.name,
                detail: format!("expected an object, got: {value}"),
            });
        };
        let pk = read_pk::<T>(&fields)?;

        Ok(Self {
            baseline: fields.clone(),
            fields,
            pk,
            deleted: false,
            _marker: PhantomData,
        })
    }

    /// Returns the primary key. Immutable for the lifetime of the instance.
    #[must_use]
    pub const fn pk(&self) -> i64 {
        self.pk
    }

    /// Returns `false` once the instance has been deleted.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        !self.deleted
    }

    /// Returns the full field map.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidInstance`] if the instance was deleted.
    pub fn fields(&self) -> Result<&Map<String, Value>, ResourceError> {
        self.ensure_valid()?;
        Ok(&self.fields)
    }

    /// Returns a field value by name.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidInstance`] if the instance was deleted
    /// and [`ResourceError::UnknownField`] if the field is not present.
    pub fn get(&self, field: &str) -> Result<&Value, ResourceError> {
        self.ensure_valid()?;
        self.fields
            .get(field)
            .ok_or_else(|| ResourceError::UnknownField {
                resource: T::SCHEMA.name,
                field: field.to_string(),
            })
    }

    /// Returns a string field, or `None` if the value is null or not a string.
    ///
    /// # Errors
    ///
    /// See [`Instance::get`].
    pub fn get_str(&self, field: &str) -> Result<Option<&str>, ResourceError> {
        Ok(self.get(field)?.as_str())
    }

    /// Returns an integer field, or `None` if the value is null or not an integer.
    ///
    /// # Errors
    ///
    /// See [`Instance::get`].
    pub fn get_i64(&self, field: &str) -> Result<Option<i64>, ResourceError> {
        Ok(self.get(field)?.as_i64())
    }

    /// Returns a float field, or `None` if the value is null or not a number.
    ///
    /// # Errors
    ///
    /// See [`Instance::get`].
    pub fn get_f64(&self, field: &str) -> Result<Option<f64>, ResourceError> {
        Ok(self.get(field)?.as_f64())
    }

    /// Returns a boolean field, or `None` if the value is null or not a boolean.
    ///
    /// # Errors
    ///
    /// See [`Instance::get`].
    pub fn get_bool(&self, field: &str) -> Result<Option<bool>, ResourceError> {
        Ok(self.get(field)?.as_bool())
    }

    /// Sets a field value locally. Nothing is sent until [`Instance::save`].
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidInstance`] if the instance was deleted
    /// and [`ResourceError::ImmutablePk`] when attempting to change the
    /// primary-key field.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Result<(), ResourceError> {
        self.ensure_valid()?;
        let field = field.into();
        if field == T::SCHEMA.pk_field {
            return Err(ResourceError::ImmutablePk {
                resource: T::SCHEMA.name,
                pk_field: T::SCHEMA.pk_field,
            });
        }
        self.fields.insert(field, value.into());
        Ok(())
    }

    /// Returns `true` if any field differs from the last server state.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        !self.changed_fields().is_empty()
    }

    /// Returns the fields that differ from the last server state.
    #[must_use]
    pub fn changed_fields(&self) -> Map<String, Value> {
        diff_fields(&self.fields, &self.baseline)
    }

    /// Saves locally-changed fields with a partial PATCH.
    ///
    /// Only the fields that differ from the last server state are sent. A
    /// clean instance saves without issuing a request. On success the local
    /// state is replaced by the server's response.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if the server rejects the
    /// changes, [`ResourceError::StaleInstance`] if the primary key no longer
    /// resolves, and [`ResourceError::InvalidInstance`] if the instance was
    /// deleted.
    pub async fn save(&mut self, client: &ApiClient) -> Result<(), ResourceError> {
        self.ensure_valid()?;
        let changes = self.changed_fields();
        if changes.is_empty() {
            return Ok(());
        }
        self.patch(client, Value::Object(changes)).await
    }

    /// Applies the given field changes and saves them in one call.
    ///
    /// Equivalent to calling [`Instance::set`] for each entry followed by
    /// [`Instance::save`]. Any primary-key entry in `changes` is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::UnexpectedBody`] if `changes` is not a JSON
    /// object; otherwise see [`Instance::save`].
    pub async fn update(
        &mut self,
        client: &ApiClient,
        changes: impl Into<Value>,
    ) -> Result<(), ResourceError> {
        self.ensure_valid()?;
        let changes = changes.into();
        let Value::Object(changes) = changes else {
            return Err(ResourceError::UnexpectedBody {
                resource: T::SCHEMA.name,
                detail: format!("update data must be a JSON object, got: {changes}"),
            });
        };

        for (field, value) in changes {
            if field != T::SCHEMA.pk_field {
                self.set(field, value)?;
            }
        }
        self.save(client).await
    }

    /// Re-fetches the row and replaces the local field state.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::StaleInstance`] if the primary key no longer
    /// resolves and [`ResourceError::InvalidInstance`] if the instance was
    /// deleted.
    pub async fn refresh(&mut self, client: &ApiClient) -> Result<(), ResourceError> {
        self.ensure_valid()?;
        let path = T::SCHEMA.instance_path(self.pk);
        let response = client.get(&path, &BTreeMap::new()).await?;
        if !response.is_ok() {
            return Err(
                ResourceError::from_response(T::SCHEMA, &response, Some(self.pk)).into_stale(),
            );
        }
        self.replace_fields(response.body)
    }

    /// Deletes the row on the server and invalidates this instance.
    ///
    /// After a successful delete, every further field access or operation on
    /// this instance fails with [`ResourceError::InvalidInstance`].
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the primary key was already
    /// deleted on the server, and [`ResourceError::InvalidInstance`] if this
    /// instance was already deleted locally.
    pub async fn delete(&mut self, client: &ApiClient) -> Result<(), ResourceError> {
        self.ensure_valid()?;
        let path = T::SCHEMA.instance_path(self.pk);
        let response = client.delete(&path).await?;
        if !response.is_ok() {
            return Err(ResourceError::from_response(T::SCHEMA, &response, Some(self.pk)));
        }

        self.deleted = true;
        tracing::debug!(resource = T::SCHEMA.name, pk = self.pk, "Deleted instance");
        Ok(())
    }

    /// Lists instances of a related resource type.
    ///
    /// Issues a list query against `R` with this instance's primary key as
    /// the `foreign_key` filter, alongside any extra ad-hoc filters. This is
    /// the building block for the named relationship methods in
    /// [`crate::resources`].
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidInstance`] if this instance was
    /// deleted; otherwise the failure modes of [`Model::list`].
    pub async fn related<R: ResourceType>(
        &self,
        client: &ApiClient,
        foreign_key: &str,
        extra_filters: FilterSet,
    ) -> Result<Vec<Instance<R>>, ResourceError> {
        self.ensure_valid()?;
        R::list(client, extra_filters.with(foreign_key, self.pk)).await
    }

    fn ensure_valid(&self) -> Result<(), ResourceError> {
        if self.deleted {
            Err(ResourceError::InvalidInstance {
                resource: T::SCHEMA.name,
            })
        } else {
            Ok(())
        }
    }

    async fn patch(&mut self, client: &ApiClient, body: Value) -> Result<(), ResourceError> {
        let path = T::SCHEMA.instance_path(self.pk);
        let response = client.patch(&path, body).await?;
        if !response.is_ok() {
            return Err(
                ResourceError::from_response(T::SCHEMA, &response, Some(self.pk)).into_stale(),
            );
        }
        self.replace_fields(response.body)
    }

    /// Replaces local state with a server-returned object, keeping the pk.
    fn replace_fields(&mut self, body: Value) -> Result<(), ResourceError> {
        let Value::Object(fields) = body else {
            return Err(ResourceError::UnexpectedBody {
                resource: T::SCHEMA.name,
                detail: format!("expected an object, got: {body}"),
            });
        };

        let pk = read_pk::<T>(&fields)?;
        if pk != self.pk {
            return Err(ResourceError::UnexpectedBody {
                resource: T::SCHEMA.name,
                detail: format!("primary key changed from {} to {pk}", self.pk),
            });
        }

        self.baseline = fields.clone();
        self.fields = fields;
        Ok(())
    }
}

impl<T: ResourceType> Clone for Instance<T> {
    fn clone(&self) -> Self {
        Self {
            fields: self.fields.clone(),
            baseline: self.baseline.clone(),
            pk: self.pk,
            deleted: self.deleted,
            _marker: PhantomData,
        }
    }
}

impl<T: ResourceType> fmt::Debug for Instance<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instance")
            .field("resource", &T::SCHEMA.name)
            .field("pk", &self.pk)
            .field("deleted", &self.deleted)
            .field("fields", &self.fields)
            .finish()
    }
}

/// Reads and validates the primary key from instance data.
fn read_pk<T: ResourceType>(fields: &Map<String, Value>) -> Result<i64, ResourceError> {
    fields
        .get(T::SCHEMA.pk_field)
        .and_then(Value::as_i64)
        .filter(|pk| *pk > 0)
        .ok_or(ResourceError::MissingPk {
            resource: T::SCHEMA.name,
            pk_field: T::SCHEMA.pk_field,
        })
}

/// Returns the entries of `current` that differ from `baseline`.
///
/// Fields removed from `current` are not reported; a partial PATCH cannot
/// express deletion, only new values.
fn diff_fields(current: &Map<String, Value>, baseline: &Map<String, Value>) -> Map<String, Value> {
    current
        .iter()
        .filter(|(key, value)| baseline.get(*key) != Some(value))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}
