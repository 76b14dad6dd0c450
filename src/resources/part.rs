//! Part and part-category resources.

use crate::client::ApiClient;
use crate::resource::{FilterSet, Instance, Model, ResourceError, ResourceSchema, ResourceType};
use crate::resources::bom::BomItem;
use crate::resources::build::Build;
use crate::resources::company::SupplierPart;
use crate::resources::stock::StockItem;

/// A part: one entry in the parts table.
///
/// # Example
///
/// ```rust,ignore
/// use inventree_client::{FilterSet, Model, Part};
///
/// let part = Part::retrieve(&client, 10).await?;
/// let bom = part.bom_items(&client, FilterSet::new()).await?;
/// ```
pub struct Part;

impl ResourceType for Part {
    const SCHEMA: ResourceSchema = ResourceSchema::new("Part", "part");
}

impl Instance<Part> {
    /// Lists the BOM items of this part.
    ///
    /// # Errors
    ///
    /// See [`Instance::related`].
    pub async fn bom_items(
        &self,
        client: &ApiClient,
        extra_filters: FilterSet,
    ) -> Result<Vec<Instance<BomItem>>, ResourceError> {
        self.related(client, "part", extra_filters).await
    }

    /// Lists the stock items of this part.
    ///
    /// # Errors
    ///
    /// See [`Instance::related`].
    pub async fn stock_items(
        &self,
        client: &ApiClient,
        extra_filters: FilterSet,
    ) -> Result<Vec<Instance<StockItem>>, ResourceError> {
        self.related(client, "part", extra_filters).await
    }

    /// Lists the supplier parts of this part.
    ///
    /// # Errors
    ///
    /// See [`Instance::related`].
    pub async fn supplier_parts(
        &self,
        client: &ApiClient,
        extra_filters: FilterSet,
    ) -> Result<Vec<Instance<SupplierPart>>, ResourceError> {
        self.related(client, "part", extra_filters).await
    }

    /// Lists the build orders for this part.
    ///
    /// # Errors
    ///
    /// See [`Instance::related`].
    pub async fn builds(
        &self,
        client: &ApiClient,
        extra_filters: FilterSet,
    ) -> Result<Vec<Instance<Build>>, ResourceError> {
        self.related(client, "part", extra_filters).await
    }

    /// Retrieves the category this part belongs to, if any.
    ///
    /// # Errors
    ///
    /// The failure modes of [`Model::retrieve`], plus
    /// [`ResourceError::UnknownField`] if the part data has no `category`
    /// field.
    pub async fn category(
        &self,
        client: &ApiClient,
    ) -> Result<Option<Instance<PartCategory>>, ResourceError> {
        match self.get_i64("category")? {
            Some(pk) => PartCategory::retrieve(client, pk).await.map(Some),
            None => Ok(None),
        }
    }
}

/// A part category: a node in the category tree.
pub struct PartCategory;

impl ResourceType for PartCategory {
    const SCHEMA: ResourceSchema = ResourceSchema::new("PartCategory", "part/category");
}

impl Instance<PartCategory> {
    /// Lists the parts in this category.
    ///
    /// # Errors
    ///
    /// See [`Instance::related`].
    pub async fn parts(
        &self,
        client: &ApiClient,
        extra_filters: FilterSet,
    ) -> Result<Vec<Instance<Part>>, ResourceError> {
        self.related(client, "category", extra_filters).await
    }

    /// Lists the direct child categories of this category.
    ///
    /// # Errors
    ///
    /// See [`Instance::related`].
    pub async fn child_categories(
        &self,
        client: &ApiClient,
        extra_filters: FilterSet,
    ) -> Result<Vec<Instance<PartCategory>>, ResourceError> {
        self.related(client, "parent", extra_filters).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_schema() {
        assert_eq!(Part::SCHEMA.name, "Part");
        assert_eq!(Part::SCHEMA.endpoint, "part");
        assert_eq!(Part::SCHEMA.pk_field, "pk");
    }

    #[test]
    fn test_part_category_schema_uses_nested_endpoint() {
        assert_eq!(PartCategory::SCHEMA.endpoint, "part/category");
        assert_eq!(PartCategory::SCHEMA.instance_path(3), "part/category/3/");
    }
}
