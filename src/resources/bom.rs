//! Bill-of-materials resources.

use crate::client::ApiClient;
use crate::resource::{Instance, Model, ResourceError, ResourceSchema, ResourceType};
use crate::resources::part::Part;

/// A BOM item: one sub-part line in a part's bill of materials.
///
/// Filterable by `part` (the assembly) and `sub_part` (the component).
pub struct BomItem;

impl ResourceType for BomItem {
    const SCHEMA: ResourceSchema = ResourceSchema::new("BomItem", "bom");
}

impl Instance<BomItem> {
    /// Retrieves the component part this BOM line refers to.
    ///
    /// # Errors
    ///
    /// The failure modes of [`Model::retrieve`], plus
    /// [`ResourceError::UnknownField`] if the data has no `sub_part` field.
    pub async fn sub_part(&self, client: &ApiClient) -> Result<Option<Instance<Part>>, ResourceError> {
        match self.get_i64("sub_part")? {
            Some(pk) => Part::retrieve(client, pk).await.map(Some),
            None => Ok(None),
        }
    }
}
