//! Stock resources.

use crate::client::ApiClient;
use crate::resource::{FilterSet, Instance, ResourceError, ResourceSchema, ResourceType};

/// A stock item: a quantity of one part held somewhere.
pub struct StockItem;

impl ResourceType for StockItem {
    const SCHEMA: ResourceSchema = ResourceSchema::new("StockItem", "stock");
}

/// A stock location: a node in the location tree.
pub struct StockLocation;

impl ResourceType for StockLocation {
    const SCHEMA: ResourceSchema = ResourceSchema::new("StockLocation", "stock/location");
}

impl Instance<StockLocation> {
    /// Lists the stock items held at this location.
    ///
    /// # Errors
    ///
    /// See [`Instance::related`].
    pub async fn stock_items(
        &self,
        client: &ApiClient,
        extra_filters: FilterSet,
    ) -> Result<Vec<Instance<StockItem>>, ResourceError> {
        self.related(client, "location", extra_filters).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_schemas() {
        assert_eq!(StockItem::SCHEMA.endpoint, "stock");
        assert_eq!(StockLocation::SCHEMA.endpoint, "stock/location");
    }
}
