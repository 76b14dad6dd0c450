//! Company and supplier resources.

use crate::client::ApiClient;
use crate::resource::{FilterSet, Instance, ResourceError, ResourceSchema, ResourceType};

/// A company: a supplier, manufacturer, or customer.
pub struct Company;

impl ResourceType for Company {
    const SCHEMA: ResourceSchema = ResourceSchema::new("Company", "company");
}

impl Instance<Company> {
    /// Lists the supplier parts offered by this company.
    ///
    /// # Errors
    ///
    /// See [`Instance::related`].
    pub async fn supplier_parts(
        &self,
        client: &ApiClient,
        extra_filters: FilterSet,
    ) -> Result<Vec<Instance<SupplierPart>>, ResourceError> {
        self.related(client, "supplier", extra_filters).await
    }
}

/// A supplier part: one company's offering of a part.
pub struct SupplierPart;

impl ResourceType for SupplierPart {
    const SCHEMA: ResourceSchema = ResourceSchema::new("SupplierPart", "company/part");
}

impl Instance<SupplierPart> {
    /// Lists the price breaks of this supplier part.
    ///
    /// # Errors
    ///
    /// See [`Instance::related`].
    pub async fn price_breaks(
        &self,
        client: &ApiClient,
        extra_filters: FilterSet,
    ) -> Result<Vec<Instance<SupplierPriceBreak>>, ResourceError> {
        self.related(client, "part", extra_filters).await
    }
}

/// A supplier price break: quantity-dependent pricing for a supplier part.
pub struct SupplierPriceBreak;

impl ResourceType for SupplierPriceBreak {
    const SCHEMA: ResourceSchema = ResourceSchema::new("SupplierPriceBreak", "company/price-break");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_schemas() {
        assert_eq!(Company::SCHEMA.endpoint, "company");
        assert_eq!(SupplierPart::SCHEMA.endpoint, "company/part");
        assert_eq!(SupplierPriceBreak::SCHEMA.endpoint, "company/price-break");
    }
}
