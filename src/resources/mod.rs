//! The concrete resource catalog.
//!
//! Each type here is a zero-sized marker with a static schema; all CRUD
//! operations come from [`Model`](crate::resource::Model), and relationship
//! methods are defined on the corresponding
//! [`Instance`](crate::resource::Instance) types.

mod bom;
mod build;
mod company;
mod part;
mod stock;

pub use bom::BomItem;
pub use build::Build;
pub use company::{Company, SupplierPart, SupplierPriceBreak};
pub use part::{Part, PartCategory};
pub use stock::{StockItem, StockLocation};
