//! Build-order resources.

use crate::resource::{ResourceSchema, ResourceType};

/// A build order: an instruction to assemble a quantity of a part.
///
/// Filterable by `part` (the assembly being built).
pub struct Build;

impl ResourceType for Build {
    const SCHEMA: ResourceSchema = ResourceSchema::new("Build", "build");
}
