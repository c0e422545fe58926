use std::fs;
use std::path::Path;

use prodgen_core::{CatalogSchema, FieldDefinition};

use crate::CliError;

/// Loads a catalog schema from a JSON file written by an operator.
pub fn load_schema(path: &Path) -> Result<CatalogSchema, CliError> {
    let raw = fs::read_to_string(path)?;
    let schema: CatalogSchema = serde_json::from_str(&raw)?;
    schema.validate()?;
    Ok(schema)
}

/// Built-in schema used when no `--schema` file is given: products carry a
/// variation relationship, a body, and free-form tags; variations carry a
/// description.
pub fn default_schema() -> CatalogSchema {
    CatalogSchema::with_default_bundles(
        vec![
            FieldDefinition::unlimited("variations"),
            FieldDefinition::bounded("body", 1),
            FieldDefinition::unlimited("tags"),
        ],
        vec![FieldDefinition::bounded("description", 1)],
    )
}
