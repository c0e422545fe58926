use std::collections::{BTreeMap, BTreeSet};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Entity type a bundle of field definitions applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Product,
    Variation,
}

/// Maximum number of values a declared field may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Cardinality {
    Bounded(u32),
    Unlimited,
}

/// Declared field on a bundle, as provided by the field-definition source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FieldDefinition {
    pub name: String,
    pub cardinality: Cardinality,
}

impl FieldDefinition {
    pub fn bounded(name: impl Into<String>, max: u32) -> Self {
        Self {
            name: name.into(),
            cardinality: Cardinality::Bounded(max),
        }
    }

    pub fn unlimited(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cardinality: Cardinality::Unlimited,
        }
    }
}

/// Sample value produced for a declared field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FieldValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

/// Declared fields per bundle, for products and variations.
///
/// Serializable so the CLI can load it from a JSON file and tests can build
/// it inline instead of reaching into a live field registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CatalogSchema {
    #[serde(default)]
    pub product_bundles: BTreeMap<String, Vec<FieldDefinition>>,
    #[serde(default)]
    pub variation_bundles: BTreeMap<String, Vec<FieldDefinition>>,
}

impl CatalogSchema {
    /// Builds a schema with the given fields on the default bundle of each
    /// entity type.
    pub fn with_default_bundles(
        product_fields: Vec<FieldDefinition>,
        variation_fields: Vec<FieldDefinition>,
    ) -> Self {
        let bundle = crate::entity::DEFAULT_BUNDLE.to_string();
        Self {
            product_bundles: BTreeMap::from([(bundle.clone(), product_fields)]),
            variation_bundles: BTreeMap::from([(bundle, variation_fields)]),
        }
    }

    /// Declared fields for an entity type and bundle. A bundle with no
    /// declared fields yields an empty slice, not an error.
    pub fn fields_for(&self, entity: EntityType, bundle: &str) -> &[FieldDefinition] {
        let bundles = match entity {
            EntityType::Product => &self.product_bundles,
            EntityType::Variation => &self.variation_bundles,
        };
        bundles.get(bundle).map(Vec::as_slice).unwrap_or_default()
    }

    /// Checks schema invariants: unique field names per bundle and no
    /// zero-cardinality fields.
    pub fn validate(&self) -> Result<()> {
        let groups = [
            ("product", &self.product_bundles),
            ("variation", &self.variation_bundles),
        ];
        for (entity, bundles) in groups {
            for (bundle, fields) in bundles {
                let mut seen = BTreeSet::new();
                for field in fields {
                    if !seen.insert(field.name.as_str()) {
                        return Err(Error::InvalidSchema(format!(
                            "duplicate field '{}' in {entity} bundle '{bundle}'",
                            field.name
                        )));
                    }
                    if field.cardinality == Cardinality::Bounded(0) {
                        return Err(Error::InvalidSchema(format!(
                            "field '{}' in {entity} bundle '{bundle}' has zero cardinality",
                            field.name
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_for_unknown_bundle_is_empty() {
        let schema = CatalogSchema::default();
        assert!(schema.fields_for(EntityType::Product, "default").is_empty());
        assert!(
            schema
                .fields_for(EntityType::Variation, "default")
                .is_empty()
        );
    }

    #[test]
    fn validate_rejects_duplicate_field_names() {
        let schema = CatalogSchema::with_default_bundles(
            vec![
                FieldDefinition::bounded("body", 1),
                FieldDefinition::unlimited("body"),
            ],
            Vec::new(),
        );
        assert!(matches!(
            schema.validate(),
            Err(Error::InvalidSchema(message)) if message.contains("duplicate field 'body'")
        ));
    }

    #[test]
    fn validate_rejects_zero_cardinality() {
        let schema = CatalogSchema::with_default_bundles(
            Vec::new(),
            vec![FieldDefinition::bounded("description", 0)],
        );
        assert!(matches!(schema.validate(), Err(Error::InvalidSchema(_))));
    }

    #[test]
    fn schema_round_trips_through_json() {
        let schema = CatalogSchema::with_default_bundles(
            vec![
                FieldDefinition::unlimited("variations"),
                FieldDefinition::bounded("body", 1),
            ],
            vec![FieldDefinition::bounded("description", 2)],
        );
        let raw = serde_json::to_string(&schema).expect("serialize");
        let parsed: CatalogSchema = serde_json::from_str(&raw).expect("deserialize");
        assert_eq!(parsed, schema);
    }
}
