use std::collections::HashMap;

/// Field name carrying the product-to-variation relationship.
pub const VARIATIONS_FIELD: &str = "variations";

/// How a declared field is filled during population.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldBehavior {
    /// Request sample values from the sampler, bounded by cardinality.
    Samples,
    /// Fan out generated variations. Only applies to product bundles.
    Variations,
}

/// Maps field names to a population behavior, defaulting to sample
/// generation for any name without an override.
#[derive(Debug, Clone)]
pub struct FieldRegistry {
    overrides: HashMap<&'static str, FieldBehavior>,
}

impl FieldRegistry {
    pub fn new() -> Self {
        let mut overrides = HashMap::new();
        overrides.insert(VARIATIONS_FIELD, FieldBehavior::Variations);
        Self { overrides }
    }

    pub fn behavior(&self, field_name: &str) -> FieldBehavior {
        self.overrides
            .get(field_name)
            .copied()
            .unwrap_or(FieldBehavior::Samples)
    }
}

impl Default for FieldRegistry {
    fn default() -> Self {
        Self::new()
    }
}
