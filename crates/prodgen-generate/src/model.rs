use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::errors::GenerationError;

/// Options for a generation run.
///
/// Range invariants are checked once by [`GenerateOptions::validate`] at the
/// start of a run; the engine never re-validates mid-loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Number of products to create.
    pub num: u32,
    /// Delete all existing products before generating.
    pub kill: bool,
    /// Maximum length of generated product titles (1-255).
    pub title_length: u32,
    /// Variations created per product.
    pub num_variations: u32,
    /// Maximum length of variation SKUs (1-255); falls back to
    /// `title_length` when unset.
    pub variation_title_length: Option<u32>,
    /// Inclusive lower bound for variation prices, in minor units.
    pub price_min: i64,
    /// Inclusive upper bound for variation prices, in minor units.
    pub price_max: i64,
    /// Currency code applied to every generated price.
    pub currency: String,
    /// Language codes drawn from per record; empty means use the provider's
    /// default language.
    pub languages: BTreeSet<String>,
    /// Field names excluded from population entirely, resolved once at the
    /// entry point.
    pub skip_fields: BTreeSet<String>,
    /// Whether the kill pass also deletes the variations referenced by the
    /// deleted products.
    pub cascade_delete: bool,
    /// Fixed seed for reproducible runs.
    pub seed: Option<u64>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            num: 50,
            kill: false,
            title_length: 4,
            num_variations: 1,
            variation_title_length: None,
            price_min: 0,
            price_max: 9_999,
            currency: "USD".to_string(),
            languages: BTreeSet::new(),
            skip_fields: BTreeSet::new(),
            cascade_delete: true,
            seed: None,
        }
    }
}

impl GenerateOptions {
    /// Checks the range invariants the operator surface promises.
    pub fn validate(&self) -> Result<(), GenerationError> {
        if !(1..=255).contains(&self.title_length) {
            return Err(GenerationError::InvalidOptions(format!(
                "title_length must be between 1 and 255, got {}",
                self.title_length
            )));
        }
        if let Some(length) = self.variation_title_length
            && !(1..=255).contains(&length)
        {
            return Err(GenerationError::InvalidOptions(format!(
                "variation_title_length must be between 1 and 255, got {length}"
            )));
        }
        if self.price_min < 0 {
            return Err(GenerationError::InvalidOptions(format!(
                "price_min must not be negative, got {}",
                self.price_min
            )));
        }
        if self.price_min > self.price_max {
            return Err(GenerationError::InvalidOptions(format!(
                "price_min {} exceeds price_max {}",
                self.price_min, self.price_max
            )));
        }
        Ok(())
    }

    /// Title-length bound applied to variation SKUs.
    pub fn effective_variation_title_length(&self) -> u32 {
        self.variation_title_length.unwrap_or(self.title_length)
    }

    /// Parses an operator-supplied comma-separated skip list.
    pub fn parse_skip_fields(raw: &str) -> BTreeSet<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Summary of a finished generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationReport {
    pub run_id: String,
    pub requested: u32,
    pub products_created: u64,
    pub variations_created: u64,
    /// Products removed by the kill pass, when one ran and found any.
    pub deleted: Option<u64>,
}

impl GenerationReport {
    /// Pluralized status line for the operator.
    pub fn summary(&self) -> String {
        if self.products_created == 1 {
            "1 product created.".to_string()
        } else {
            format!("Finished creating {} products", self.products_created)
        }
    }

    /// Status line for the kill pass, if it deleted anything.
    pub fn deletion_message(&self) -> Option<String> {
        self.deleted.map(|count| {
            if count == 1 {
                "Deleted 1 product.".to_string()
            } else {
                format!("Deleted {count} products.")
            }
        })
    }
}
