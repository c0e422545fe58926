use std::collections::BTreeMap;
use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::fields::FieldValue;

/// Bundle every generated record is created under.
pub const DEFAULT_BUNDLE: &str = "default";

/// Identifier assigned to a product by the store on first save.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier assigned to a variation by the store on first save.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct VariationId(pub u64);

impl fmt::Display for VariationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monetary value carried by a variation.
///
/// `amount` is expressed in minor units of `currency_code`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Price {
    pub amount: i64,
    pub currency_code: String,
}

/// Top-level catalog record.
///
/// `variations` holds the ids of the variations saved for this product, in
/// generation order. Extra declared fields live in `fields`, keyed by field
/// name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Product {
    /// Absent until the store assigns one on save.
    pub id: Option<ProductId>,
    pub bundle: String,
    pub langcode: String,
    pub title: String,
    /// Marks the record as synthetic so downstream tooling can tell it apart.
    pub generated: bool,
    pub variations: Vec<VariationId>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub fields: BTreeMap<String, Vec<FieldValue>>,
}

impl Product {
    /// Builds an unsaved synthetic product in the default bundle.
    pub fn new(langcode: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: None,
            bundle: DEFAULT_BUNDLE.to_string(),
            langcode: langcode.into(),
            title: title.into(),
            generated: true,
            variations: Vec::new(),
            fields: BTreeMap::new(),
        }
    }
}

/// Priced, SKU-bearing record belonging to exactly one product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Variation {
    /// Absent until the store assigns one on save.
    pub id: Option<VariationId>,
    pub bundle: String,
    pub langcode: String,
    pub sku: String,
    pub title: String,
    pub price: Price,
    /// Marks the record as synthetic so downstream tooling can tell it apart.
    pub generated: bool,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub fields: BTreeMap<String, Vec<FieldValue>>,
}

impl Variation {
    /// Builds an unsaved synthetic variation in the default bundle.
    ///
    /// The SKU doubles as the variation title.
    pub fn new(langcode: impl Into<String>, sku: impl Into<String>, price: Price) -> Self {
        let sku = sku.into();
        Self {
            id: None,
            bundle: DEFAULT_BUNDLE.to_string(),
            langcode: langcode.into(),
            title: sku.clone(),
            sku,
            price,
            generated: true,
            fields: BTreeMap::new(),
        }
    }
}
