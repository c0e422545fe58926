//! Synthetic catalog generation engine for Prodgen.
//!
//! Consumes a `CatalogSchema` plus `GenerateOptions` to create products and
//! their priced variations against any `CatalogStore`, optionally deleting
//! all existing products first.

pub mod engine;
pub mod errors;
pub mod fields;
pub mod model;
pub mod providers;
pub mod words;

pub use engine::GenerationEngine;
pub use errors::GenerationError;
pub use fields::{FieldBehavior, FieldRegistry, VARIATIONS_FIELD};
pub use model::{GenerateOptions, GenerationReport};
pub use providers::{
    CurrencyProvider, FakeSampler, FieldSampler, LanguageProvider, StaticCurrencies,
    StaticLanguages,
};
