//! Core contracts and data model for Prodgen.
//!
//! This crate defines the canonical catalog entities, field-definition
//! types, the store contract, and the in-memory store shared by the
//! generation engine, the CLI, and tests.

pub mod entity;
pub mod error;
pub mod fields;
pub mod memory;
pub mod store;

pub use entity::{DEFAULT_BUNDLE, Price, Product, ProductId, Variation, VariationId};
pub use error::{Error, Result};
pub use fields::{Cardinality, CatalogSchema, EntityType, FieldDefinition, FieldValue};
pub use memory::MemoryStore;
pub use store::CatalogStore;

/// Current contract version for serialized catalog artifacts.
pub const SCHEMA_VERSION: &str = "0.1";
