use crate::entity::{Product, ProductId, Variation, VariationId};
use crate::error::Result;

/// Persistence contract consumed by the generation engine.
///
/// Saves assign ids and return the stored record. Every operation is
/// synchronous and fatal on failure; the engine never retries.
pub trait CatalogStore {
    /// Persists a product, assigning an id if it has none yet.
    fn save_product(&mut self, product: Product) -> Result<Product>;

    /// Persists a variation, assigning an id if it has none yet.
    fn save_variation(&mut self, variation: Variation) -> Result<Variation>;

    /// Ids of all stored products, regardless of bundle or language.
    fn product_ids(&self) -> Result<Vec<ProductId>>;

    /// Loads the products with the given ids, in the given order.
    fn load_products(&self, ids: &[ProductId]) -> Result<Vec<Product>>;

    /// Deletes the given products, returning how many existed.
    fn delete_products(&mut self, ids: &[ProductId]) -> Result<usize>;

    /// Deletes the given variations, returning how many existed.
    fn delete_variations(&mut self, ids: &[VariationId]) -> Result<usize>;
}
