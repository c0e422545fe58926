use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::entity::{Product, ProductId, Variation, VariationId};
use crate::error::{Error, Result};
use crate::store::CatalogStore;

/// In-memory `CatalogStore` with monotonically increasing ids.
///
/// Serializable so the CLI can persist it to a JSON file between runs; tests
/// use it directly as the store double.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryStore {
    products: BTreeMap<ProductId, Product>,
    variations: BTreeMap<VariationId, Variation>,
    next_product_id: u64,
    next_variation_id: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    pub fn variation_count(&self) -> usize {
        self.variations.len()
    }

    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    pub fn variations(&self) -> impl Iterator<Item = &Variation> {
        self.variations.values()
    }

    pub fn variation(&self, id: VariationId) -> Option<&Variation> {
        self.variations.get(&id)
    }
}

impl CatalogStore for MemoryStore {
    fn save_product(&mut self, mut product: Product) -> Result<Product> {
        let id = match product.id {
            Some(id) => id,
            None => {
                self.next_product_id += 1;
                ProductId(self.next_product_id)
            }
        };
        product.id = Some(id);
        self.products.insert(id, product.clone());
        Ok(product)
    }

    fn save_variation(&mut self, mut variation: Variation) -> Result<Variation> {
        let id = match variation.id {
            Some(id) => id,
            None => {
                self.next_variation_id += 1;
                VariationId(self.next_variation_id)
            }
        };
        variation.id = Some(id);
        self.variations.insert(id, variation.clone());
        Ok(variation)
    }

    fn product_ids(&self) -> Result<Vec<ProductId>> {
        Ok(self.products.keys().copied().collect())
    }

    fn load_products(&self, ids: &[ProductId]) -> Result<Vec<Product>> {
        ids.iter()
            .map(|id| {
                self.products
                    .get(id)
                    .cloned()
                    .ok_or_else(|| Error::Store(format!("product {id} not found")))
            })
            .collect()
    }

    fn delete_products(&mut self, ids: &[ProductId]) -> Result<usize> {
        let mut deleted = 0;
        for id in ids {
            if self.products.remove(id).is_some() {
                deleted += 1;
            }
        }
        Ok(deleted)
    }

    fn delete_variations(&mut self, ids: &[VariationId]) -> Result<usize> {
        let mut deleted = 0;
        for id in ids {
            if self.variations.remove(id).is_some() {
                deleted += 1;
            }
        }
        Ok(deleted)
    }
}
