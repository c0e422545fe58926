use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use prodgen_core::{
    Cardinality, CatalogSchema, CatalogStore, DEFAULT_BUNDLE, EntityType, Error as CoreError,
    Price, Product, Variation, VariationId,
};

use crate::errors::GenerationError;
use crate::fields::{FieldBehavior, FieldRegistry};
use crate::model::{GenerateOptions, GenerationReport};
use crate::providers::{CurrencyProvider, FieldSampler, LanguageProvider};
use crate::words::word;

/// Cap substituted for unlimited cardinality when deciding how many samples
/// to request.
const UNLIMITED_SAMPLE_CAP: std::ops::RangeInclusive<u32> = 1..=3;

/// Entry point for generating catalog records against a store.
///
/// Strictly sequential: a product is saved only after all of its variations
/// are, and the first store failure aborts the run with no rollback of
/// records already persisted.
pub struct GenerationEngine<'a> {
    store: &'a mut dyn CatalogStore,
    sampler: &'a dyn FieldSampler,
    languages: &'a dyn LanguageProvider,
    currencies: &'a dyn CurrencyProvider,
    registry: FieldRegistry,
}

impl<'a> GenerationEngine<'a> {
    pub fn new(
        store: &'a mut dyn CatalogStore,
        sampler: &'a dyn FieldSampler,
        languages: &'a dyn LanguageProvider,
        currencies: &'a dyn CurrencyProvider,
    ) -> Self {
        Self {
            store,
            sampler,
            languages,
            currencies,
            registry: FieldRegistry::new(),
        }
    }

    /// Runs one generation pass: optional kill, then exactly `options.num`
    /// products with their variations.
    pub fn run(
        &mut self,
        schema: &CatalogSchema,
        options: &GenerateOptions,
    ) -> Result<GenerationReport, GenerationError> {
        options.validate()?;
        schema.validate()?;
        if !self.currencies.currencies().contains_key(&options.currency) {
            return Err(GenerationError::UnknownCurrency(options.currency.clone()));
        }

        let run_id = uuid::Uuid::new_v4().to_string();
        let mut rng = match options.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_rng(&mut rand::rng()),
        };

        let mut report = GenerationReport {
            run_id: run_id.clone(),
            requested: options.num,
            products_created: 0,
            variations_created: 0,
            deleted: None,
        };

        info!(
            run_id = %run_id,
            num = options.num,
            kill = options.kill,
            seed = options.seed,
            "generation started"
        );

        if options.kill {
            let deleted = self.delete_all_products(options.cascade_delete)?;
            if deleted > 0 {
                report.deleted = Some(deleted as u64);
                info!(run_id = %run_id, deleted, "existing products deleted");
            }
        }

        for _ in 0..options.num {
            let product = self.create_product(schema, options, &mut rng)?;
            report.products_created += 1;
            report.variations_created += product.variations.len() as u64;
        }

        info!(
            run_id = %run_id,
            products = report.products_created,
            variations = report.variations_created,
            "generation finished"
        );
        Ok(report)
    }

    /// Deletes every stored product, returning how many were removed.
    ///
    /// With `cascade`, the variations referenced by the deleted products go
    /// too. An empty store is a no-op.
    pub fn delete_all_products(&mut self, cascade: bool) -> Result<usize, GenerationError> {
        let ids = self.store.product_ids()?;
        if ids.is_empty() {
            return Ok(0);
        }
        let products = self.store.load_products(&ids)?;
        if cascade {
            let variation_ids: Vec<VariationId> = products
                .iter()
                .flat_map(|product| product.variations.iter().copied())
                .collect();
            if !variation_ids.is_empty() {
                self.store.delete_variations(&variation_ids)?;
            }
        }
        Ok(self.store.delete_products(&ids)?)
    }

    /// Synthesizes and saves one product with its declared fields, fanning
    /// out variations when the product bundle declares that field.
    fn create_product(
        &mut self,
        schema: &CatalogSchema,
        options: &GenerateOptions,
        rng: &mut ChaCha8Rng,
    ) -> Result<Product, GenerationError> {
        let title = word(rng, options.title_length);
        let langcode = self.resolve_langcode(options, rng);
        let mut product = Product::new(langcode, title);

        for field in schema.fields_for(EntityType::Product, DEFAULT_BUNDLE) {
            if options.skip_fields.contains(&field.name) {
                continue;
            }
            match self.registry.behavior(&field.name) {
                FieldBehavior::Variations => {
                    let mut ids = Vec::with_capacity(options.num_variations as usize);
                    for _ in 0..options.num_variations {
                        let variation = self.create_variation(schema, options, rng)?;
                        let id = variation.id.ok_or_else(|| {
                            CoreError::Store("store returned an unsaved variation".to_string())
                        })?;
                        ids.push(id);
                    }
                    product.variations = ids;
                }
                FieldBehavior::Samples => {
                    let count = sample_count(field.cardinality, rng);
                    let values = self.sampler.sample_values(field, count, rng);
                    product.fields.insert(field.name.clone(), values);
                }
            }
        }

        debug!(
            title = %product.title,
            langcode = %product.langcode,
            variations = product.variations.len(),
            "product generated"
        );
        Ok(self.store.save_product(product)?)
    }

    /// Synthesizes and saves one variation. The fan-out behavior never
    /// applies to a variation's own bundle; every declared field is sampled.
    fn create_variation(
        &mut self,
        schema: &CatalogSchema,
        options: &GenerateOptions,
        rng: &mut ChaCha8Rng,
    ) -> Result<Variation, GenerationError> {
        let sku = word(rng, options.effective_variation_title_length());
        let langcode = self.resolve_langcode(options, rng);
        let price = Price {
            amount: rng.random_range(options.price_min..=options.price_max),
            currency_code: options.currency.clone(),
        };
        let mut variation = Variation::new(langcode, sku, price);

        for field in schema.fields_for(EntityType::Variation, DEFAULT_BUNDLE) {
            if options.skip_fields.contains(&field.name) {
                continue;
            }
            let count = sample_count(field.cardinality, rng);
            let values = self.sampler.sample_values(field, count, rng);
            variation.fields.insert(field.name.clone(), values);
        }

        Ok(self.store.save_variation(variation)?)
    }

    /// Independent uniform draw from the configured languages, falling back
    /// to the provider's default when none are configured.
    fn resolve_langcode(&self, options: &GenerateOptions, rng: &mut ChaCha8Rng) -> String {
        if options.languages.is_empty() {
            return self.languages.default_langcode();
        }
        let index = rng.random_range(0..options.languages.len());
        options
            .languages
            .iter()
            .nth(index)
            .cloned()
            .unwrap_or_else(|| self.languages.default_langcode())
    }
}

fn sample_count(cardinality: Cardinality, rng: &mut ChaCha8Rng) -> u32 {
    match cardinality {
        Cardinality::Bounded(max) => max,
        Cardinality::Unlimited => rng.random_range(UNLIMITED_SAMPLE_CAP),
    }
}
