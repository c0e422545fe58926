use std::collections::BTreeSet;

use prodgen_core::{
    CatalogSchema, CatalogStore, Error as CoreError, FieldDefinition, MemoryStore, Product,
    ProductId, Variation, VariationId,
};
use prodgen_generate::{
    FakeSampler, GenerateOptions, GenerationEngine, GenerationError, StaticCurrencies,
    StaticLanguages,
};

fn catalog_schema() -> CatalogSchema {
    CatalogSchema::with_default_bundles(
        vec![
            FieldDefinition::unlimited("variations"),
            FieldDefinition::bounded("body", 1),
            FieldDefinition::unlimited("tags"),
        ],
        vec![FieldDefinition::bounded("description", 1)],
    )
}

fn options(num: u32) -> GenerateOptions {
    GenerateOptions {
        num,
        num_variations: 1,
        title_length: 10,
        price_min: 10,
        price_max: 1000,
        currency: "USD".to_string(),
        languages: BTreeSet::from(["en".to_string()]),
        seed: Some(1234),
        ..GenerateOptions::default()
    }
}

fn run(
    store: &mut MemoryStore,
    schema: &CatalogSchema,
    options: &GenerateOptions,
) -> Result<prodgen_generate::GenerationReport, GenerationError> {
    let sampler = FakeSampler;
    let languages = StaticLanguages::default();
    let currencies = StaticCurrencies;
    let mut engine = GenerationEngine::new(store, &sampler, &languages, &currencies);
    engine.run(schema, options)
}

#[test]
fn five_products_with_one_variation_each() {
    let schema = catalog_schema();
    let mut store = MemoryStore::new();
    let report = run(&mut store, &schema, &options(5)).expect("run succeeds");

    assert_eq!(report.summary(), "Finished creating 5 products");
    assert_eq!(report.deletion_message(), None);
    assert_eq!(store.product_count(), 5);
    assert_eq!(store.variation_count(), 5);

    for product in store.products() {
        assert!(product.id.is_some());
        assert!(product.generated);
        assert_eq!(product.langcode, "en");
        assert!((1..=10).contains(&product.title.len()));
        assert_eq!(product.variations.len(), 1);
        for id in &product.variations {
            let variation = store.variation(*id).expect("variation persisted");
            assert!(variation.generated);
            assert_eq!(variation.langcode, "en");
            assert_eq!(variation.price.currency_code, "USD");
            assert!((10..=1000).contains(&variation.price.amount));
            assert_eq!(variation.sku, variation.title);
        }
    }
}

#[test]
fn single_product_summary_is_singular() {
    let schema = catalog_schema();
    let mut store = MemoryStore::new();
    let report = run(&mut store, &schema, &options(1)).expect("run succeeds");
    assert_eq!(report.summary(), "1 product created.");
}

#[test]
fn zero_products_is_an_empty_run() {
    let schema = catalog_schema();
    let mut store = MemoryStore::new();
    let report = run(&mut store, &schema, &options(0)).expect("run succeeds");
    assert_eq!(report.summary(), "Finished creating 0 products");
    assert_eq!(store.product_count(), 0);
    assert_eq!(store.variation_count(), 0);
}

#[test]
fn kill_deletes_existing_products_before_generating() {
    let schema = catalog_schema();
    let mut store = MemoryStore::new();
    run(&mut store, &schema, &options(3)).expect("seed run succeeds");
    assert_eq!(store.product_count(), 3);

    let kill_options = GenerateOptions {
        kill: true,
        ..options(2)
    };
    let report = run(&mut store, &schema, &kill_options).expect("kill run succeeds");
    assert_eq!(report.deletion_message().as_deref(), Some("Deleted 3 products."));
    assert_eq!(report.summary(), "Finished creating 2 products");
    assert_eq!(store.product_count(), 2);
}

#[test]
fn cascade_delete_removes_referenced_variations() {
    let schema = catalog_schema();
    let mut store = MemoryStore::new();
    run(&mut store, &schema, &options(3)).expect("seed run succeeds");
    assert_eq!(store.variation_count(), 3);

    let kill_options = GenerateOptions {
        kill: true,
        cascade_delete: true,
        ..options(0)
    };
    run(&mut store, &schema, &kill_options).expect("kill run succeeds");
    assert_eq!(store.product_count(), 0);
    assert_eq!(store.variation_count(), 0);
}

#[test]
fn without_cascade_variations_survive_the_kill() {
    let schema = catalog_schema();
    let mut store = MemoryStore::new();
    run(&mut store, &schema, &options(3)).expect("seed run succeeds");

    let kill_options = GenerateOptions {
        kill: true,
        cascade_delete: false,
        ..options(0)
    };
    run(&mut store, &schema, &kill_options).expect("kill run succeeds");
    assert_eq!(store.product_count(), 0);
    assert_eq!(store.variation_count(), 3);
}

#[test]
fn delete_all_products_is_idempotent() {
    let schema = catalog_schema();
    let mut store = MemoryStore::new();
    run(&mut store, &schema, &options(4)).expect("seed run succeeds");

    let sampler = FakeSampler;
    let languages = StaticLanguages::default();
    let currencies = StaticCurrencies;
    let mut engine = GenerationEngine::new(&mut store, &sampler, &languages, &currencies);
    assert_eq!(engine.delete_all_products(true).expect("first pass"), 4);
    assert_eq!(engine.delete_all_products(true).expect("second pass"), 0);
}

#[test]
fn langcodes_come_from_the_configured_set() {
    let schema = catalog_schema();
    let mut store = MemoryStore::new();
    let multi = GenerateOptions {
        languages: BTreeSet::from(["en".to_string(), "fr".to_string()]),
        num_variations: 2,
        ..options(20)
    };
    run(&mut store, &schema, &multi).expect("run succeeds");

    for product in store.products() {
        assert!(multi.languages.contains(&product.langcode));
    }
    for variation in store.variations() {
        assert!(multi.languages.contains(&variation.langcode));
    }
}

#[test]
fn empty_language_set_falls_back_to_the_default() {
    let schema = catalog_schema();
    let mut store = MemoryStore::new();
    let defaults = GenerateOptions {
        languages: BTreeSet::new(),
        ..options(3)
    };
    run(&mut store, &schema, &defaults).expect("run succeeds");
    for product in store.products() {
        assert_eq!(product.langcode, "en");
    }
}

#[test]
fn skip_listed_fields_are_never_populated() {
    let schema = catalog_schema();
    let mut store = MemoryStore::new();
    let skipping = GenerateOptions {
        skip_fields: GenerateOptions::parse_skip_fields("body,description"),
        ..options(5)
    };
    run(&mut store, &schema, &skipping).expect("run succeeds");

    for product in store.products() {
        assert!(!product.fields.contains_key("body"));
        assert!(product.fields.contains_key("tags"));
    }
    for variation in store.variations() {
        assert!(!variation.fields.contains_key("description"));
    }
}

#[test]
fn skipping_the_variations_field_suppresses_fan_out() {
    let schema = catalog_schema();
    let mut store = MemoryStore::new();
    let skipping = GenerateOptions {
        skip_fields: GenerateOptions::parse_skip_fields("variations"),
        ..options(3)
    };
    run(&mut store, &schema, &skipping).expect("run succeeds");
    assert_eq!(store.variation_count(), 0);
    for product in store.products() {
        assert!(product.variations.is_empty());
    }
}

#[test]
fn unlimited_cardinality_yields_one_to_three_samples() {
    let schema = catalog_schema();
    let mut store = MemoryStore::new();
    run(&mut store, &schema, &options(100)).expect("run succeeds");

    let mut counts = BTreeSet::new();
    for product in store.products() {
        let tags = product.fields.get("tags").expect("tags populated");
        assert!((1..=3).contains(&tags.len()));
        counts.insert(tags.len());
        let body = product.fields.get("body").expect("body populated");
        assert_eq!(body.len(), 1);
    }
    // Across 100 draws the cap should not collapse to a single value.
    assert!(counts.len() > 1);
}

#[test]
fn variation_title_length_falls_back_to_title_length() {
    let schema = catalog_schema();
    let mut store = MemoryStore::new();
    let short = GenerateOptions {
        title_length: 3,
        variation_title_length: None,
        ..options(10)
    };
    run(&mut store, &schema, &short).expect("run succeeds");
    for variation in store.variations() {
        assert!((1..=3).contains(&variation.sku.len()));
    }

    let mut second = MemoryStore::new();
    let split = GenerateOptions {
        title_length: 3,
        variation_title_length: Some(12),
        ..options(10)
    };
    run(&mut second, &schema, &split).expect("run succeeds");
    assert!(
        second
            .variations()
            .any(|variation| variation.sku.len() > 3)
    );
}

#[test]
fn fixed_seed_reproduces_the_same_catalog() {
    let schema = catalog_schema();
    let mut first = MemoryStore::new();
    let mut second = MemoryStore::new();
    run(&mut first, &schema, &options(5)).expect("first run");
    run(&mut second, &schema, &options(5)).expect("second run");

    let first_titles: Vec<_> = first.products().map(|p| p.title.clone()).collect();
    let second_titles: Vec<_> = second.products().map(|p| p.title.clone()).collect();
    assert_eq!(first_titles, second_titles);

    let first_prices: Vec<_> = first.variations().map(|v| v.price.amount).collect();
    let second_prices: Vec<_> = second.variations().map(|v| v.price.amount).collect();
    assert_eq!(first_prices, second_prices);
}

#[test]
fn unknown_currency_is_rejected_before_any_write() {
    let schema = catalog_schema();
    let mut store = MemoryStore::new();
    let bad = GenerateOptions {
        currency: "XXX".to_string(),
        ..options(2)
    };
    let result = run(&mut store, &schema, &bad);
    assert!(matches!(result, Err(GenerationError::UnknownCurrency(code)) if code == "XXX"));
    assert_eq!(store.product_count(), 0);
}

/// Store double that counts every call it receives.
struct CountingStore {
    inner: MemoryStore,
    calls: std::cell::Cell<usize>,
}

impl CountingStore {
    fn new() -> Self {
        Self {
            inner: MemoryStore::new(),
            calls: std::cell::Cell::new(0),
        }
    }

    fn record(&self) {
        self.calls.set(self.calls.get() + 1);
    }
}

impl CatalogStore for CountingStore {
    fn save_product(&mut self, product: Product) -> Result<Product, CoreError> {
        self.record();
        self.inner.save_product(product)
    }

    fn save_variation(&mut self, variation: Variation) -> Result<Variation, CoreError> {
        self.record();
        self.inner.save_variation(variation)
    }

    fn product_ids(&self) -> Result<Vec<ProductId>, CoreError> {
        self.record();
        self.inner.product_ids()
    }

    fn load_products(&self, ids: &[ProductId]) -> Result<Vec<Product>, CoreError> {
        self.record();
        self.inner.load_products(ids)
    }

    fn delete_products(&mut self, ids: &[ProductId]) -> Result<usize, CoreError> {
        self.record();
        self.inner.delete_products(ids)
    }

    fn delete_variations(&mut self, ids: &[VariationId]) -> Result<usize, CoreError> {
        self.record();
        self.inner.delete_variations(ids)
    }
}

#[test]
fn zero_products_never_touches_the_store() {
    let schema = catalog_schema();
    let mut store = CountingStore::new();
    let sampler = FakeSampler;
    let languages = StaticLanguages::default();
    let currencies = StaticCurrencies;
    let mut engine = GenerationEngine::new(&mut store, &sampler, &languages, &currencies);

    let report = engine.run(&schema, &options(0)).expect("run succeeds");
    assert_eq!(report.summary(), "Finished creating 0 products");
    assert_eq!(store.calls.get(), 0);
}

/// Store double that fails product saves after a fixed number of successes.
struct FlakyStore {
    inner: MemoryStore,
    saves_before_failure: usize,
}

impl CatalogStore for FlakyStore {
    fn save_product(&mut self, product: Product) -> Result<Product, CoreError> {
        if self.saves_before_failure == 0 {
            return Err(CoreError::Store("disk full".to_string()));
        }
        self.saves_before_failure -= 1;
        self.inner.save_product(product)
    }

    fn save_variation(&mut self, variation: Variation) -> Result<Variation, CoreError> {
        self.inner.save_variation(variation)
    }

    fn product_ids(&self) -> Result<Vec<ProductId>, CoreError> {
        self.inner.product_ids()
    }

    fn load_products(&self, ids: &[ProductId]) -> Result<Vec<Product>, CoreError> {
        self.inner.load_products(ids)
    }

    fn delete_products(&mut self, ids: &[ProductId]) -> Result<usize, CoreError> {
        self.inner.delete_products(ids)
    }

    fn delete_variations(&mut self, ids: &[VariationId]) -> Result<usize, CoreError> {
        self.inner.delete_variations(ids)
    }
}

#[test]
fn first_store_failure_aborts_the_run() {
    let schema = catalog_schema();
    let mut store = FlakyStore {
        inner: MemoryStore::new(),
        saves_before_failure: 2,
    };
    let sampler = FakeSampler;
    let languages = StaticLanguages::default();
    let currencies = StaticCurrencies;
    let mut engine = GenerationEngine::new(&mut store, &sampler, &languages, &currencies);

    let result = engine.run(&schema, &options(5));
    assert!(matches!(
        result,
        Err(GenerationError::Core(CoreError::Store(message))) if message == "disk full"
    ));
    // Already-persisted records stay in place; there is no rollback.
    assert_eq!(store.inner.product_count(), 2);
}
