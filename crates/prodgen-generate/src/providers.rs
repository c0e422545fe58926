use std::collections::BTreeMap;

use fake::Fake;
use fake::faker::lorem::en::Word;
use rand::RngCore;

use prodgen_core::{FieldDefinition, FieldValue};

/// Produces sample values for a declared field.
///
/// The engine only decides how many values to request; the content comes
/// from the sampler, standing in for the host framework's per-field sample
/// generation.
pub trait FieldSampler {
    fn sample_values(
        &self,
        field: &FieldDefinition,
        count: u32,
        rng: &mut dyn RngCore,
    ) -> Vec<FieldValue>;
}

/// Lorem-based sampler producing short text values for every field.
#[derive(Debug, Clone, Copy, Default)]
pub struct FakeSampler;

impl FieldSampler for FakeSampler {
    fn sample_values(
        &self,
        _field: &FieldDefinition,
        count: u32,
        rng: &mut dyn RngCore,
    ) -> Vec<FieldValue> {
        (0..count)
            .map(|_| {
                let value: String = Word().fake_with_rng(rng);
                FieldValue::Text(value)
            })
            .collect()
    }
}

/// Language list and default-language lookup.
pub trait LanguageProvider {
    /// Mapping of langcode to display name.
    fn languages(&self) -> BTreeMap<String, String>;

    /// Langcode applied when no languages are configured.
    fn default_langcode(&self) -> String;
}

const LANGUAGES: &[(&str, &str)] = &[
    ("de", "German"),
    ("en", "English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("ja", "Japanese"),
    ("pt-br", "Brazilian Portuguese"),
];

/// Fixed language table for environments without a locale subsystem.
#[derive(Debug, Clone)]
pub struct StaticLanguages {
    default_langcode: String,
}

impl StaticLanguages {
    pub fn new(default_langcode: impl Into<String>) -> Self {
        Self {
            default_langcode: default_langcode.into(),
        }
    }
}

impl Default for StaticLanguages {
    fn default() -> Self {
        Self::new("en")
    }
}

impl LanguageProvider for StaticLanguages {
    fn languages(&self) -> BTreeMap<String, String> {
        LANGUAGES
            .iter()
            .map(|(code, name)| (code.to_string(), name.to_string()))
            .collect()
    }

    fn default_langcode(&self) -> String {
        self.default_langcode.clone()
    }
}

/// Currency list lookup.
pub trait CurrencyProvider {
    /// Mapping of currency code to display name.
    fn currencies(&self) -> BTreeMap<String, String>;
}

const CURRENCIES: &[(&str, &str)] = &[
    ("AUD", "Australian Dollar"),
    ("BRL", "Brazilian Real"),
    ("CAD", "Canadian Dollar"),
    ("CHF", "Swiss Franc"),
    ("EUR", "Euro"),
    ("GBP", "Pound Sterling"),
    ("JPY", "Japanese Yen"),
    ("USD", "US Dollar"),
];

/// Fixed currency table matching the operator-facing enumeration.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticCurrencies;

impl CurrencyProvider for StaticCurrencies {
    fn currencies(&self) -> BTreeMap<String, String> {
        CURRENCIES
            .iter()
            .map(|(code, name)| (code.to_string(), name.to_string()))
            .collect()
    }
}
