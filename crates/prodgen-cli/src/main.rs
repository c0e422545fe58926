mod schema;
mod store;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use prodgen_core::{CatalogSchema, MemoryStore};
use prodgen_generate::{
    CurrencyProvider, FakeSampler, GenerateOptions, GenerationEngine, GenerationError,
    GenerationReport, LanguageProvider, StaticCurrencies, StaticLanguages,
};

#[derive(Debug, Error)]
enum CliError {
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("core error: {0}")]
    Core(#[from] prodgen_core::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "prodgen", version, about = "Synthetic commerce catalog generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate products and variations into the store.
    Generate(GenerateArgs),
    /// List the supported currency codes.
    Currencies,
    /// List the supported language codes.
    Languages,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// How many products to generate.
    #[arg(long, default_value_t = 50)]
    num: u32,
    /// Delete all existing products before generating.
    #[arg(long, default_value_t = false)]
    kill: bool,
    /// Maximum length of generated product titles.
    #[arg(long, default_value_t = 4)]
    title_length: u32,
    /// Variations generated per product.
    #[arg(long = "num-var", default_value_t = 1)]
    num_variations: u32,
    /// Maximum length of variation SKUs (defaults to --title-length).
    #[arg(long = "title-var-length")]
    variation_title_length: Option<u32>,
    /// Inclusive lower price bound, in minor units.
    #[arg(long, default_value_t = 0)]
    price_min: i64,
    /// Inclusive upper price bound, in minor units.
    #[arg(long, default_value_t = 9999)]
    price_max: i64,
    /// Currency code for generated prices.
    #[arg(long, default_value = "USD")]
    currency: String,
    /// Language code(s) to draw from; repeatable.
    #[arg(long = "add-language", value_name = "LANGCODE")]
    languages: Vec<String>,
    /// Comma-separated field names to leave unpopulated.
    #[arg(long, value_name = "FIELDS", default_value = "")]
    skip_fields: String,
    /// Keep the variations of deleted products instead of cascading.
    #[arg(long, default_value_t = false)]
    no_cascade: bool,
    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
    /// Catalog schema file describing the declared fields.
    #[arg(long, value_name = "PATH")]
    schema: Option<PathBuf>,
    /// Store file holding generated records between runs.
    #[arg(long, value_name = "PATH", default_value = "catalog-store.json")]
    store: PathBuf,
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();
    let result = match cli.command {
        Command::Generate(args) => run_generate(args),
        Command::Currencies => run_currencies(),
        Command::Languages => run_languages(),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();
}

fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    let catalog_schema = match &args.schema {
        Some(path) => schema::load_schema(path)?,
        None => schema::default_schema(),
    };
    let mut catalog_store = store::load_store(&args.store)?;

    let options = GenerateOptions {
        num: args.num,
        kill: args.kill,
        title_length: args.title_length,
        num_variations: args.num_variations,
        variation_title_length: args.variation_title_length,
        price_min: args.price_min,
        price_max: args.price_max,
        currency: args.currency,
        languages: args.languages.into_iter().collect(),
        skip_fields: GenerateOptions::parse_skip_fields(&args.skip_fields),
        cascade_delete: !args.no_cascade,
        seed: args.seed,
    };

    let report = run_and_persist(&args.store, &mut catalog_store, &catalog_schema, &options)?;

    if let Some(message) = report.deletion_message() {
        println!("{message}");
    }
    println!("{}", report.summary());
    Ok(())
}

/// Runs the engine and writes the store back whether or not the run
/// succeeded. Records persisted before a failure stay in place; there is no
/// rollback.
fn run_and_persist(
    path: &Path,
    catalog_store: &mut MemoryStore,
    catalog_schema: &CatalogSchema,
    options: &GenerateOptions,
) -> Result<GenerationReport, CliError> {
    let sampler = FakeSampler;
    let languages = StaticLanguages::default();
    let currencies = StaticCurrencies;
    let result = {
        let mut engine = GenerationEngine::new(catalog_store, &sampler, &languages, &currencies);
        engine.run(catalog_schema, options)
    };
    store::write_store(path, catalog_store)?;
    Ok(result?)
}

fn run_currencies() -> Result<(), CliError> {
    for (code, name) in StaticCurrencies.currencies() {
        println!("{code}\t{name}");
    }
    Ok(())
}

fn run_languages() -> Result<(), CliError> {
    let provider = StaticLanguages::default();
    let default_langcode = provider.default_langcode();
    for (code, name) in provider.languages() {
        if code == default_langcode {
            println!("{code}\t{name} (default)");
        } else {
            println!("{code}\t{name}");
        }
    }
    Ok(())
}
