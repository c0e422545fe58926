use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use prodgen_core::{MemoryStore, SCHEMA_VERSION};

use crate::CliError;

/// On-disk envelope for the JSON-persisted store.
#[derive(Debug, Serialize, Deserialize)]
struct StoreFile {
    schema_version: String,
    store: MemoryStore,
}

/// Loads the store file, or starts empty when none exists yet.
pub fn load_store(path: &Path) -> Result<MemoryStore, CliError> {
    if !path.exists() {
        return Ok(MemoryStore::new());
    }
    let raw = fs::read_to_string(path)?;
    let file: StoreFile = serde_json::from_str(&raw)?;
    if file.schema_version != SCHEMA_VERSION {
        warn!(
            found = %file.schema_version,
            expected = SCHEMA_VERSION,
            "store file was written with a different contract version"
        );
    }
    Ok(file.store)
}

/// Writes the store back to disk after a run.
pub fn write_store(path: &Path, store: &MemoryStore) -> Result<(), CliError> {
    let file = StoreFile {
        schema_version: SCHEMA_VERSION.to_string(),
        store: store.clone(),
    };
    fs::write(path, serde_json::to_vec_pretty(&file)?)?;
    Ok(())
}
