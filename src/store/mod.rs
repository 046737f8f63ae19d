pub mod disk;
pub mod memory;

use crate::core::config::AppConfig;
use anyhow::{Context, Result};
use disk::FjallFundStore;
use tracing::debug;

/// Opens the persistent catalog store under the configured data path.
pub fn open_store(config: &AppConfig) -> Result<FjallFundStore> {
    let catalog_dir = config.data_path()?.join("catalog");
    debug!("Opening catalog store at {}", catalog_dir.display());
    FjallFundStore::open(&catalog_dir)
        .with_context(|| format!("Failed to open catalog store at {}", catalog_dir.display()))
}
