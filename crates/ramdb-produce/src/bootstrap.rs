//! Startup: build the database, create the produce table, seed it.

use std::path::Path;
use std::sync::Arc;

use ramdb_core::{Database, Table};

use crate::config::Config;
use crate::error::{ProduceError, ProduceResult};
use crate::item::Item;
use crate::service::{Catalog, ProduceService, KEY_PRODUCE_CODE, PRODUCE_TABLE};

/// A ready-to-serve catalog and the database it lives in.
#[derive(Debug)]
pub struct App {
    pub db: Database,
    pub catalog: ProduceService<Arc<Table>>,
}

/// Create the produce table and load the init file if one is configured.
///
/// `config` is expected to have passed `Config::validate` already; the binary
/// checks it before logging is installed.
pub fn bootstrap(config: &Config) -> ProduceResult<App> {
    let mut db = Database::new();
    db.create_table(PRODUCE_TABLE, [KEY_PRODUCE_CODE])?;
    tracing::info!(
        env = %config.env,
        table = PRODUCE_TABLE,
        column = KEY_PRODUCE_CODE,
        "created table"
    );

    let catalog = ProduceService::new(db.from(PRODUCE_TABLE));

    match &config.init_file {
        Some(path) => {
            let items = load_init_file(path)?;
            catalog.add(&items)?;
            tracing::info!(count = items.len(), path = %path.display(), "seeded produce catalog");
        }
        None => tracing::info!("no init file provided, database will be empty"),
    }

    Ok(App { db, catalog })
}

/// Read a JSON array of items from `path`.
pub fn load_init_file(path: &Path) -> ProduceResult<Vec<Item>> {
    let bytes = std::fs::read(path).map_err(|e| ProduceError::Io {
        path: path.to_path_buf(),
        kind: e.kind(),
        message: format!("could not read init file: {}", e),
    })?;

    serde_json::from_slice(&bytes).map_err(|e| ProduceError::InitFile {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
