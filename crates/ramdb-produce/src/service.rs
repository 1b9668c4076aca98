//! Produce catalog over a `Store`.
//!
//! Items are filed in the `code` index under their lowercased code. The
//! service never holds more than one store call's worth of state; multi-item
//! `add` is not atomic and stops at the first failure.

use ramdb_core::{Record, Store};

use crate::error::{ProduceError, ProduceResult};
use crate::item::{normalize_code, Item};

/// Table holding produce items.
pub const PRODUCE_TABLE: &str = "produce";

/// Index column for produce codes.
pub const KEY_PRODUCE_CODE: &str = "code";

/// Operations a transport layer needs from the catalog.
pub trait Catalog: Send + Sync {
    /// Add every item; fails on the first item that cannot be stored.
    fn add(&self, items: &[Item]) -> ProduceResult<()>;

    /// Remove the item with `item.code`.
    fn remove(&self, item: &Item) -> ProduceResult<()>;

    /// Item for `code`, compared case-insensitively.
    fn get(&self, code: &str) -> ProduceResult<Item>;

    /// Every item, in the store's key-hash order.
    fn all(&self) -> ProduceResult<Vec<Item>>;
}

/// Catalog backed by any `Store`.
#[derive(Debug)]
pub struct ProduceService<S> {
    db: S,
}

impl<S: Store> ProduceService<S> {
    pub fn new(db: S) -> Self {
        Self { db }
    }

    /// Underlying store.
    pub fn store(&self) -> &S {
        &self.db
    }
}

impl<S: Store> Catalog for ProduceService<S> {
    fn add(&self, items: &[Item]) -> ProduceResult<()> {
        for item in items {
            let rec = Record::new(item.key(), KEY_PRODUCE_CODE, item)?;
            self.db.insert(rec)?;
        }
        tracing::debug!(count = items.len(), "added produce items");
        Ok(())
    }

    fn remove(&self, item: &Item) -> ProduceResult<()> {
        let rec = Record::new(item.key(), KEY_PRODUCE_CODE, item)?;
        self.db.delete(&rec)?;
        tracing::debug!(code = %rec.key(), "removed produce item");
        Ok(())
    }

    fn get(&self, code: &str) -> ProduceResult<Item> {
        let rec = self.db.get(KEY_PRODUCE_CODE, &normalize_code(code))?;
        Ok(rec.deserialize()?)
    }

    fn all(&self) -> ProduceResult<Vec<Item>> {
        self.db
            .select(KEY_PRODUCE_CODE)?
            .iter()
            .map(|rec| rec.deserialize().map_err(ProduceError::from))
            .collect()
    }
}
