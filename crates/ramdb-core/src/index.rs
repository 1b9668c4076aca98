//! Ordered per-column record container.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::record::Record;

/// Records for one column, ordered by id ascending.
///
/// The index does no locking of its own; the owning `Table` guards it.
#[derive(Debug)]
pub(crate) struct Index {
    /// Column this index is filed under
    column: String,
    /// Name of the owning table (association only)
    #[allow(dead_code)]
    table: Arc<str>,
    /// id -> record
    tree: BTreeMap<u64, Arc<Record>>,
}

impl Index {
    pub(crate) fn new(table: Arc<str>, column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            table,
            tree: BTreeMap::new(),
        }
    }

    pub(crate) fn column(&self) -> &str {
        &self.column
    }

    pub(crate) fn get(&self, id: u64) -> Option<&Arc<Record>> {
        self.tree.get(&id)
    }

    pub(crate) fn contains(&self, id: u64) -> bool {
        self.tree.contains_key(&id)
    }

    /// Insert or replace the slot for `record.id()`.
    pub(crate) fn replace_or_insert(&mut self, record: Record) -> Option<Arc<Record>> {
        self.tree.insert(record.id(), Arc::new(record))
    }

    pub(crate) fn remove(&mut self, id: u64) -> Option<Arc<Record>> {
        self.tree.remove(&id)
    }

    /// Records in ascending id order.
    pub(crate) fn ascend(&self) -> impl Iterator<Item = &Arc<Record>> {
        self.tree.values()
    }

    pub(crate) fn len(&self) -> usize {
        self.tree.len()
    }
}
