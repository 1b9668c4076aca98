//! Table registry.

use std::sync::Arc;

use hashbrown::HashMap;

use crate::error::{RamError, RamResult};
use crate::table::Table;

/// Registry of named tables.
///
/// Owned by the caller and passed by reference; there is no process-wide
/// instance. Tables are created at startup through `&mut self` and are never
/// removed. Handles returned by `from` are shared `Arc<Table>`s and may be
/// used from any thread.
#[derive(Debug, Default)]
pub struct Database {
    tables: HashMap<String, Arc<Table>>,
}

impl Database {
    /// An empty database.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create `name` with an index on each of `columns`.
    ///
    /// Nothing is registered if any index fails to be created.
    pub fn create_table<I, S>(&mut self, name: &str, columns: I) -> RamResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if self.tables.contains_key(name) {
            return Err(RamError::TableExists);
        }

        let table = Table::new(name);
        for column in columns {
            table.create_index(column.as_ref())?;
        }

        self.tables.insert(name.to_owned(), Arc::new(table));
        Ok(())
    }

    /// Handle for `name`.
    ///
    /// Unknown names yield a fresh handle whose existence flag is unset.
    pub fn from(&self, name: &str) -> Arc<Table> {
        match self.tables.get(name) {
            Some(table) => Arc::clone(table),
            None => Arc::new(Table::missing(name)),
        }
    }

    /// Whether `name` has been created.
    pub fn contains_table(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    /// Created table names, sorted.
    pub fn table_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tables.keys().cloned().collect();
        names.sort();
        names
    }

    /// Number of tables.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Returns true if no tables have been created.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
