//! The record store capability.
//!
//! Service code depends on `Store` rather than on `Table`, so tests can swap
//! in a double without touching the engine.

use std::sync::Arc;

use crate::error::RamResult;
use crate::record::Record;
use crate::table::Table;

/// Exact-key lookup, full scan, insert and delete over one table.
///
/// Each call is individually atomic. There is no update primitive: an update
/// is `delete` followed by `insert`, and a concurrent reader may observe the
/// old record, no record, or the new record between the two calls.
pub trait Store: Send + Sync {
    /// Record for `key` in the `column` index.
    fn get(&self, column: &str, key: &str) -> RamResult<Arc<Record>>;

    /// All records of the `column` index in ascending id order.
    fn select(&self, column: &str) -> RamResult<Vec<Arc<Record>>>;

    /// Insert a record that must not already exist.
    fn insert(&self, record: Record) -> RamResult<()>;

    /// Delete a record that must exist.
    fn delete(&self, record: &Record) -> RamResult<()>;
}

impl Store for Table {
    fn get(&self, column: &str, key: &str) -> RamResult<Arc<Record>> {
        Table::get(self, column, key)
    }

    fn select(&self, column: &str) -> RamResult<Vec<Arc<Record>>> {
        Table::select(self, column)
    }

    fn insert(&self, record: Record) -> RamResult<()> {
        Table::insert(self, record)
    }

    fn delete(&self, record: &Record) -> RamResult<()> {
        Table::delete(self, record)
    }
}

impl<S: Store + ?Sized> Store for Arc<S> {
    fn get(&self, column: &str, key: &str) -> RamResult<Arc<Record>> {
        (**self).get(column, key)
    }

    fn select(&self, column: &str) -> RamResult<Vec<Arc<Record>>> {
        (**self).select(column)
    }

    fn insert(&self, record: Record) -> RamResult<()> {
        (**self).insert(record)
    }

    fn delete(&self, record: &Record) -> RamResult<()> {
        (**self).delete(record)
    }
}
