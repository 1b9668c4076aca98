//! Tables: a set of per-column indexes over one logical record set.
//!
//! **Read path**: `get`, `select`, `count`, `has_index` take the read half of
//! the table lock, so many readers proceed concurrently and never observe a
//! tree mid-mutation.
//! **Write path**: `insert`, `delete`, `create_index` hold the write half for
//! the whole check-then-act sequence.
//!
//! The lock is per table. No operation ever holds two table locks.

use std::sync::Arc;

use hashbrown::HashMap;
use parking_lot::RwLock;

use crate::error::{RamError, RamResult};
use crate::hash::key_hash;
use crate::index::Index;
use crate::record::Record;

/// A named table.
///
/// Handles obtained from `Database::from` for an unknown name have the
/// existence flag unset; every CRUD call on them fails with `NoTable`.
pub struct Table {
    /// Table name (or the unknown name that was looked up)
    name: Arc<str>,
    /// Set once at creation, never cleared
    exists: bool,
    /// column -> index; guards every tree inside
    indexes: RwLock<HashMap<String, Index>>,
}

impl Table {
    /// A live table with no indexes.
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: Arc::from(name),
            exists: true,
            indexes: RwLock::new(HashMap::new()),
        }
    }

    /// A handle for a table that was never created.
    pub(crate) fn missing(name: &str) -> Self {
        Self {
            exists: false,
            ..Self::new(name)
        }
    }

    /// Table name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this handle refers to a created table.
    pub fn exists(&self) -> bool {
        self.exists
    }

    /// Attach an empty index for `column`.
    ///
    /// Does not consult the existence flag.
    pub fn create_index(&self, column: &str) -> RamResult<()> {
        if column.is_empty() {
            return Err(RamError::InvalidIndex);
        }

        let mut indexes = self.indexes.write();
        if indexes.contains_key(column) {
            return Err(RamError::IndexExists);
        }
        indexes.insert(column.to_owned(), Index::new(Arc::clone(&self.name), column));
        Ok(())
    }

    /// Whether an index exists for `column`.
    pub fn has_index(&self, column: &str) -> bool {
        self.indexes.read().contains_key(column)
    }

    /// Indexed column names, sorted.
    pub fn columns(&self) -> Vec<String> {
        let mut columns: Vec<String> = self
            .indexes
            .read()
            .values()
            .map(|index| index.column().to_owned())
            .collect();
        columns.sort();
        columns
    }

    /// Look up the record for `key` in the `column` index.
    pub fn get(&self, column: &str, key: &str) -> RamResult<Arc<Record>> {
        self.check_exists()?;
        let indexes = self.indexes.read();
        let index = indexes.get(column).ok_or(RamError::NoIndex)?;

        index.get(key_hash(key)).cloned().ok_or(RamError::NoRecord)
    }

    /// Every record of the `column` index, in ascending id order.
    ///
    /// The result is a snapshot; later mutations do not affect it.
    pub fn select(&self, column: &str) -> RamResult<Vec<Arc<Record>>> {
        self.check_exists()?;
        let indexes = self.indexes.read();
        let index = indexes.get(column).ok_or(RamError::NoIndex)?;

        Ok(index.ascend().cloned().collect())
    }

    /// Number of records in the `column` index.
    pub fn count(&self, column: &str) -> RamResult<usize> {
        self.check_exists()?;
        let indexes = self.indexes.read();
        indexes.get(column).map(Index::len).ok_or(RamError::NoIndex)
    }

    /// Insert `record` into the index named by its key column.
    ///
    /// Fails with `RecordExists` and leaves the index unchanged if a record
    /// with the same id is present.
    pub fn insert(&self, record: Record) -> RamResult<()> {
        self.check_exists()?;
        let mut indexes = self.indexes.write();
        let index = indexes.get_mut(record.key_column()).ok_or(RamError::NoIndex)?;

        if index.contains(record.id()) {
            return Err(RamError::RecordExists);
        }
        index.replace_or_insert(record);
        Ok(())
    }

    /// Remove the record with `record`'s id from its key column's index.
    ///
    /// Only the id and column of `record` are consulted; its payload may
    /// differ from the stored one.
    pub fn delete(&self, record: &Record) -> RamResult<()> {
        self.check_exists()?;
        let mut indexes = self.indexes.write();
        let index = indexes.get_mut(record.key_column()).ok_or(RamError::NoIndex)?;

        index.remove(record.id()).map(|_| ()).ok_or(RamError::NoRecord)
    }

    fn check_exists(&self) -> RamResult<()> {
        if self.exists {
            Ok(())
        } else {
            Err(RamError::NoTable)
        }
    }
}

impl std::fmt::Debug for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Table")
            .field("name", &self.name)
            .field("exists", &self.exists)
            .field("columns", &self.columns())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn test_table() -> Table {
        let tbl = Table::new("test_table");
        tbl.create_index("test_column").unwrap();
        tbl
    }

    fn record(key: &str) -> Record {
        Record::new(key, "test_column", &key).unwrap()
    }

    #[test]
    fn test_create_index_empty_column() {
        let tbl = Table::new("t");
        assert_eq!(tbl.create_index(""), Err(RamError::InvalidIndex));
        assert!(tbl.columns().is_empty());
    }

    #[test]
    fn test_create_index_exists() {
        let tbl = test_table();
        assert_eq!(tbl.create_index("test_column"), Err(RamError::IndexExists));
    }

    #[test]
    fn test_create_index_on_missing_table() {
        let tbl = Table::missing("ghost");
        tbl.create_index("code").unwrap();
        assert!(tbl.has_index("code"));
        assert_eq!(tbl.select("code"), Err(RamError::NoTable));
    }

    #[test]
    fn test_has_index() {
        let tbl = test_table();
        assert!(tbl.has_index("test_column"));
        assert!(!tbl.has_index("other"));
        tbl.create_index("other").unwrap();
        assert_eq!(tbl.columns(), vec!["other".to_string(), "test_column".to_string()]);
    }

    #[test]
    fn test_missing_table_gates_everything() {
        let tbl = Table::missing("ghost");
        assert!(!tbl.exists());
        assert_eq!(tbl.get("test_column", "k"), Err(RamError::NoTable));
        assert_eq!(tbl.select("test_column"), Err(RamError::NoTable));
        assert_eq!(tbl.count("test_column"), Err(RamError::NoTable));
        assert_eq!(tbl.insert(record("k")), Err(RamError::NoTable));
        assert_eq!(tbl.delete(&record("k")), Err(RamError::NoTable));
    }

    #[test]
    fn test_missing_index() {
        let tbl = Table::new("t");
        assert_eq!(tbl.get("test_column", "k"), Err(RamError::NoIndex));
        assert_eq!(tbl.select("test_column"), Err(RamError::NoIndex));
        assert_eq!(tbl.count("test_column"), Err(RamError::NoIndex));
        assert_eq!(tbl.insert(record("k")), Err(RamError::NoIndex));
        assert_eq!(tbl.delete(&record("k")), Err(RamError::NoIndex));
    }

    #[test]
    fn test_get_no_record() {
        let tbl = test_table();
        assert_eq!(tbl.get("test_column", "test_key"), Err(RamError::NoRecord));
    }

    #[test]
    fn test_insert_get() {
        let tbl = test_table();
        tbl.insert(record("test_key")).unwrap();

        let found = tbl.get("test_column", "test_key").unwrap();
        assert_eq!(found.key(), "test_key");
        assert_eq!(found.key_column(), "test_column");
        assert_eq!(found.id(), 0x92488e1e3eeecdf9);
        assert_eq!(found.deserialize::<String>().unwrap(), "test_key");
    }

    #[test]
    fn test_insert_duplicate_leaves_original() {
        let tbl = test_table();
        tbl.insert(Record::new("k", "test_column", &1).unwrap()).unwrap();
        let err = tbl.insert(Record::new("k", "test_column", &2).unwrap());
        assert_eq!(err, Err(RamError::RecordExists));

        let stored = tbl.get("test_column", "k").unwrap();
        assert_eq!(stored.deserialize::<i32>().unwrap(), 1);
        assert_eq!(tbl.count("test_column"), Ok(1));
    }

    #[test]
    fn test_delete() {
        let tbl = test_table();
        assert_eq!(tbl.delete(&record("k")), Err(RamError::NoRecord));

        tbl.insert(record("k")).unwrap();
        tbl.delete(&record("k")).unwrap();
        assert_eq!(tbl.get("test_column", "k"), Err(RamError::NoRecord));
        assert_eq!(tbl.delete(&record("k")), Err(RamError::NoRecord));
    }

    #[test]
    fn test_delete_ignores_payload() {
        let tbl = test_table();
        tbl.insert(Record::new("k", "test_column", &"stored").unwrap()).unwrap();
        tbl.delete(&Record::new("k", "test_column", &()).unwrap()).unwrap();
        assert_eq!(tbl.count("test_column"), Ok(0));
    }

    #[test]
    fn test_select_empty() {
        let tbl = test_table();
        assert_eq!(tbl.select("test_column").unwrap(), Vec::new());
    }

    #[test]
    fn test_select_ordered_by_hash() {
        let tbl = test_table();
        for key in ["c", "a", "b"] {
            tbl.insert(record(key)).unwrap();
        }

        // key_hash: c = 0x2e7d.., b = 0x3e23.., a = 0xca97..
        let keys: Vec<String> = tbl
            .select("test_column")
            .unwrap()
            .iter()
            .map(|r| r.key().to_string())
            .collect();
        assert_eq!(keys, vec!["c", "b", "a"]);
    }

    #[test]
    fn test_select_many_sorted() {
        let tbl = test_table();
        for i in 0..10 {
            tbl.insert(record(&format!("key-{}", i))).unwrap();
        }
        let ids: Vec<u64> = tbl.select("test_column").unwrap().iter().map(|r| r.id()).collect();
        assert_eq!(ids.len(), 10);
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_indexes_are_independent() {
        let tbl = test_table();
        tbl.create_index("name").unwrap();

        tbl.insert(Record::new("apple", "name", &"by name").unwrap()).unwrap();
        assert_eq!(tbl.get("test_column", "apple"), Err(RamError::NoRecord));
        assert_eq!(tbl.count("name"), Ok(1));
        assert_eq!(tbl.count("test_column"), Ok(0));
    }

    #[test]
    fn test_concurrent_insert_same_key() {
        let tbl = Arc::new(test_table());

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let t = Arc::clone(&tbl);
                thread::spawn(move || t.insert(Record::new("shared", "test_column", &i).unwrap()))
            })
            .collect();

        let results: Vec<RamResult<()>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
        assert!(results
            .iter()
            .filter(|r| r.is_err())
            .all(|r| *r == Err(RamError::RecordExists)));
        assert_eq!(tbl.count("test_column"), Ok(1));
    }

    #[test]
    fn test_readers_alongside_writers() {
        let tbl = Arc::new(test_table());

        let writer = {
            let t = Arc::clone(&tbl);
            thread::spawn(move || {
                for i in 0..200 {
                    let key = format!("k{}", i % 20);
                    let rec = Record::new(key.as_str(), "test_column", &i).unwrap();
                    // Delete-then-insert update; either half may lose a race
                    let _ = t.delete(&rec);
                    let _ = t.insert(rec);
                }
            })
        };

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let t = Arc::clone(&tbl);
                thread::spawn(move || {
                    for i in 0..200 {
                        match t.get("test_column", &format!("k{}", i % 20)) {
                            Ok(rec) => assert!(rec.deserialize::<i32>().is_ok()),
                            Err(e) => assert_eq!(e, RamError::NoRecord),
                        }
                        let ids: Vec<u64> =
                            t.select("test_column").unwrap().iter().map(|r| r.id()).collect();
                        assert!(ids.windows(2).all(|w| w[0] < w[1]));
                    }
                })
            })
            .collect();

        writer.join().unwrap();
        for r in readers {
            r.join().unwrap();
        }
        assert_eq!(tbl.count("test_column"), Ok(20));
    }
}
