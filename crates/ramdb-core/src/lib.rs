//! RamDB Core — Embedded In-Memory Table Store
//!
//! A process-local store of named tables. Each table holds one or more
//! per-column indexes, and each index is an ordered tree of immutable,
//! JSON-encoded records keyed by a SHA-256-derived 64-bit hash of the
//! record key.
//!
//! # Architecture
//!
//! - **Database**: registry of tables, built once at startup
//! - **Table**: gates every operation on its existence flag, guards its
//!   indexes with a reader/writer lock
//! - **Index**: `BTreeMap` from key hash to record, ascending
//! - **Record**: key, column, key hash and opaque payload
//!
//! # Non-goals
//!
//! No persistence, no multi-record transactions, no queries beyond exact-key
//! lookup and full index scan.
//!
//! ```
//! use ramdb_core::{Database, Record};
//!
//! let mut db = Database::new();
//! db.create_table("produce", ["code"]).unwrap();
//!
//! let produce = db.from("produce");
//! produce.insert(Record::new("a12t-4gh7", "code", &"Lettuce").unwrap()).unwrap();
//!
//! let rec = produce.get("code", "a12t-4gh7").unwrap();
//! assert_eq!(rec.deserialize::<String>().unwrap(), "Lettuce");
//! ```

pub mod database;
pub mod error;
pub mod hash;
mod index;
pub mod record;
pub mod store;
pub mod table;

// Re-export key types for convenience
pub use database::Database;
pub use error::{ErrorCategory, RamError, RamResult};
pub use hash::key_hash;
pub use record::Record;
pub use store::Store;
pub use table::Table;
