//! RamDB produce catalog
//!
//! Stores produce items in a RamDB table indexed on their lowercased code.
//!
//! # Architecture
//!
//! - `ProduceService` translates `Item`s into records and back; it depends
//!   only on the `ramdb_core::Store` capability, never on `Table` directly
//! - `Catalog` is the surface a transport layer calls
//! - `bootstrap` builds the database and seeds it from an optional JSON file
//!
//! Codes are case-insensitive: the service lowercases them before they reach
//! the store, which compares keys byte-for-byte.

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod item;
pub mod service;

pub use bootstrap::{bootstrap, load_init_file, App};
pub use config::{Cli, Config, LogFormat};
pub use error::{ProduceError, ProduceResult};
pub use item::{normalize_code, Item, Money};
pub use service::{Catalog, ProduceService, KEY_PRODUCE_CODE, PRODUCE_TABLE};
