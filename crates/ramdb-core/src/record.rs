//! Immutable records stored in an index.
//!
//! A record carries its key, the column it is filed under, the key's hash and
//! the payload encoded as JSON at construction time. Records are never
//! mutated; an update is a delete followed by an insert.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{RamError, RamResult};
use crate::hash::key_hash;

/// A keyed, serialized value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    key: String,
    key_column: String,
    id: u64,
    serialized: Vec<u8>,
}

impl Record {
    /// Encode `payload` and address it by `key` under `key_column`.
    ///
    /// The key is stored verbatim; callers that want case-insensitive lookups
    /// must normalize it first.
    pub fn new<T>(key: impl Into<String>, key_column: impl Into<String>, payload: &T) -> RamResult<Self>
    where
        T: Serialize + ?Sized,
    {
        let serialized = serde_json::to_vec(payload).map_err(|e| RamError::Serialization {
            message: e.to_string(),
        })?;
        let key = key.into();
        let id = key_hash(&key);

        Ok(Self {
            key,
            key_column: key_column.into(),
            id,
            serialized,
        })
    }

    /// Decode the payload into a new value.
    pub fn deserialize<T: DeserializeOwned>(&self) -> RamResult<T> {
        serde_json::from_slice(&self.serialized).map_err(|e| RamError::Deserialization {
            message: e.to_string(),
        })
    }

    /// Decode the payload into `into`. On failure `into` is left untouched.
    pub fn deserialize_into<T: DeserializeOwned>(&self, into: &mut T) -> RamResult<()> {
        *into = self.deserialize()?;
        Ok(())
    }

    /// Original key, as supplied at construction.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Column whose index this record belongs to.
    pub fn key_column(&self) -> &str {
        &self.key_column
    }

    /// Ordering identifier, `key_hash(key)`.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Encoded payload bytes.
    pub fn serialized(&self) -> &[u8] {
        &self.serialized
    }
}
