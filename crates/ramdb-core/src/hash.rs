//! Key hashing.
//!
//! Every record is ordered and identified inside an index by the hash of its
//! key, not by the key string itself.

use sha2::{Digest, Sha256};

/// Map a key to its 64-bit ordering identifier.
///
/// SHA-256 of the key bytes, first 8 bytes read big-endian. Stable across
/// calls and process runs.
///
/// Collisions are not resolved: two distinct keys with equal hashes address
/// the same slot in an index, so the second one can never be inserted while
/// the first is present.
pub fn key_hash(key: &str) -> u64 {
    let mut hasher = Sha256::new();
    hasher.update(key.as_bytes());
    let digest = hasher.finalize();

    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(prefix)
}
