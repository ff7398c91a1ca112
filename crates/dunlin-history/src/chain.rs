//! Hash-chain primitives: hashing and chain integrity verification.
//!
//! Every field that contributes to an entry's hash is listed explicitly so
//! nothing is accidentally omitted.
//!
//! Hash input layout (bytes, in order):
//!   1. sequence as 8-byte little-endian
//!   2. prev_hash as UTF-8 bytes (64 ASCII hex chars)
//!   3. canonical JSON of record (serde_json with no pretty-printing)

use sha2::{Digest, Sha256};

use dunlin_contracts::assignment::AssignmentRecord;

use crate::entry::LedgerEntry;

/// Compute the SHA-256 hash for a single ledger entry.
///
/// The hash commits to the entry's position in the chain (`sequence`), its
/// link to the previous entry (`prev_hash`), and the full assignment record.
///
/// Returns a lowercase 64-character hex string.
///
/// # Panics
///
/// Panics if `record` cannot be serialized to JSON — which cannot happen for
/// the well-formed `AssignmentRecord` type.
pub fn hash_record(sequence: u64, record: &AssignmentRecord, prev_hash: &str) -> String {
    let record_json = serde_json::to_vec(record)
        .expect("AssignmentRecord must always be serializable to JSON");

    let mut hasher = Sha256::new();
    hasher.update(sequence.to_le_bytes());
    hasher.update(prev_hash.as_bytes());
    hasher.update(&record_json);

    hex::encode(hasher.finalize())
}

/// Verify the integrity of a hash chain anchored at `anchor_hash`.
///
/// `anchor_hash` is `LedgerEntry::GENESIS_HASH` for a chain that never
/// evicted, or the `this_hash` of the most recently evicted entry otherwise.
///
/// Returns `true` when the chain is valid according to both rules:
///
/// 1. **Prev-hash linkage** — each entry's `prev_hash` equals the `this_hash`
///    of the preceding entry (or the anchor for the oldest retained entry).
/// 2. **Hash correctness** — each entry's `this_hash` matches the value
///    recomputed from its own fields.
///
/// Returns `false` the moment any mismatch is detected. An empty chain is
/// defined as valid.
pub fn verify_chain(entries: &[LedgerEntry], anchor_hash: &str) -> bool {
    let mut expected_prev = anchor_hash.to_string();

    for entry in entries {
        if entry.prev_hash != expected_prev {
            return false;
        }

        let recomputed = hash_record(entry.sequence, &entry.record, &entry.prev_hash);
        if entry.this_hash != recomputed {
            return false;
        }

        expected_prev = entry.this_hash.clone();
    }

    true
}
