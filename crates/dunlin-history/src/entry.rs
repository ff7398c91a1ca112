//! Ledger entry types.
//!
//! `LedgerEntry` wraps an `AssignmentRecord` with sequence numbering and the
//! SHA-256 hashes that make tampering detectable. Unlike a per-execution
//! audit log, the assignment ledger is one long-lived chain with capped
//! retention: evicted entries leave behind their hash as the chain anchor, so
//! verification always covers the full retained window.

use serde::{Deserialize, Serialize};

use dunlin_contracts::assignment::AssignmentRecord;

/// A single entry in the assignment hash chain.
///
/// Each entry commits to its predecessor via `prev_hash`. Modifying any field
/// — including those of the embedded `record` — invalidates `this_hash` and
/// every subsequent `prev_hash`, which `verify_chain` detects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Monotonically increasing position in the chain, starting at 0.
    /// Eviction does not renumber: sequence numbers keep climbing for the
    /// lifetime of the ledger.
    pub sequence: u64,

    /// The immutable assignment record.
    pub record: AssignmentRecord,

    /// SHA-256 hash (hex) of the previous entry, the current anchor for the
    /// oldest retained entry, or `GENESIS_HASH` when nothing was ever evicted.
    pub prev_hash: String,

    /// SHA-256 hash (hex) of this entry's canonical content.
    pub this_hash: String,
}

impl LedgerEntry {
    /// The sentinel `prev_hash` for the first entry of a fresh chain.
    ///
    /// 64 hex zeros — never the SHA-256 of real data, so genesis detection
    /// is unambiguous.
    pub const GENESIS_HASH: &'static str =
        "0000000000000000000000000000000000000000000000000000000000000000";
}

/// Criteria for `list()`. Unset fields match everything.
#[derive(Debug, Clone, Default)]
pub struct LedgerFilter {
    pub strategy: Option<dunlin_contracts::assignment::StrategyKind>,
    pub agent_id: Option<dunlin_contracts::agent::AgentId>,
    pub item_kind: Option<dunlin_contracts::work_item::WorkItemKind>,
}

impl LedgerFilter {
    /// True when the record satisfies every set criterion.
    pub fn matches(&self, record: &AssignmentRecord) -> bool {
        self.strategy.map_or(true, |s| record.strategy == s)
            && self
                .agent_id
                .as_ref()
                .map_or(true, |id| &record.agent_id == id)
            && self.item_kind.map_or(true, |k| record.item_kind == k)
    }
}
