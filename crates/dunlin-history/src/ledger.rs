//! In-memory implementation of `HistorySink`.
//!
//! `InMemoryLedger` keeps every assignment decision in a `VecDeque` behind a
//! `Mutex`, capped at a fixed retention ceiling (oldest evicted first). The
//! chain anchor advances on eviction so `verify_integrity()` keeps working
//! over the retained window. Aggregate views accumulate into `BTreeMap`s so
//! "most used" / "most assigned" tie-breaks are deterministic: the
//! lexicographically smallest key wins.

use std::collections::{BTreeMap, VecDeque};
use std::sync::{Arc, Mutex};

use tracing::{debug, info};

use dunlin_contracts::{
    assignment::AssignmentRecord,
    error::{DunlinError, DunlinResult},
};
use dunlin_engine::traits::HistorySink;

use crate::{
    chain::{hash_record, verify_chain},
    entry::{LedgerEntry, LedgerFilter},
};

/// Entries retained before the oldest is evicted.
pub const DEFAULT_RETENTION: usize = 1000;

// ── Internal mutable state ────────────────────────────────────────────────────

/// The mutable interior of an `InMemoryLedger`.
pub(crate) struct LedgerState {
    /// Retained entries in append order (oldest at the front).
    pub(crate) entries: VecDeque<LedgerEntry>,

    /// The next sequence number to assign (starts at 0, never reset by
    /// eviction).
    pub(crate) sequence: u64,

    /// The `this_hash` of the last appended entry, or the anchor before any
    /// entry has been written.
    pub(crate) last_hash: String,

    /// The hash the oldest retained entry must link to: `GENESIS_HASH`
    /// initially, then the `this_hash` of the most recently evicted entry.
    pub(crate) anchor_hash: String,
}

// ── Public ledger ─────────────────────────────────────────────────────────────

/// An append-only, capped, hash-chained assignment ledger.
///
/// # Thread safety
///
/// Every method acquires a `Mutex` internally. Clone the `Arc`-wrapped ledger
/// (or the ledger itself — it shares state via `Arc`) across threads without
/// additional synchronization.
#[derive(Clone)]
pub struct InMemoryLedger {
    retention: usize,
    pub(crate) state: Arc<Mutex<LedgerState>>,
}

impl InMemoryLedger {
    /// Create a ledger with the default retention of [`DEFAULT_RETENTION`].
    pub fn new() -> Self {
        Self::with_retention(DEFAULT_RETENTION)
    }

    /// Create a ledger retaining at most `retention` entries.
    pub fn with_retention(retention: usize) -> Self {
        let state = LedgerState {
            entries: VecDeque::new(),
            sequence: 0,
            last_hash: LedgerEntry::GENESIS_HASH.to_string(),
            anchor_hash: LedgerEntry::GENESIS_HASH.to_string(),
        };
        Self {
            retention,
            state: Arc::new(Mutex::new(state)),
        }
    }

    /// Number of retained entries.
    pub fn len(&self) -> usize {
        self.state.lock().expect("ledger lock poisoned").entries.len()
    }

    /// True when nothing is retained.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Records matching `filter`, oldest first.
    pub fn list(&self, filter: &LedgerFilter) -> Vec<AssignmentRecord> {
        let state = self.state.lock().expect("ledger lock poisoned");
        state
            .entries
            .iter()
            .filter(|entry| filter.matches(&entry.record))
            .map(|entry| entry.record.clone())
            .collect()
    }

    /// Drop every entry and reset the chain to genesis.
    pub fn clear(&self) {
        let mut state = self.state.lock().expect("ledger lock poisoned");
        let dropped = state.entries.len();
        state.entries.clear();
        state.sequence = 0;
        state.last_hash = LedgerEntry::GENESIS_HASH.to_string();
        state.anchor_hash = LedgerEntry::GENESIS_HASH.to_string();
        info!(dropped, "assignment ledger cleared");
    }

    /// Verify that the retained chain has not been tampered with.
    pub fn verify_integrity(&self) -> bool {
        let state = self.state.lock().expect("ledger lock poisoned");
        let entries: Vec<LedgerEntry> = state.entries.iter().cloned().collect();
        verify_chain(&entries, &state.anchor_hash)
    }

    // ── Aggregate views ───────────────────────────────────────────────────────

    /// Assignment counts keyed by strategy display name.
    pub fn counts_by_strategy(&self) -> BTreeMap<String, usize> {
        let state = self.state.lock().expect("ledger lock poisoned");
        let mut counts = BTreeMap::new();
        for entry in &state.entries {
            *counts.entry(entry.record.strategy.to_string()).or_insert(0) += 1;
        }
        counts
    }

    /// Assignment counts keyed by agent id.
    pub fn counts_by_agent(&self) -> BTreeMap<String, usize> {
        let state = self.state.lock().expect("ledger lock poisoned");
        let mut counts = BTreeMap::new();
        for entry in &state.entries {
            *counts.entry(entry.record.agent_id.0.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// The strategy with the most retained assignments, with its count.
    ///
    /// Ties resolve to the lexicographically smallest name — `BTreeMap`
    /// iteration order plus a strict comparison makes this deterministic.
    pub fn most_used_strategy(&self) -> Option<(String, usize)> {
        max_by_count(self.counts_by_strategy())
    }

    /// The agent with the most retained assignments, with their count.
    /// Same lexicographic tie-break as `most_used_strategy`.
    pub fn most_assigned_agent(&self) -> Option<(String, usize)> {
        max_by_count(self.counts_by_agent())
    }
}

impl Default for InMemoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

/// First strict maximum over a lexicographically ordered count map.
fn max_by_count(counts: BTreeMap<String, usize>) -> Option<(String, usize)> {
    let mut best: Option<(String, usize)> = None;
    for (key, count) in counts {
        if best.as_ref().map_or(true, |(_, c)| count > *c) {
            best = Some((key, count));
        }
    }
    best
}

// ── HistorySink impl ──────────────────────────────────────────────────────────

impl HistorySink for InMemoryLedger {
    /// Append one assignment record to the hash chain.
    ///
    /// Computes `this_hash` from (sequence, prev_hash, record), appends the
    /// wrapped entry, then advances the sequence counter and `last_hash`.
    /// When the retention cap is exceeded the oldest entry is evicted and its
    /// `this_hash` becomes the new chain anchor.
    ///
    /// Returns `Err(HistoryWriteFailed)` only if the internal mutex is
    /// poisoned, which cannot happen under normal operation.
    fn record(&self, record: &AssignmentRecord) -> DunlinResult<()> {
        let mut state = self
            .state
            .lock()
            .map_err(|e| DunlinError::HistoryWriteFailed {
                reason: format!("ledger lock poisoned: {}", e),
            })?;

        let prev_hash = state.last_hash.clone();
        let sequence = state.sequence;
        let this_hash = hash_record(sequence, record, &prev_hash);

        state.entries.push_back(LedgerEntry {
            sequence,
            record: record.clone(),
            prev_hash,
            this_hash: this_hash.clone(),
        });
        state.sequence += 1;
        state.last_hash = this_hash;

        if state.entries.len() > self.retention {
            // Re-anchor the chain at the evicted entry so verification of the
            // retained window still succeeds.
            if let Some(evicted) = state.entries.pop_front() {
                state.anchor_hash = evicted.this_hash;
                debug!(
                    sequence = evicted.sequence,
                    retention = self.retention,
                    "oldest ledger entry evicted"
                );
            }
        }

        Ok(())
    }
}
