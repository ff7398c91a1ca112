//! # dunlin-history
//!
//! Append-only, capped, SHA-256 hash-chained assignment ledger for the
//! Dunlin engine.
//!
//! ## Overview
//!
//! Every assignment decision the orchestrator produces can be recorded here
//! as a `LedgerEntry` that links to the previous entry via its SHA-256 hash.
//! Tampering with any retained entry — even a single byte — breaks the chain
//! and is detected by `verify_chain`. Retention is capped (1000 entries by
//! default); eviction re-anchors the chain at the evicted entry's hash.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use dunlin_history::{InMemoryLedger, LedgerFilter};
//! use dunlin_engine::traits::HistorySink;
//!
//! let ledger = InMemoryLedger::new();
//! ledger.record(&assignment_record)?;
//!
//! assert!(ledger.verify_integrity());
//! let motor_cases = ledger.list(&LedgerFilter::default());
//! ```

pub mod chain;
pub mod entry;
pub mod ledger;

pub use chain::{hash_record, verify_chain};
pub use entry::{LedgerEntry, LedgerFilter};
pub use ledger::{InMemoryLedger, DEFAULT_RETENTION};

// ── Tests ─────────────────────────────────────────────────────────────────────
