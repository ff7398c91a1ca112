//! # dunlin-ref-collections
//!
//! Collections-floor reference runtime for the Dunlin assignment engine.
//!
//! Demonstrates four routing scenarios using mock data:
//!
//! 1. **Skill Routing** — a motor renewal lead lands on the skilled agent,
//!    with the derived skill set in the recorded reason.
//! 2. **Batch Intake** — a morning's intake balances across the floor,
//!    showing the per-item workload recomputation contract.
//! 3. **Geographic Routing** — address parsing, territory matching, and the
//!    load-based fallback when nobody covers a location.
//! 4. **Hybrid Scoring and Ledger Audit** — the hybrid breakdown metadata
//!    plus ledger aggregates and hash-chain verification.
//!
//! All data is hardcoded and fictional. No external API calls are made.

pub mod mock_data;
pub mod scenarios;

use dunlin_contracts::{
    assignment::{Assignment, AssignmentOutcome, AssignmentRecord},
    error::DunlinResult,
    work_item::WorkItem,
};
use dunlin_engine::traits::HistorySink;
use dunlin_history::InMemoryLedger;

/// Record a successful outcome into the ledger; failures are not ledgered.
pub fn record_outcome(
    ledger: &InMemoryLedger,
    item: &WorkItem,
    outcome: &AssignmentOutcome,
) -> DunlinResult<()> {
    if let AssignmentOutcome::Assigned(assignment) = outcome {
        ledger.record(&AssignmentRecord::from_assignment(item, assignment))?;
    }
    Ok(())
}

/// Record one batch assignment into the ledger.
pub fn record_batch_assignment(
    ledger: &InMemoryLedger,
    item: &WorkItem,
    assignment: &Assignment,
) -> DunlinResult<()> {
    ledger.record(&AssignmentRecord::from_assignment(item, assignment))
}
