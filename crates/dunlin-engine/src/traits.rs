//! Core trait definitions for the assignment pipeline.
//!
//! Two seams:
//!
//! - `Strategy` — a pure routing policy. Consumes a `SelectionContext` and
//!   either picks one agent or explicitly declines with `NoMatch`.
//! - `HistorySink` — the append-only destination for assignment records.
//!
//! The orchestrator wires strategies in; callers wire the history sink around
//! the orchestrator's pure results. Both traits are `Send + Sync` so an
//! orchestrator can sit behind a single shared owner in a concurrent host.

use std::collections::HashMap;

use dunlin_contracts::{
    agent::Agent,
    assignment::{AssignmentRecord, RotationState, StrategyOutcome},
    error::DunlinResult,
    work_item::WorkItem,
};

/// Caller-supplied knobs that travel alongside a selection.
///
/// The engine holds no mutable state of its own; the rotation cursor and the
/// external score map both live here, owned and persisted by the caller.
#[derive(Debug, Clone, Default)]
pub struct SelectionOptions {
    /// Round-robin cursor from the previous call, if any.
    pub rotation: RotationState,
    /// External value scores keyed by work-item id. Takes precedence over an
    /// item's inline `score` field for score-sensitive strategies.
    pub score_overrides: HashMap<String, f64>,
}

/// Everything a strategy needs to make one decision.
///
/// `candidates` has already passed the availability filter — strategies never
/// re-check the active flag or capacity. `work_items` is the full set of
/// existing items, used for workload computation.
#[derive(Debug)]
pub struct SelectionContext<'a> {
    pub item: &'a WorkItem,
    pub candidates: &'a [Agent],
    pub work_items: &'a [WorkItem],
    pub options: &'a SelectionOptions,
}

/// A pure routing policy choosing one agent for one work item.
///
/// Implementations must be deterministic: the same context always yields the
/// same outcome. Returning `NoMatch` is the explicit, composable way to defer
/// to a fallback — see the `OrElse` combinator in `dunlin-strategy`.
pub trait Strategy: Send + Sync {
    /// The policy this strategy implements, used for registry dispatch and
    /// result labeling.
    fn kind(&self) -> dunlin_contracts::assignment::StrategyKind;

    /// Choose an agent from `ctx.candidates`, or decline.
    fn select(&self, ctx: &SelectionContext<'_>) -> StrategyOutcome;
}

/// The append-only destination for assignment decisions.
///
/// Implementations must treat `record` as append-only: records are never
/// modified or deleted by the engine, only evicted by the sink's own
/// retention policy or an explicit clear.
pub trait HistorySink: Send + Sync {
    /// Append one assignment record.
    fn record(&self, record: &AssignmentRecord) -> DunlinResult<()>;
}
