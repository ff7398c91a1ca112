//! Load-based strategy: route to the least loaded agent.
//!
//! Also the shared fallback for the skill-based and geographic strategies,
//! and the source of the `lowest_workload` helper they use to break their own
//! ties.

use serde_json::json;
use tracing::debug;

use dunlin_contracts::{
    agent::Agent,
    assignment::{Selection, StrategyKind, StrategyOutcome, WorkloadSnapshot},
    work_item::WorkItem,
};
use dunlin_engine::{compute_workload, traits::{SelectionContext, Strategy}};

/// Pick the agent with the minimum workload score from `agents`.
///
/// Ties break on the first minimum encountered in iteration order — a
/// deterministic design choice, not a business rule.
pub(crate) fn lowest_workload<'a, I>(
    agents: I,
    work_items: &[WorkItem],
) -> Option<(&'a Agent, WorkloadSnapshot)>
where
    I: IntoIterator<Item = &'a Agent>,
{
    let mut best: Option<(&Agent, WorkloadSnapshot)> = None;
    for agent in agents {
        let snapshot = compute_workload(agent, work_items);
        let better = best
            .as_ref()
            .map_or(true, |(_, b)| snapshot.workload_score < b.workload_score);
        if better {
            best = Some((agent, snapshot));
        }
    }
    best
}

/// The minimum-workload strategy.
pub struct LoadBased;

impl Strategy for LoadBased {
    fn kind(&self) -> StrategyKind {
        StrategyKind::LoadBased
    }

    fn select(&self, ctx: &SelectionContext<'_>) -> StrategyOutcome {
        let Some((agent, snapshot)) = lowest_workload(ctx.candidates, ctx.work_items) else {
            return StrategyOutcome::NoMatch {
                reason: "no available agents to compare load across".to_string(),
            };
        };

        debug!(
            agent_id = %agent.id,
            workload_score = snapshot.workload_score,
            "load-based selection"
        );

        StrategyOutcome::Matched(Selection {
            agent: agent.clone(),
            strategy: StrategyKind::LoadBased,
            reason: format!(
                "lowest workload score {} ({} active, {} urgent)",
                snapshot.workload_score, snapshot.active_items, snapshot.urgent_items
            ),
            metadata: json!({ "workload": snapshot }),
            rotation: None,
        })
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
