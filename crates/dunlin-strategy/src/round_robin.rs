//! Round-robin strategy: fair rotation over the available pool.
//!
//! Rotation is keyed by agent identity, not by an index into the candidate
//! list: the cursor is the id of the last agent served, candidates are
//! ordered by a stable sort on id, and the lexicographic successor (wrapping)
//! is chosen. When the cursor's agent has left the pool the next id in order
//! serves, so churn cannot silently skip or double-serve anyone.

use serde_json::json;
use tracing::debug;

use dunlin_contracts::{
    agent::Agent,
    assignment::{RotationState, Selection, StrategyKind, StrategyOutcome},
};
use dunlin_engine::traits::{SelectionContext, Strategy};

/// The round-robin rotation strategy.
pub struct RoundRobin;

impl Strategy for RoundRobin {
    fn kind(&self) -> StrategyKind {
        StrategyKind::RoundRobin
    }

    fn select(&self, ctx: &SelectionContext<'_>) -> StrategyOutcome {
        if ctx.candidates.is_empty() {
            return StrategyOutcome::NoMatch {
                reason: "no available agents to rotate over".to_string(),
            };
        }

        let mut ordered: Vec<&Agent> = ctx.candidates.iter().collect();
        ordered.sort_by(|a, b| a.id.cmp(&b.id));

        let chosen = match &ctx.options.rotation.last_agent_id {
            // Successor of the last-served id in stable order, wrapping.
            Some(last) => ordered
                .iter()
                .find(|agent| agent.id > *last)
                .copied()
                .unwrap_or(ordered[0]),
            None => ordered[0],
        };

        debug!(
            agent_id = %chosen.id,
            previous = ?ctx.options.rotation.last_agent_id,
            pool_size = ordered.len(),
            "round-robin rotation advanced"
        );

        let next_rotation = RotationState {
            last_agent_id: Some(chosen.id.clone()),
        };

        StrategyOutcome::Matched(Selection {
            agent: chosen.clone(),
            strategy: StrategyKind::RoundRobin,
            reason: format!(
                "rotation reached agent '{}' ({} agents in rotation)",
                chosen.name,
                ordered.len()
            ),
            metadata: json!({ "rotation": &next_rotation }),
            rotation: Some(next_rotation),
        })
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
