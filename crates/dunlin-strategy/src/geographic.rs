//! Geographic strategy: route to an agent covering the item's territory.
//!
//! Location comes from explicit state/city fields, else a best-effort parse
//! of the free-text address (see `location`). Agents match when any territory
//! tag equals the city or state, case-insensitively. Among matches the least
//! loaded agent wins. No location signal or no covering agent → `NoMatch`,
//! chained into the load-based fallback by the standard registry.

use serde_json::json;
use tracing::debug;

use dunlin_contracts::assignment::{Selection, StrategyKind, StrategyOutcome};
use dunlin_engine::traits::{SelectionContext, Strategy};

use crate::{
    load_based::lowest_workload,
    location::{extract_location, territory_match},
};

/// The territory-matching strategy.
pub struct Geographic;

impl Strategy for Geographic {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Geographic
    }

    fn select(&self, ctx: &SelectionContext<'_>) -> StrategyOutcome {
        let Some(location) = extract_location(ctx.item) else {
            return StrategyOutcome::NoMatch {
                reason: "work item carries no location information".to_string(),
            };
        };

        let covering: Vec<_> = ctx
            .candidates
            .iter()
            .filter_map(|agent| territory_match(agent, &location).map(|territory| (agent, territory)))
            .collect();

        if covering.is_empty() {
            return StrategyOutcome::NoMatch {
                reason: format!("no agent territory covers {}", location.describe()),
            };
        }

        // Safe: `covering` is non-empty, so a minimum always exists.
        let (agent, snapshot) =
            lowest_workload(covering.iter().map(|(agent, _)| *agent), ctx.work_items)
                .expect("non-empty covering set always yields a minimum");
        let territory = covering
            .iter()
            .find(|(a, _)| a.id == agent.id)
            .map(|(_, t)| *t)
            .expect("chosen agent came from the covering set");

        debug!(
            agent_id = %agent.id,
            territory,
            location = %location.describe(),
            "geographic selection"
        );

        StrategyOutcome::Matched(Selection {
            agent: agent.clone(),
            strategy: StrategyKind::Geographic,
            reason: format!(
                "territory '{}' covers {} (workload score {})",
                territory,
                location.describe(),
                snapshot.workload_score
            ),
            metadata: json!({
                "city": location.city,
                "state": location.state,
                "matched_territory": territory,
                "workload": snapshot,
            }),
            rotation: None,
        })
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
