//! The availability filter — the single central eligibility gate.
//!
//! Every strategy receives only agents that passed this filter; no strategy
//! re-checks the active flag or the capacity ceiling. An agent is eligible
//! only if it is routable AND its active-item count is strictly below the
//! effective ceiling.

use tracing::debug;

use dunlin_contracts::{agent::Agent, work_item::WorkItem};

use crate::workload::compute_workload;

/// Return the subset of agents that may receive new work right now.
///
/// Excluded:
/// - agents that are not routable (active flag false or status inactive);
/// - agents whose active-item count has reached the effective ceiling,
///   `min(capacity_ceiling, agent.capacity)` — the global ceiling binds the
///   whole floor, an agent's own capacity may bind tighter.
///
/// An empty result is a hard "no assignment possible" signal for the caller,
/// not an error.
pub fn available_agents(
    agents: &[Agent],
    items: &[WorkItem],
    capacity_ceiling: u32,
) -> Vec<Agent> {
    agents
        .iter()
        .filter(|agent| {
            if !agent.is_routable() {
                debug!(agent_id = %agent.id, "agent not routable, excluded");
                return false;
            }
            let effective_ceiling = capacity_ceiling.min(agent.capacity);
            let snapshot = compute_workload(agent, items);
            if snapshot.active_items as u32 >= effective_ceiling {
                debug!(
                    agent_id = %agent.id,
                    active_items = snapshot.active_items,
                    effective_ceiling,
                    "agent at capacity, excluded"
                );
                return false;
            }
            true
        })
        .cloned()
        .collect()
}

// ── Tests ────────────────────────────────────────────────────────────────────
