//! The assignment orchestrator.
//!
//! The orchestrator enforces the decision pipeline for every work item:
//!
//!   enabled? → active agents? → availability filter → strategy → Assignment
//!
//! Its contract is "always returns, never panics": every way an attempt can
//! come up empty is a typed `AssignmentFailure` inside the outcome, so batch
//! processing continues past individual failures. The engine stays pure —
//! persistence of agents, configuration, rotation cursors, and history
//! happens around it, not inside it.

use std::collections::HashMap;

use chrono::Utc;
use tracing::{debug, info, warn};

use dunlin_contracts::{
    agent::Agent,
    assignment::{
        Assignment, AssignmentOutcome, BatchAssigned, BatchFailed, BatchReport, StrategyKind,
        StrategyOutcome,
    },
    config::AssignConfig,
    error::AssignmentFailure,
    work_item::WorkItem,
};

use crate::{
    availability::available_agents,
    traits::{SelectionContext, SelectionOptions, Strategy},
};

/// Dispatch table from strategy kind to implementation.
///
/// Built once at startup (see `dunlin_strategy::standard_registry`) and
/// handed to the orchestrator. Registering the same kind twice replaces the
/// previous strategy.
#[derive(Default)]
pub struct StrategyRegistry {
    strategies: HashMap<StrategyKind, Box<dyn Strategy>>,
}

impl StrategyRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a strategy under its own declared kind.
    pub fn register(&mut self, strategy: Box<dyn Strategy>) {
        self.strategies.insert(strategy.kind(), strategy);
    }

    /// Look up the strategy for a kind.
    pub fn resolve(&self, kind: StrategyKind) -> Option<&dyn Strategy> {
        self.strategies.get(&kind).map(|s| s.as_ref())
    }
}

/// The central orchestrator driving single and batch assignment.
pub struct Orchestrator {
    registry: StrategyRegistry,
}

impl Orchestrator {
    /// Create an orchestrator over the given strategy registry.
    pub fn new(registry: StrategyRegistry) -> Self {
        Self { registry }
    }

    /// Route one work item to one agent.
    ///
    /// # Pipeline
    ///
    /// 1. `config.enabled` off → `Disabled` (nothing evaluated)
    /// 2. No routable agent in `agents` → `NoActiveAgents` — distinct from
    ///    capacity exhaustion so callers can tell the two apart
    /// 3. Availability filter leaves no candidate → `NoAvailableAgent`
    /// 4. Strategy resolved from `config.strategies[item.kind]`, falling back
    ///    to `config.default_strategy`; its `NoMatch` → `NoSuitableAgent`
    /// 5. Otherwise `Assigned`, with `assigned_at` stamped here at call time
    pub fn assign_entity(
        &self,
        item: &WorkItem,
        agents: &[Agent],
        existing_items: &[WorkItem],
        config: &AssignConfig,
        options: &SelectionOptions,
    ) -> AssignmentOutcome {
        debug!(item_id = %item.id, kind = %item.kind, "assignment starting");

        if !config.enabled {
            debug!(item_id = %item.id, "auto-assignment disabled, skipping");
            return AssignmentOutcome::Failed {
                error: AssignmentFailure::Disabled,
            };
        }

        // Active-flag pre-filter, before capacity is considered. An empty
        // floor and a fully loaded floor are different operational problems.
        if !agents.iter().any(Agent::is_routable) {
            warn!(item_id = %item.id, "no active agents in pool");
            return AssignmentOutcome::Failed {
                error: AssignmentFailure::NoActiveAgents,
            };
        }

        let candidates = available_agents(agents, existing_items, config.capacity_ceiling);
        if candidates.is_empty() {
            warn!(item_id = %item.id, "all active agents at capacity");
            return AssignmentOutcome::Failed {
                error: AssignmentFailure::NoAvailableAgent,
            };
        }

        let kind = config.strategy_for(item.kind);
        let strategy = match self
            .registry
            .resolve(kind)
            .or_else(|| self.registry.resolve(config.default_strategy))
        {
            Some(s) => s,
            None => {
                // A registry without even the default strategy is a wiring
                // mistake, but the contract is to fail the item, not the call.
                warn!(item_id = %item.id, strategy = %kind, "no strategy registered");
                return AssignmentOutcome::Failed {
                    error: AssignmentFailure::NoSuitableAgent,
                };
            }
        };

        let ctx = SelectionContext {
            item,
            candidates: &candidates,
            work_items: existing_items,
            options,
        };

        match strategy.select(&ctx) {
            StrategyOutcome::Matched(selection) => {
                info!(
                    item_id = %item.id,
                    agent_id = %selection.agent.id,
                    strategy = %selection.strategy,
                    reason = %selection.reason,
                    "work item assigned"
                );
                AssignmentOutcome::Assigned(Assignment {
                    agent_id: selection.agent.id,
                    agent_name: selection.agent.name,
                    strategy: selection.strategy,
                    reason: selection.reason,
                    metadata: selection.metadata,
                    rotation: selection.rotation,
                    assigned_at: Utc::now(),
                })
            }
            StrategyOutcome::NoMatch { reason } => {
                warn!(item_id = %item.id, strategy = %kind, %reason, "no suitable agent");
                AssignmentOutcome::Failed {
                    error: AssignmentFailure::NoSuitableAgent,
                }
            }
        }
    }

    /// Route a batch of work items, strictly in input order.
    ///
    /// After each successful assignment the item — tagged with its new owner —
    /// is appended to a working copy of `existing_items` BEFORE the next item
    /// is processed. Workload-sensitive strategies therefore see the effect of
    /// earlier assignments in the same batch; snapshotting workload once per
    /// batch would violate this and is deliberately impossible here.
    ///
    /// The rotation cursor is carried across items and returned for the caller
    /// to persist. A failed item never aborts the batch.
    pub fn batch_auto_assign(
        &self,
        items: &[WorkItem],
        agents: &[Agent],
        existing_items: &[WorkItem],
        config: &AssignConfig,
        options: &SelectionOptions,
    ) -> BatchReport {
        let mut working_view: Vec<WorkItem> = existing_items.to_vec();
        let mut step_options = options.clone();
        let mut assigned = Vec::new();
        let mut failed = Vec::new();

        info!(batch_size = items.len(), "batch assignment starting");

        for item in items {
            match self.assign_entity(item, agents, &working_view, config, &step_options) {
                AssignmentOutcome::Assigned(assignment) => {
                    // Feed this decision into the next item's workload view.
                    working_view.push(WorkItem {
                        assigned_to: Some(assignment.agent_id.0.clone()),
                        ..item.clone()
                    });
                    if let Some(rotation) = &assignment.rotation {
                        step_options.rotation = rotation.clone();
                    }
                    assigned.push(BatchAssigned {
                        item_id: item.id.clone(),
                        assignment,
                    });
                }
                AssignmentOutcome::Failed { error } => {
                    failed.push(BatchFailed {
                        item_id: item.id.clone(),
                        error,
                    });
                }
            }
        }

        info!(
            assigned = assigned.len(),
            failed = failed.len(),
            "batch assignment finished"
        );

        BatchReport {
            assigned,
            failed,
            rotation: step_options.rotation,
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
