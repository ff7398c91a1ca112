//! # dunlin-strategy
//!
//! The six assignment strategies for the Dunlin engine, plus the explicit
//! fallback combinator and the standard registry wiring.
//!
//! ## Overview
//!
//! Every strategy implements the [`Strategy`](dunlin_engine::traits::Strategy)
//! trait: a pure function from a selection context to either one agent with a
//! human-readable reason, or an explicit `NoMatch`. Fallbacks are composed,
//! not hard-coded — `SkillBased.or_else(LoadBased)` — so the fallback
//! contract is visible at the wiring site and testable in isolation.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use dunlin_engine::Orchestrator;
//! use dunlin_strategy::standard_registry;
//!
//! let orchestrator = Orchestrator::new(standard_registry());
//! ```

pub mod fallback;
pub mod geographic;
pub mod hybrid;
pub mod load_based;
pub mod location;
pub mod round_robin;
pub mod score_based;
pub mod skill_based;
pub mod skills;

pub use fallback::{OrElse, StrategyExt};
pub use geographic::Geographic;
pub use hybrid::{Hybrid, HybridBreakdown};
pub use load_based::LoadBased;
pub use round_robin::RoundRobin;
pub use score_based::ScoreBased;
pub use skill_based::SkillBased;

use dunlin_engine::StrategyRegistry;

/// Build the registry the production console runs with.
///
/// Skill-based and geographic routing fall back to load-based when their
/// filters come up empty; the other strategies stand alone. Round-robin,
/// load-based, score-based, and hybrid always produce a pick for a non-empty
/// candidate pool.
pub fn standard_registry() -> StrategyRegistry {
    let mut registry = StrategyRegistry::new();
    registry.register(Box::new(RoundRobin));
    registry.register(Box::new(LoadBased));
    registry.register(Box::new(SkillBased.or_else(LoadBased)));
    registry.register(Box::new(Geographic.or_else(LoadBased)));
    registry.register(Box::new(ScoreBased));
    registry.register(Box::new(Hybrid));
    registry
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use dunlin_contracts::{
        agent::Agent,
        assignment::{AssignmentOutcome, StrategyKind},
        config::AssignConfig,
        work_item::{WorkItem, WorkItemKind},
    };
    use dunlin_engine::{traits::SelectionOptions, Orchestrator};

    use super::standard_registry;

    fn orchestrator() -> Orchestrator {
        Orchestrator::new(standard_registry())
    }

    fn config_with(kind: WorkItemKind, strategy: StrategyKind) -> AssignConfig {
        let mut config = AssignConfig::default();
        config.strategies.insert(kind, strategy);
        config
    }

    // ── Fallback chain through the orchestrator ──────────────────────────────

    /// A motor case lands on the motor-skilled agent under skill-based
    /// routing, and the recorded reason names the skill.
    #[test]
    fn skill_routing_end_to_end() {
        let agents = vec![
            Agent {
                capacity: 2,
                ..Agent::new("A1", "Priya Nair")
            },
            Agent {
                capacity: 2,
                skills: vec!["motor_insurance".to_string()],
                ..Agent::new("A2", "Marcus Webb")
            },
        ];
        let item = WorkItem {
            product: Some("Motor".to_string()),
            ..WorkItem::new("I1", WorkItemKind::Case)
        };

        let outcome = orchestrator().assign_entity(
            &item,
            &agents,
            &[],
            &config_with(WorkItemKind::Case, StrategyKind::SkillBased),
            &SelectionOptions::default(),
        );

        match outcome {
            AssignmentOutcome::Assigned(assignment) => {
                assert_eq!(assignment.agent_id.0, "A2");
                assert_eq!(assignment.strategy, StrategyKind::SkillBased);
                assert!(assignment.reason.contains("motor_insurance"));
            }
            AssignmentOutcome::Failed { error } => panic!("unexpected failure: {error}"),
        }
    }

    /// An item with no skill signal routed skill-based falls through to the
    /// load-based fallback, and the result says so.
    #[test]
    fn skill_routing_falls_back_to_load() {
        let agents = vec![
            Agent {
                skills: vec!["health_insurance".to_string()],
                ..Agent::new("A1", "Priya Nair")
            },
            Agent {
                skills: vec!["life_insurance".to_string()],
                ..Agent::new("A2", "Marcus Webb")
            },
        ];
        // An email with no product, category, value, or company size.
        let item = WorkItem::new("I1", WorkItemKind::Email);

        let outcome = orchestrator().assign_entity(
            &item,
            &agents,
            &[],
            &config_with(WorkItemKind::Email, StrategyKind::SkillBased),
            &SelectionOptions::default(),
        );

        match outcome {
            AssignmentOutcome::Assigned(assignment) => {
                assert_eq!(assignment.strategy, StrategyKind::LoadBased);
                assert!(assignment.reason.contains("lowest workload"));
            }
            AssignmentOutcome::Failed { error } => panic!("unexpected failure: {error}"),
        }
    }

    /// Geographic routing with no agent covering the territory falls back
    /// to load-based instead of failing.
    #[test]
    fn geographic_falls_back_when_uncovered() {
        let agents = vec![Agent {
            territories: vec!["Karnataka".to_string()],
            ..Agent::new("A1", "Priya Nair")
        }];
        let item = WorkItem {
            state: Some("Kerala".to_string()),
            ..WorkItem::new("I1", WorkItemKind::Case)
        };

        let outcome = orchestrator().assign_entity(
            &item,
            &agents,
            &[],
            &config_with(WorkItemKind::Case, StrategyKind::Geographic),
            &SelectionOptions::default(),
        );

        match outcome {
            AssignmentOutcome::Assigned(assignment) => {
                assert_eq!(assignment.strategy, StrategyKind::LoadBased);
            }
            AssignmentOutcome::Failed { error } => panic!("unexpected failure: {error}"),
        }
    }

    // ── Batch properties over the real strategies ────────────────────────────

    /// Load-based batch over 3 items and 2 agents: each assignment shifts the
    /// next item's workload view, so the picks alternate.
    #[test]
    fn load_based_batch_alternates() {
        let agents = vec![Agent::new("A1", "Priya Nair"), Agent::new("A2", "Marcus Webb")];
        let items = vec![
            WorkItem::new("I1", WorkItemKind::Case),
            WorkItem::new("I2", WorkItemKind::Case),
            WorkItem::new("I3", WorkItemKind::Case),
        ];

        let report = orchestrator().batch_auto_assign(
            &items,
            &agents,
            &[],
            &config_with(WorkItemKind::Case, StrategyKind::LoadBased),
            &SelectionOptions::default(),
        );

        let picks: Vec<&str> = report
            .assigned
            .iter()
            .map(|a| a.assignment.agent_id.0.as_str())
            .collect();
        assert_eq!(picks, vec!["A1", "A2", "A1"]);
    }

    /// Round-robin over N agents serves each exactly once per N calls,
    /// cycling, with the cursor threaded through the batch.
    #[test]
    fn round_robin_batch_cycles() {
        let agents = vec![
            Agent::new("A1", "Priya Nair"),
            Agent::new("A2", "Marcus Webb"),
            Agent::new("A3", "Sofia Reyes"),
        ];
        let items: Vec<WorkItem> = (1..=6)
            .map(|i| WorkItem::new(format!("I{}", i), WorkItemKind::Task))
            .collect();

        let report = orchestrator().batch_auto_assign(
            &items,
            &agents,
            &[],
            &config_with(WorkItemKind::Task, StrategyKind::RoundRobin),
            &SelectionOptions::default(),
        );

        let picks: Vec<&str> = report
            .assigned
            .iter()
            .map(|a| a.assignment.agent_id.0.as_str())
            .collect();
        assert_eq!(picks, vec!["A1", "A2", "A3", "A1", "A2", "A3"]);
    }

    /// Capacity exhaustion mid-batch: overflow items fail without aborting.
    #[test]
    fn batch_overflow_fails_gracefully() {
        let agents = vec![
            Agent {
                capacity: 1,
                ..Agent::new("A1", "Priya Nair")
            },
            Agent {
                capacity: 1,
                ..Agent::new("A2", "Marcus Webb")
            },
        ];
        let items: Vec<WorkItem> = (1..=3)
            .map(|i| WorkItem::new(format!("I{}", i), WorkItemKind::Case))
            .collect();

        let report = orchestrator().batch_auto_assign(
            &items,
            &agents,
            &[],
            &config_with(WorkItemKind::Case, StrategyKind::LoadBased),
            &SelectionOptions::default(),
        );

        assert_eq!(report.assigned.len(), 2);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].item_id.0, "I3");
    }
}
