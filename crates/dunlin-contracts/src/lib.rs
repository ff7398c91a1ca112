//! # dunlin-contracts
//!
//! Shared types, configuration model, and error taxonomy for the Dunlin
//! auto-assignment engine.
//!
//! All crates in the workspace import from here. No business logic lives in
//! this crate — only data definitions and error types.

pub mod agent;
pub mod assignment;
pub mod config;
pub mod error;
pub mod work_item;

#[cfg(test)]
mod tests {
    use super::*;
    use agent::{Agent, AgentStatus, PerformanceTier};
    use assignment::{RotationState, StrategyKind};
    use config::AssignConfig;
    use error::AssignmentFailure;
    use work_item::{Priority, WorkItem, WorkItemKind};

    // ── StrategyKind serde ───────────────────────────────────────────────────

    #[test]
    fn strategy_kind_serializes_kebab_case() {
        let json = serde_json::to_string(&StrategyKind::RoundRobin).unwrap();
        assert_eq!(json, "\"round-robin\"");

        let json = serde_json::to_string(&StrategyKind::SkillBased).unwrap();
        assert_eq!(json, "\"skill-based\"");
    }

    #[test]
    fn strategy_kind_round_trips() {
        for kind in [
            StrategyKind::RoundRobin,
            StrategyKind::LoadBased,
            StrategyKind::SkillBased,
            StrategyKind::Geographic,
            StrategyKind::ScoreBased,
            StrategyKind::Hybrid,
        ] {
            let json = serde_json::to_string(&kind).unwrap();
            let decoded: StrategyKind = serde_json::from_str(&json).unwrap();
            assert_eq!(kind, decoded);
        }
    }

    #[test]
    fn strategy_kind_display_matches_serde() {
        let json = serde_json::to_string(&StrategyKind::Hybrid).unwrap();
        assert_eq!(json, format!("\"{}\"", StrategyKind::Hybrid));
    }

    // ── Agent routability ────────────────────────────────────────────────────

    #[test]
    fn agent_routable_requires_flag_and_status() {
        let agent = Agent::new("A1", "Priya Nair");
        assert!(agent.is_routable());

        let flagged_off = Agent {
            active: false,
            ..agent.clone()
        };
        assert!(!flagged_off.is_routable());

        let status_inactive = Agent {
            status: AgentStatus::Inactive,
            ..agent
        };
        assert!(!status_inactive.is_routable());
    }

    #[test]
    fn agent_defaults() {
        let agent = Agent::new("A1", "Priya Nair");
        assert_eq!(agent.tier, PerformanceTier::Average);
        assert_eq!(agent.capacity, 10);
        assert!(agent.skills.is_empty());
        assert!(agent.territories.is_empty());
    }

    // ── WorkItem defaults ────────────────────────────────────────────────────

    #[test]
    fn work_item_new_is_unassigned() {
        let item = WorkItem::new("I1", WorkItemKind::Case);
        assert_eq!(item.status, "New");
        assert_eq!(item.priority, Priority::Medium);
        assert!(item.assigned_to.is_none());
        assert!(item.value.is_none());
    }

    // ── AssignConfig ─────────────────────────────────────────────────────────

    #[test]
    fn config_defaults() {
        let config = AssignConfig::default();
        assert!(config.enabled);
        assert_eq!(config.default_strategy, StrategyKind::Hybrid);
        assert_eq!(config.capacity_ceiling, 10);
        assert!(config.strategies.is_empty());
        assert!(!config.reassignment.on_overload);
        assert_eq!(config.reassignment.inactivity_threshold_hours, 24);
    }

    #[test]
    fn config_strategy_for_falls_back_to_default() {
        let mut config = AssignConfig::default();
        config
            .strategies
            .insert(WorkItemKind::Lead, StrategyKind::SkillBased);

        assert_eq!(
            config.strategy_for(WorkItemKind::Lead),
            StrategyKind::SkillBased
        );
        // Unmapped kinds use the default.
        assert_eq!(config.strategy_for(WorkItemKind::Email), StrategyKind::Hybrid);
    }

    // ── Failure display strings ──────────────────────────────────────────────

    #[test]
    fn failure_strings_are_stable() {
        assert_eq!(
            AssignmentFailure::NoActiveAgents.to_string(),
            "No active agents available"
        );
        assert_eq!(
            AssignmentFailure::NoSuitableAgent.to_string(),
            "No suitable agent found"
        );
        assert_eq!(
            AssignmentFailure::Disabled.to_string(),
            "Auto-assignment is disabled"
        );
        assert_eq!(
            AssignmentFailure::NoAvailableAgent.to_string(),
            "All active agents are at capacity"
        );
    }

    // ── RotationState ────────────────────────────────────────────────────────

    #[test]
    fn rotation_state_default_is_empty() {
        let rotation = RotationState::default();
        assert!(rotation.last_agent_id.is_none());
    }

    #[test]
    fn rotation_state_round_trips() {
        let rotation = RotationState {
            last_agent_id: Some(agent::AgentId("A7".to_string())),
        };
        let json = serde_json::to_string(&rotation).unwrap();
        let decoded: RotationState = serde_json::from_str(&json).unwrap();
        assert_eq!(rotation, decoded);
    }
}
