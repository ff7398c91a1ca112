//! Assignment engine configuration model.
//!
//! `AssignConfig` is created with defaults at process start and mutated only
//! through explicit update calls on the configuration store. The engine reads
//! it as plain data on every decision — it never caches or mutates it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{assignment::StrategyKind, work_item::WorkItemKind};

/// Toggles controlling when already-assigned work may be re-routed.
///
/// The engine itself does not perform reassignment; these toggles are read by
/// the surrounding console when it decides whether to re-enter the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReassignmentRules {
    /// Re-route work away from agents that exceed the capacity ceiling.
    #[serde(default)]
    pub on_overload: bool,
    /// Re-route work held by agents with no recent activity.
    #[serde(default)]
    pub on_inactivity: bool,
    /// Hours of silence before an agent counts as inactive for reassignment.
    #[serde(default = "default_inactivity_hours")]
    pub inactivity_threshold_hours: u32,
}

fn default_inactivity_hours() -> u32 {
    24
}

impl Default for ReassignmentRules {
    fn default() -> Self {
        Self {
            on_overload: false,
            on_inactivity: false,
            inactivity_threshold_hours: default_inactivity_hours(),
        }
    }
}

/// The full assignment engine configuration.
///
/// All fields have serde defaults so a partial TOML file deserializes into a
/// working configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignConfig {
    /// Global kill switch. When false, every assignment attempt fails with
    /// the `Disabled` outcome before any agent is considered.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Strategy used for any work-item kind without an explicit mapping.
    #[serde(default = "default_strategy")]
    pub default_strategy: StrategyKind,
    /// Global maximum of active items per agent. Each agent's own capacity
    /// may bind tighter; the effective ceiling is the minimum of the two.
    #[serde(default = "default_capacity_ceiling")]
    pub capacity_ceiling: u32,
    /// Per-kind strategy overrides.
    #[serde(default)]
    pub strategies: HashMap<WorkItemKind, StrategyKind>,
    #[serde(default)]
    pub reassignment: ReassignmentRules,
}

fn default_enabled() -> bool {
    true
}

fn default_strategy() -> StrategyKind {
    StrategyKind::Hybrid
}

fn default_capacity_ceiling() -> u32 {
    10
}

impl Default for AssignConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            default_strategy: default_strategy(),
            capacity_ceiling: default_capacity_ceiling(),
            strategies: HashMap::new(),
            reassignment: ReassignmentRules::default(),
        }
    }
}

impl AssignConfig {
    /// Resolve the strategy for a work-item kind, falling back to the default.
    pub fn strategy_for(&self, kind: WorkItemKind) -> StrategyKind {
        self.strategies
            .get(&kind)
            .copied()
            .unwrap_or(self.default_strategy)
    }
}
