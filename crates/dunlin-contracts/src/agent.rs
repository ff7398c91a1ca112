//! Agent identity and state types.
//!
//! An agent is a human collections worker eligible to receive work items.
//! The agent directory is owned by an external settings screen — the engine
//! only reads agent state at decision time and never persists it.

use serde::{Deserialize, Serialize};

/// Stable identifier for an agent.
///
/// Used across strategy metadata, ledger records, and rotation cursors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AgentId(pub String);

impl std::fmt::Display for AgentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Coarse lifecycle status for an agent.
///
/// `active == false` and `status == Inactive` are both honored when deciding
/// routability because upstream data carries both conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    Active,
    Inactive,
}

/// Coarse agent quality classification used to bias score-sensitive routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PerformanceTier {
    Top,
    High,
    Average,
    Low,
}

impl std::fmt::Display for PerformanceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PerformanceTier::Top => "top",
            PerformanceTier::High => "high",
            PerformanceTier::Average => "average",
            PerformanceTier::Low => "low",
        };
        write!(f, "{}", s)
    }
}

/// A routable human worker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    pub id: AgentId,
    /// Display name. Also accepted as an owner reference on work items.
    pub name: String,
    /// Availability flag from the settings screen.
    pub active: bool,
    pub status: AgentStatus,
    /// Skill tags (e.g. "motor_insurance", "hni"). An empty set means the
    /// agent is universally qualified for skill-based routing.
    pub skills: Vec<String>,
    /// Territory tags — state or city names, matched case-insensitively.
    pub territories: Vec<String>,
    pub tier: PerformanceTier,
    /// Maximum active items this agent may hold.
    pub capacity: u32,
}

impl Agent {
    /// Create an active, average-tier agent with no skills or territories
    /// and a capacity of 10. Callers adjust fields via struct update.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: AgentId(id.into()),
            name: name.into(),
            active: true,
            status: AgentStatus::Active,
            skills: Vec::new(),
            territories: Vec::new(),
            tier: PerformanceTier::Average,
            capacity: 10,
        }
    }

    /// True when the agent may receive work at all: the active flag is set
    /// AND the status is `Active`. Capacity is checked separately by the
    /// availability filter.
    pub fn is_routable(&self) -> bool {
        self.active && self.status == AgentStatus::Active
    }
}
