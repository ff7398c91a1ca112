//! Assignment decision types.
//!
//! `Selection` is what a strategy produces, `Assignment` is the normalized
//! result the orchestrator hands back to callers, and `AssignmentRecord` is
//! the ledger entry derived from a completed assignment. All three carry the
//! human-readable reason — explainability is a first-class contract, not a
//! debugging aid.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    agent::{Agent, AgentId},
    error::AssignmentFailure,
    work_item::{WorkItem, WorkItemId, WorkItemKind},
};

/// The named policy a strategy implements.
///
/// Serialized in kebab-case so configuration files read naturally:
/// `default_strategy = "hybrid"`, `lead = "skill-based"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    RoundRobin,
    LoadBased,
    SkillBased,
    Geographic,
    ScoreBased,
    Hybrid,
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            StrategyKind::RoundRobin => "round-robin",
            StrategyKind::LoadBased => "load-based",
            StrategyKind::SkillBased => "skill-based",
            StrategyKind::Geographic => "geographic",
            StrategyKind::ScoreBased => "score-based",
            StrategyKind::Hybrid => "hybrid",
        };
        write!(f, "{}", s)
    }
}

/// Round-robin rotation cursor, keyed by agent identity.
///
/// The caller stores this between calls and re-supplies it; the engine holds
/// no rotation state of its own. Identity-based rotation (rather than an
/// index into the candidate list) keeps the cursor meaningful when agents go
/// active or inactive between calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationState {
    /// The id of the agent served most recently, if any.
    pub last_agent_id: Option<AgentId>,
}

/// A derived load signal for one agent against one set of work items.
///
/// Recomputed on every decision — never cached across decisions, because the
/// item set may have changed (this is what makes batch assignment correct).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadSnapshot {
    /// Every item carrying this agent's owner reference, regardless of status.
    pub total_items: usize,
    /// Items whose status is outside the terminal set.
    pub active_items: usize,
    /// Active items with urgent or high priority.
    pub urgent_items: usize,
    /// Composite load signal: `active_items * 1 + urgent_items * 2`.
    pub workload_score: u32,
}

/// A successful pick produced by a strategy.
#[derive(Debug, Clone)]
pub struct Selection {
    /// The chosen agent.
    pub agent: Agent,
    /// The strategy that actually produced this pick. When a fallback chain
    /// engages, this names the fallback, not the strategy that deferred.
    pub strategy: StrategyKind,
    /// Human-readable explanation of the pick.
    pub reason: String,
    /// Strategy-specific audit detail (score breakdowns, matched skills,
    /// rotation cursors) as JSON.
    pub metadata: serde_json::Value,
    /// The rotation cursor to carry into the next call, when the strategy
    /// rotates. `None` for non-rotating strategies.
    pub rotation: Option<RotationState>,
}

/// What a strategy returns: a pick, or an explicit refusal to pick.
///
/// `NoMatch` means "defer to fallback" or "no candidate" — it is a valid
/// outcome, not an error, and callers must handle it without panicking.
#[derive(Debug, Clone)]
pub enum StrategyOutcome {
    Matched(Selection),
    NoMatch {
        /// Why no candidate qualified under this strategy.
        reason: String,
    },
}

/// The normalized result of a successful assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    pub agent_id: AgentId,
    pub agent_name: String,
    pub strategy: StrategyKind,
    pub reason: String,
    pub metadata: serde_json::Value,
    /// Rotation cursor for the caller to store, when the strategy rotates.
    pub rotation: Option<RotationState>,
    /// Generated at assignment time by the orchestrator, not supplied by the caller.
    pub assigned_at: DateTime<Utc>,
}

/// The outcome of a single assignment attempt.
///
/// The orchestrator always returns, never panics: every failure mode is a
/// typed `AssignmentFailure` so batch processing can continue past it.
#[derive(Debug, Clone)]
pub enum AssignmentOutcome {
    Assigned(Assignment),
    Failed {
        error: AssignmentFailure,
    },
}

impl AssignmentOutcome {
    /// True when the attempt produced an assignment.
    pub fn is_assigned(&self) -> bool {
        matches!(self, AssignmentOutcome::Assigned(_))
    }
}

/// One successfully assigned item within a batch.
#[derive(Debug, Clone)]
pub struct BatchAssigned {
    pub item_id: WorkItemId,
    pub assignment: Assignment,
}

/// One failed item within a batch.
#[derive(Debug, Clone)]
pub struct BatchFailed {
    pub item_id: WorkItemId,
    pub error: AssignmentFailure,
}

/// The collected result of a batch run.
///
/// Items are processed strictly in input order; `rotation` is the cursor
/// after the final item, for the caller to persist.
#[derive(Debug, Clone)]
pub struct BatchReport {
    pub assigned: Vec<BatchAssigned>,
    pub failed: Vec<BatchFailed>,
    pub rotation: RotationState,
}

/// An immutable ledger entry describing one assignment decision.
///
/// Created at assignment time, never mutated, eventually evicted by the
/// ledger's retention cap or an explicit clear.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentRecord {
    /// Unique record id.
    pub id: uuid::Uuid,
    pub item_id: WorkItemId,
    pub item_kind: WorkItemKind,
    pub agent_id: AgentId,
    pub agent_name: String,
    pub strategy: StrategyKind,
    pub reason: String,
    pub assigned_at: DateTime<Utc>,
    pub metadata: serde_json::Value,
}

impl AssignmentRecord {
    /// Build a ledger entry from a completed assignment.
    pub fn from_assignment(item: &WorkItem, assignment: &Assignment) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            item_id: item.id.clone(),
            item_kind: item.kind,
            agent_id: assignment.agent_id.clone(),
            agent_name: assignment.agent_name.clone(),
            strategy: assignment.strategy,
            reason: assignment.reason.clone(),
            assigned_at: assignment.assigned_at,
            metadata: assignment.metadata.clone(),
        }
    }
}
