//! Work item types.
//!
//! A work item is a routable unit of collections work — a lead, case, task,
//! claim, or email. Items are immutable from the engine's point of view:
//! upstream screens create them, status transitions happen elsewhere, and the
//! engine only reads them at decision time.

use serde::{Deserialize, Serialize};

/// Stable identifier for a work item, as supplied by the upstream system.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkItemId(pub String);

impl std::fmt::Display for WorkItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The kind of work being routed.
///
/// Each kind can be mapped to its own assignment strategy in `AssignConfig`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkItemKind {
    Lead,
    Case,
    Task,
    Claim,
    Email,
}

impl std::fmt::Display for WorkItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            WorkItemKind::Lead => "lead",
            WorkItemKind::Case => "case",
            WorkItemKind::Task => "task",
            WorkItemKind::Claim => "claim",
            WorkItemKind::Email => "email",
        };
        write!(f, "{}", s)
    }
}

/// Business priority of a work item.
///
/// `High` and `Urgent` both count as urgent for workload weighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

/// A routable unit of work.
///
/// Location, product, and value fields are all optional because upstream data
/// is inconsistent — every strategy that reads them must tolerate absence.
/// `assigned_to` holds the owner reference once an item has been routed; the
/// reference may be an agent id or a display name, and workload matching
/// accepts both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkItem {
    /// Upstream identifier.
    pub id: WorkItemId,
    /// Which routing lane (and therefore which strategy mapping) applies.
    pub kind: WorkItemKind,
    /// Outstanding monetary value, when known. Drives the HNI skill tag.
    pub value: Option<f64>,
    /// Priority score on a 0–100 scale, when scored. Drives score-based routing.
    pub score: Option<f64>,
    /// Explicit state field, preferred over address parsing.
    pub state: Option<String>,
    /// Explicit city field, preferred over address parsing.
    pub city: Option<String>,
    /// Free-text address, parsed best-effort when state/city are absent.
    pub address: Option<String>,
    /// Product line (e.g. "Motor", "Health"). Drives skill derivation.
    pub product: Option<String>,
    /// Business category (e.g. "New Business", "Renewal").
    pub category: Option<String>,
    /// Debtor company head-count, when the debtor is a business.
    pub company_size: Option<u32>,
    /// Free-form status string. Anything outside the terminal set counts as active.
    pub status: String,
    pub priority: Priority,
    /// Owner reference (agent id or name) once assigned.
    pub assigned_to: Option<String>,
}

impl WorkItem {
    /// Create an unassigned item with the given id and kind.
    ///
    /// Status starts as "New" and priority as `Medium`; all optional fields
    /// are empty. Tests and callers fill in what they need via struct update.
    pub fn new(id: impl Into<String>, kind: WorkItemKind) -> Self {
        Self {
            id: WorkItemId(id.into()),
            kind,
            value: None,
            score: None,
            state: None,
            city: None,
            address: None,
            product: None,
            category: None,
            company_size: None,
            status: "New".to_string(),
            priority: Priority::Medium,
            assigned_to: None,
        }
    }
}
