//! Workload calculation.
//!
//! `compute_workload` turns (agent, work items) into a `WorkloadSnapshot` —
//! the load signal every workload-sensitive strategy reads. It is a pure
//! function of its inputs and runs repeatedly within a batch, so the same
//! inputs must always produce the identical snapshot.

use dunlin_contracts::{
    agent::Agent,
    assignment::WorkloadSnapshot,
    work_item::{Priority, WorkItem},
};

/// Statuses that mean a work item no longer contributes to workload.
///
/// This is an allow-list of TERMINAL statuses, not of active ones: upstream
/// systems introduce new in-progress statuses without engine changes, and
/// anything unrecognized counts as active.
pub const TERMINAL_STATUSES: [&str; 4] = ["Closed Won", "Closed Lost", "Completed", "Cancelled"];

/// True when the status string is in the terminal set.
pub fn is_terminal_status(status: &str) -> bool {
    TERMINAL_STATUSES.contains(&status)
}

/// True when the item's owner reference points at this agent.
///
/// Upstream data is inconsistent about whether `assigned_to` carries an agent
/// id or a display name, so both are accepted — there is no single join key.
fn owned_by(item: &WorkItem, agent: &Agent) -> bool {
    match &item.assigned_to {
        Some(owner) => owner == &agent.id.0 || owner == &agent.name,
        None => false,
    }
}

/// Compute the load signal for one agent against one set of work items.
///
/// - `total_items`: every item owned by the agent, regardless of status.
/// - `active_items`: owned items whose status is not terminal.
/// - `urgent_items`: active items with `Urgent` or `High` priority.
/// - `workload_score`: `active_items * 1 + urgent_items * 2`.
pub fn compute_workload(agent: &Agent, items: &[WorkItem]) -> WorkloadSnapshot {
    let mut total_items = 0usize;
    let mut active_items = 0usize;
    let mut urgent_items = 0usize;

    for item in items.iter().filter(|item| owned_by(item, agent)) {
        total_items += 1;
        if is_terminal_status(&item.status) {
            continue;
        }
        active_items += 1;
        if matches!(item.priority, Priority::Urgent | Priority::High) {
            urgent_items += 1;
        }
    }

    WorkloadSnapshot {
        total_items,
        active_items,
        urgent_items,
        workload_score: active_items as u32 + urgent_items as u32 * 2,
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
