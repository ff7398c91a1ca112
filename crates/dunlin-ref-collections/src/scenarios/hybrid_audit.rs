//! Scenario 4: Hybrid Scoring and Ledger Audit
//!
//! The hybrid default blends every signal — load, skills, tier, value score,
//! territory — and must expose its full additive breakdown, not just the
//! pick. This scenario prints the breakdown from the result metadata, then
//! records a run of assignments and reads the ledger's aggregate views and
//! chain integrity back out.

use dunlin_config::from_toml_str;
use dunlin_contracts::{
    assignment::AssignmentOutcome,
    error::DunlinResult,
    work_item::{Priority, WorkItem, WorkItemKind},
};
use dunlin_engine::{traits::SelectionOptions, Orchestrator};
use dunlin_history::{InMemoryLedger, LedgerFilter};
use dunlin_strategy::standard_registry;

use crate::mock_data::{collections_floor, intake_batch, open_portfolio};
use crate::scenarios::skill_routing::COLLECTIONS_CONFIG;

/// Run Scenario 4: Hybrid Scoring and Ledger Audit.
pub fn run_scenario() -> DunlinResult<()> {
    println!("=== Scenario 4: Hybrid Scoring and Ledger Audit ===");
    println!();

    let config = from_toml_str(COLLECTIONS_CONFIG)?;
    let orchestrator = Orchestrator::new(standard_registry());
    let ledger = InMemoryLedger::new();

    let agents = collections_floor();
    let portfolio = open_portfolio();

    // An unmapped kind routes via the hybrid default.
    let item = WorkItem {
        priority: Priority::High,
        value: Some(1_800_000.0),
        score: Some(86.0),
        product: Some("Motor".to_string()),
        state: Some("Karnataka".to_string()),
        ..WorkItem::new("TASK-4001", WorkItemKind::Task)
    };

    let outcome = orchestrator.assign_entity(
        &item,
        &agents,
        &portfolio,
        &config,
        &SelectionOptions::default(),
    );

    match &outcome {
        AssignmentOutcome::Assigned(assignment) => {
            println!("  Assigned to:  {}", assignment.agent_name);
            println!("  Reason:       {}", assignment.reason);
            println!(
                "  Breakdown:    {}",
                serde_json::to_string_pretty(&assignment.metadata["breakdown"])
                    .unwrap_or_else(|_| "<unavailable>".to_string())
            );
            crate::record_outcome(&ledger, &item, &outcome)?;
        }
        AssignmentOutcome::Failed { error } => {
            println!("  NOT ASSIGNED: {}", error);
        }
    }
    println!();

    // ── Fill the ledger with the morning intake and read the aggregates ──────

    let report = orchestrator.batch_auto_assign(
        &intake_batch(),
        &agents,
        &portfolio,
        &config,
        &SelectionOptions::default(),
    );
    let intake = intake_batch();
    for assigned in &report.assigned {
        let batch_item = intake
            .iter()
            .find(|i| i.id == assigned.item_id)
            .expect("batch report only names intake items");
        crate::record_batch_assignment(&ledger, batch_item, &assigned.assignment)?;
    }

    println!("  Ledger after intake:");
    println!("    Entries:            {}", ledger.list(&LedgerFilter::default()).len());
    println!("    By strategy:        {:?}", ledger.counts_by_strategy());
    println!("    Most used strategy: {:?}", ledger.most_used_strategy());
    println!("    Most assigned:      {:?}", ledger.most_assigned_agent());
    println!(
        "    Chain integrity:    {}",
        if ledger.verify_integrity() { "VERIFIED" } else { "FAILED" }
    );
    println!();
    println!("  Scenario 4 complete.");
    println!();

    Ok(())
}
