//! Scenario 2: Batch Intake
//!
//! The full morning intake runs through `batch_auto_assign` under the
//! reference configuration: leads by skill, cases by load, claims by score,
//! the rest hybrid. The point on display is the batch ordering contract —
//! every successful assignment feeds the next item's workload view, so the
//! floor balances instead of piling onto one idle agent.

use dunlin_config::from_toml_str;
use dunlin_contracts::error::DunlinResult;
use dunlin_engine::{traits::SelectionOptions, Orchestrator};
use dunlin_history::InMemoryLedger;
use dunlin_strategy::standard_registry;

use crate::mock_data::{collections_floor, intake_batch, open_portfolio};
use crate::scenarios::skill_routing::COLLECTIONS_CONFIG;

/// Run Scenario 2: Batch Intake.
pub fn run_scenario() -> DunlinResult<()> {
    println!("=== Scenario 2: Batch Intake ===");
    println!();

    let config = from_toml_str(COLLECTIONS_CONFIG)?;
    let orchestrator = Orchestrator::new(standard_registry());
    let ledger = InMemoryLedger::new();

    let agents = collections_floor();
    let portfolio = open_portfolio();
    let intake = intake_batch();

    println!("  Intake size:    {}", intake.len());
    println!("  Existing items: {}", portfolio.len());
    println!();

    let report = orchestrator.batch_auto_assign(
        &intake,
        &agents,
        &portfolio,
        &config,
        &SelectionOptions::default(),
    );

    for assigned in &report.assigned {
        println!(
            "  {:<10} -> {:<12} [{}] {}",
            assigned.item_id,
            assigned.assignment.agent_name,
            assigned.assignment.strategy,
            assigned.assignment.reason
        );
        let item = intake
            .iter()
            .find(|item| item.id == assigned.item_id)
            .expect("batch report only names intake items");
        crate::record_batch_assignment(&ledger, item, &assigned.assignment)?;
    }
    for failed in &report.failed {
        println!("  {:<10} -> FAILED: {}", failed.item_id, failed.error);
    }

    println!();
    println!("  Assigned: {}  Failed: {}", report.assigned.len(), report.failed.len());
    println!("  Busiest agent after intake: {:?}", ledger.most_assigned_agent());
    println!();
    println!("  Scenario 2 complete.");
    println!();

    Ok(())
}
