//! Scenario 3: Geographic Routing
//!
//! Two items exercise both halves of the geographic strategy: one with a
//! parseable free-text address that a territory covers, and one located where
//! no agent operates — which falls back to load-based rather than failing.

use dunlin_config::from_toml_str;
use dunlin_contracts::{
    assignment::{AssignmentOutcome, StrategyKind},
    error::DunlinResult,
    work_item::{WorkItem, WorkItemKind},
};
use dunlin_engine::{traits::SelectionOptions, Orchestrator};
use dunlin_strategy::standard_registry;

use crate::mock_data::{collections_floor, open_portfolio};
use crate::scenarios::skill_routing::COLLECTIONS_CONFIG;

/// Run Scenario 3: Geographic Routing.
pub fn run_scenario() -> DunlinResult<()> {
    println!("=== Scenario 3: Geographic Routing ===");
    println!();

    let mut config = from_toml_str(COLLECTIONS_CONFIG)?;
    config
        .strategies
        .insert(WorkItemKind::Task, StrategyKind::Geographic);

    let orchestrator = Orchestrator::new(standard_registry());
    let agents = collections_floor();
    let portfolio = open_portfolio();

    // A field visit task with only a free-text address.
    let covered = WorkItem {
        address: Some("Flat 4B, 12 MG Road, Bengaluru, Karnataka".to_string()),
        ..WorkItem::new("TASK-3001", WorkItemKind::Task)
    };
    // A task in a state no agent covers.
    let uncovered = WorkItem {
        state: Some("Kerala".to_string()),
        ..WorkItem::new("TASK-3002", WorkItemKind::Task)
    };

    for task in [&covered, &uncovered] {
        let outcome = orchestrator.assign_entity(
            task,
            &agents,
            &portfolio,
            &config,
            &SelectionOptions::default(),
        );

        match outcome {
            AssignmentOutcome::Assigned(assignment) => {
                println!("  {}:", task.id);
                println!("    Assigned to:  {}", assignment.agent_name);
                println!("    Via strategy: {}", assignment.strategy);
                println!("    Reason:       {}", assignment.reason);
            }
            AssignmentOutcome::Failed { error } => {
                println!("  {}: NOT ASSIGNED: {}", task.id, error);
            }
        }
        println!();
    }

    println!("  Scenario 3 complete.");
    println!();

    Ok(())
}
