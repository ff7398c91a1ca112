//! Scenario 1: Skill Routing
//!
//! A high-value motor renewal lead arrives. Under skill-based routing it must
//! land on an agent holding the derived skills rather than whoever is idle.
//!
//! Pipeline walk-through for the demo run:
//!   1. Config maps `lead` → skill-based (with load-based fallback)
//!   2. Availability filter drops the inactive agent and anyone at capacity
//!   3. Skill derivation: Motor + Renewal + value ≥ 1,000,000 →
//!      [motor_insurance, renewal, hni]
//!   4. Priya Nair (motor_insurance + hni) out-matches the rest
//!   5. The decision and its reason land in the assignment ledger

use dunlin_config::from_toml_str;
use dunlin_contracts::{assignment::AssignmentOutcome, error::DunlinResult};
use dunlin_engine::{traits::SelectionOptions, Orchestrator};
use dunlin_history::{InMemoryLedger, LedgerFilter};
use dunlin_strategy::standard_registry;

use crate::mock_data::{collections_floor, intake_batch, open_portfolio};

/// Embedded reference configuration shared by all scenarios.
pub const COLLECTIONS_CONFIG: &str = include_str!("../../config/collections.toml");

/// Run Scenario 1: Skill Routing.
pub fn run_scenario() -> DunlinResult<()> {
    println!("=== Scenario 1: Skill Routing ===");
    println!();

    let config = from_toml_str(COLLECTIONS_CONFIG)?;
    let orchestrator = Orchestrator::new(standard_registry());
    let ledger = InMemoryLedger::new();

    let agents = collections_floor();
    let portfolio = open_portfolio();
    // The motor renewal lead from the morning intake.
    let lead = intake_batch().remove(0);

    println!("  Item:     {} ({} / {:?})", lead.id, lead.kind, lead.product);
    println!("  Value:    {:.0}", lead.value.unwrap_or(0.0));
    println!("  Strategy: {}", config.strategy_for(lead.kind));
    println!();

    let outcome = orchestrator.assign_entity(
        &lead,
        &agents,
        &portfolio,
        &config,
        &SelectionOptions::default(),
    );

    match &outcome {
        AssignmentOutcome::Assigned(assignment) => {
            println!("  Assigned to:  {} ({})", assignment.agent_name, assignment.agent_id);
            println!("  Via strategy: {}", assignment.strategy);
            println!("  Reason:       {}", assignment.reason);

            crate::record_outcome(&ledger, &lead, &outcome)?;
        }
        AssignmentOutcome::Failed { error } => {
            println!("  NOT ASSIGNED: {}", error);
        }
    }

    println!();
    println!(
        "  Ledger entries:         {}",
        ledger.list(&LedgerFilter::default()).len()
    );
    println!(
        "  Ledger chain integrity: {}",
        if ledger.verify_integrity() { "VERIFIED" } else { "FAILED" }
    );
    println!();
    println!("  Scenario 1 complete.");
    println!();

    Ok(())
}
