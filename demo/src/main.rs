//! Dunlin Collections Reference Runtime — Demo CLI
//!
//! Runs one or all of the four assignment demo scenarios. Each scenario uses
//! real Dunlin components (orchestrator, strategy registry, configuration
//! loader, assignment ledger) wired together with mock collections data.
//!
//! Usage:
//!   cargo run -p demo -- run-all
//!   cargo run -p demo -- skill-routing
//!   cargo run -p demo -- batch-intake
//!   cargo run -p demo -- geo-routing
//!   cargo run -p demo -- hybrid-audit

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use dunlin_ref_collections::scenarios::{batch_intake, geo_routing, hybrid_audit, skill_routing};

// ── CLI definition ────────────────────────────────────────────────────────────

/// Dunlin — deterministic auto-assignment engine collections demo.
///
/// Each subcommand runs one or all of the four routing scenarios,
/// demonstrating strategy dispatch, fallback chains, batch ordering, and the
/// hash-chained assignment ledger.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "Dunlin collections reference runtime demo",
    long_about = "Runs Dunlin assignment demo scenarios showing strategy dispatch,\n\
                  fallback chains, batch workload recomputation, and ledger auditing."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run all four assignment scenarios in sequence.
    RunAll,
    /// Scenario 1: Skill Routing (derived skills pick the agent).
    SkillRouting,
    /// Scenario 2: Batch Intake (per-item workload recomputation).
    BatchIntake,
    /// Scenario 3: Geographic Routing (territories + load fallback).
    GeoRouting,
    /// Scenario 4: Hybrid Scoring and Ledger Audit (breakdown + aggregates).
    HybridAudit,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialize structured logging. Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    print_banner();

    let result = match cli.command {
        Command::RunAll => run_all(),
        Command::SkillRouting => skill_routing::run_scenario(),
        Command::BatchIntake => batch_intake::run_scenario(),
        Command::GeoRouting => geo_routing::run_scenario(),
        Command::HybridAudit => hybrid_audit::run_scenario(),
    };

    match result {
        Ok(()) => {
            println!("All selected scenarios completed successfully.");
        }
        Err(e) => {
            eprintln!("Demo error: {}", e);
            std::process::exit(1);
        }
    }
}

// ── Scenario dispatch ─────────────────────────────────────────────────────────

fn run_all() -> dunlin_contracts::error::DunlinResult<()> {
    skill_routing::run_scenario()?;
    batch_intake::run_scenario()?;
    geo_routing::run_scenario()?;
    hybrid_audit::run_scenario()?;
    Ok(())
}

// ── Banner ────────────────────────────────────────────────────────────────────

fn print_banner() {
    println!();
    println!("Dunlin — Auto-Assignment Engine");
    println!("Collections Reference Demo");
    println!("===============================");
    println!();
    println!("Dunlin decision pipeline per work item:");
    println!("  [1] Global enabled flag checked — disabled means no-op, not error");
    println!("  [2] Active-flag pre-filter, then the availability (capacity) filter");
    println!("  [3] Strategy resolved per item kind, with explicit fallback chains");
    println!("  [4] One agent picked with a human-readable reason + metadata");
    println!("  [5] Decision appended to the SHA-256 hash-chained assignment ledger");
    println!();
}
