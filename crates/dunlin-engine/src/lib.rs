//! # dunlin-engine
//!
//! The deterministic assignment core for Dunlin.
//!
//! This crate provides:
//! - The workload calculator and the availability filter — the two leaf
//!   components every strategy builds on
//! - The `Strategy` and `HistorySink` traits
//! - The `StrategyRegistry` and the `Orchestrator` with single-item and
//!   batch entry points
//!
//! The engine is synchronous, pure computation: no I/O, no internal locking,
//! no state beyond what the caller supplies. Persistence of agents,
//! configuration, rotation cursors, and history lives with the caller.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use dunlin_engine::{Orchestrator, traits::SelectionOptions};
//! use dunlin_strategy::standard_registry;
//!
//! let orchestrator = Orchestrator::new(standard_registry());
//! let outcome = orchestrator.assign_entity(&item, &agents, &existing, &config, &options);
//! ```

pub mod availability;
pub mod orchestrator;
pub mod traits;
pub mod workload;

pub use availability::available_agents;
pub use orchestrator::{Orchestrator, StrategyRegistry};
pub use workload::compute_workload;
