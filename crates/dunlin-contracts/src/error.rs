//! Error taxonomy for the Dunlin assignment engine.
//!
//! Two tiers, deliberately separate:
//!
//! - [`AssignmentFailure`] — the four typed, expected outcomes of an
//!   assignment attempt that found no agent. Returned inside
//!   `AssignmentOutcome::Failed`, never as `Err`, so batch processing can
//!   continue past individual failures.
//! - [`DunlinError`] — hard faults (malformed configuration, ledger write
//!   failures) that surface as `Err` through `DunlinResult<T>`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why an assignment attempt produced no assignment.
///
/// Display strings are part of the caller contract — upstream screens match
/// on them — so they are fixed here and covered by tests.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssignmentFailure {
    /// The global enabled flag is off; nothing was evaluated.
    #[error("Auto-assignment is disabled")]
    Disabled,

    /// The agent pool is empty after active-flag filtering.
    #[error("No active agents available")]
    NoActiveAgents,

    /// Every active agent is at or over its capacity ceiling.
    #[error("All active agents are at capacity")]
    NoAvailableAgent,

    /// A strategy ran (fallbacks included) and still found no candidate.
    #[error("No suitable agent found")]
    NoSuitableAgent,
}

/// The unified hard-fault type for the Dunlin crates.
#[derive(Debug, Error)]
pub enum DunlinError {
    /// A required configuration value is missing or malformed.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// The history ledger could not append a record.
    #[error("history write failed: {reason}")]
    HistoryWriteFailed { reason: String },

    /// The configuration sink could not persist an update.
    #[error("configuration persist failed: {reason}")]
    ConfigPersistFailed { reason: String },
}

/// Convenience alias used throughout the Dunlin crates.
pub type DunlinResult<T> = Result<T, DunlinError>;
