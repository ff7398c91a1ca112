//! The configuration store: the single owner of mutable engine configuration.
//!
//! Constructed once per process with defaults (or a loaded TOML file),
//! mutated only through explicit update calls, read through snapshots. Every
//! successful update is forwarded to an optional `ConfigSink` so the external
//! persistence collaborator stays in sync; the engine itself never touches
//! storage.

use std::path::Path;
use std::sync::Mutex;

use tracing::{debug, info};

use dunlin_contracts::{
    assignment::StrategyKind,
    config::AssignConfig,
    error::{DunlinError, DunlinResult},
    work_item::WorkItemKind,
};

/// The external persistence seam for configuration.
///
/// Called after each successful in-memory update with the full new
/// configuration. Implementations persist wherever the hosting console keeps
/// settings; failures propagate to the updater, leaving the in-memory state
/// already advanced — the caller decides whether to retry the persist.
pub trait ConfigSink: Send + Sync {
    /// Persist the given configuration.
    fn persist(&self, config: &AssignConfig) -> DunlinResult<()>;
}

/// Parse `s` as a TOML `AssignConfig`.
///
/// All fields are optional in the document; missing ones take their defaults.
/// Returns `DunlinError::ConfigError` if the TOML is malformed or does not
/// match the configuration schema.
pub fn from_toml_str(s: &str) -> DunlinResult<AssignConfig> {
    toml::from_str(s).map_err(|e| DunlinError::ConfigError {
        reason: format!("failed to parse assignment config TOML: {}", e),
    })
}

/// Read the file at `path` and parse it as TOML configuration.
pub fn from_file(path: &Path) -> DunlinResult<AssignConfig> {
    let contents = std::fs::read_to_string(path).map_err(|e| DunlinError::ConfigError {
        reason: format!("failed to read config file '{}': {}", path.display(), e),
    })?;
    from_toml_str(&contents)
}

/// Mutex-guarded owner of the live `AssignConfig`.
pub struct ConfigStore {
    state: Mutex<AssignConfig>,
    sink: Option<Box<dyn ConfigSink>>,
}

impl ConfigStore {
    /// Create a store over an initial configuration, with no persistence.
    pub fn new(config: AssignConfig) -> Self {
        Self {
            state: Mutex::new(config),
            sink: None,
        }
    }

    /// Create a store that forwards every update to `sink`.
    pub fn with_sink(config: AssignConfig, sink: Box<dyn ConfigSink>) -> Self {
        Self {
            state: Mutex::new(config),
            sink: Some(sink),
        }
    }

    /// Create a store with process-start defaults.
    pub fn defaults() -> Self {
        Self::new(AssignConfig::default())
    }

    /// Load the TOML file at `path` into a new store.
    pub fn from_file(path: &Path) -> DunlinResult<Self> {
        Ok(Self::new(from_file(path)?))
    }

    /// A read-only copy of the current configuration.
    pub fn snapshot(&self) -> AssignConfig {
        self.state.lock().expect("config lock poisoned").clone()
    }

    /// Apply `mutate` to the configuration, persist, and return the result.
    pub fn update(&self, mutate: impl FnOnce(&mut AssignConfig)) -> DunlinResult<AssignConfig> {
        let updated = {
            let mut state = self.state.lock().expect("config lock poisoned");
            mutate(&mut state);
            state.clone()
        };

        if let Some(sink) = &self.sink {
            sink.persist(&updated)?;
        }

        debug!(
            enabled = updated.enabled,
            default_strategy = %updated.default_strategy,
            capacity_ceiling = updated.capacity_ceiling,
            "assignment config updated"
        );

        Ok(updated)
    }

    /// Map one work-item kind to a strategy.
    pub fn update_strategy_for_kind(
        &self,
        kind: WorkItemKind,
        strategy: StrategyKind,
    ) -> DunlinResult<AssignConfig> {
        info!(%kind, %strategy, "strategy mapping updated");
        self.update(|config| {
            config.strategies.insert(kind, strategy);
        })
    }

    /// Flip the global enabled switch.
    pub fn set_enabled(&self, enabled: bool) -> DunlinResult<AssignConfig> {
        info!(enabled, "auto-assignment toggled");
        self.update(|config| config.enabled = enabled)
    }
}
