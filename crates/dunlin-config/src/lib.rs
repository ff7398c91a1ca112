//! # dunlin-config
//!
//! TOML-driven configuration loading and the in-process configuration store
//! for the Dunlin assignment engine.
//!
//! ## Overview
//!
//! The engine reads configuration as plain data on every call; this crate
//! owns where that data lives between calls. [`ConfigStore`] is constructed
//! once at process start — from defaults or a TOML file — and mutated only
//! through explicit update calls, each of which is forwarded to an optional
//! [`ConfigSink`] for external persistence.
//!
//! ## Configuration format
//!
//! ```toml
//! enabled = true
//! default_strategy = "hybrid"
//! capacity_ceiling = 10
//!
//! [strategies]
//! lead = "skill-based"
//! case = "load-based"
//!
//! [reassignment]
//! on_overload = false
//! inactivity_threshold_hours = 24
//! ```

pub mod store;

pub use store::{from_file, from_toml_str, ConfigSink, ConfigStore};

// ── Tests ─────────────────────────────────────────────────────────────────────
