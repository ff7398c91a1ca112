//! Scenario walkthroughs for the Dunlin reference runtime.

pub mod batch_intake;
pub mod geo_routing;
pub mod hybrid_audit;
pub mod skill_routing;
