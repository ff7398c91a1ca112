//! Work-item location extraction and territory matching.
//!
//! Shared by the geographic and hybrid strategies. Explicit state/city fields
//! are always preferred; a free-text address is parsed best-effort by
//! splitting on commas and reading the last two tokens as city and state.

use dunlin_contracts::{agent::Agent, work_item::WorkItem};

/// A resolved location for one work item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemLocation {
    pub city: Option<String>,
    pub state: Option<String>,
}

impl ItemLocation {
    /// Short human-readable form for reason strings.
    pub fn describe(&self) -> String {
        match (&self.city, &self.state) {
            (Some(city), Some(state)) => format!("{}, {}", city, state),
            (Some(city), None) => city.clone(),
            (None, Some(state)) => state.clone(),
            (None, None) => "unknown".to_string(),
        }
    }
}

/// Extract a location from the item, or `None` when it carries no signal.
///
/// Address parsing keeps only non-empty comma-separated tokens. Two or more
/// tokens: the last two are city, state. A single token is read as a state.
pub fn extract_location(item: &WorkItem) -> Option<ItemLocation> {
    if item.state.is_some() || item.city.is_some() {
        return Some(ItemLocation {
            city: item.city.clone(),
            state: item.state.clone(),
        });
    }

    let address = item.address.as_deref()?;
    let tokens: Vec<&str> = address
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect();

    match tokens.as_slice() {
        [] => None,
        [only] => Some(ItemLocation {
            city: None,
            state: Some((*only).to_string()),
        }),
        [.., city, state] => Some(ItemLocation {
            city: Some((*city).to_string()),
            state: Some((*state).to_string()),
        }),
    }
}

/// The first of the agent's territories matching the location, if any.
///
/// Territories match case-insensitively against either the city or the state.
pub fn territory_match<'a>(agent: &'a Agent, location: &ItemLocation) -> Option<&'a str> {
    let matches = |territory: &str, field: &Option<String>| {
        field
            .as_deref()
            .is_some_and(|f| f.eq_ignore_ascii_case(territory))
    };

    agent
        .territories
        .iter()
        .find(|t| matches(t, &location.city) || matches(t, &location.state))
        .map(String::as_str)
}

// ── Tests ────────────────────────────────────────────────────────────────────
