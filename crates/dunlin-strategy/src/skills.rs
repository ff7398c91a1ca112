//! Skill requirement derivation.
//!
//! A work item does not declare skills directly; the requirement set is
//! derived from its product line, category, monetary value, and debtor
//! company size. Shared by the skill-based and hybrid strategies so both see
//! the same requirements for the same item.

use dunlin_contracts::{agent::Agent, work_item::WorkItem};

/// Monetary value at or above which an item requires the HNI skill.
pub const HNI_VALUE_THRESHOLD: f64 = 1_000_000.0;

/// Debtor head-count at or above which an item requires the corporate skill;
/// below it, retail.
pub const CORPORATE_MIN_EMPLOYEES: u32 = 100;

/// Product-line keyword to skill tag mapping.
const PRODUCT_SKILLS: [(&str, &str); 6] = [
    ("motor", "motor_insurance"),
    ("health", "health_insurance"),
    ("life", "life_insurance"),
    ("property", "property_insurance"),
    ("marine", "marine_insurance"),
    ("travel", "travel_insurance"),
];

/// Derive the set of skill tags an item calls for, in a stable order.
///
/// Sources, in order:
/// 1. product/category keywords → product-line skills
/// 2. category "renewal" vs "new" → `renewal` / `new_business`
/// 3. value ≥ [`HNI_VALUE_THRESHOLD`] → `hni`
/// 4. company size → `corporate` or `retail`
///
/// Returns an empty vec when nothing can be derived — the skill-based
/// strategy treats that as "no skill signal" and defers to its fallback.
pub fn required_skills(item: &WorkItem) -> Vec<String> {
    let mut required: Vec<String> = Vec::new();
    let mut push = |skill: &str| {
        if !required.iter().any(|s| s == skill) {
            required.push(skill.to_string());
        }
    };

    let product_text = [item.product.as_deref(), item.category.as_deref()]
        .iter()
        .flatten()
        .map(|s| s.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");

    for (keyword, skill) in PRODUCT_SKILLS {
        if product_text.contains(keyword) {
            push(skill);
        }
    }

    if let Some(category) = &item.category {
        let category = category.to_lowercase();
        if category.contains("renewal") {
            push("renewal");
        } else if category.contains("new") {
            push("new_business");
        }
    }

    if item.value.is_some_and(|v| v >= HNI_VALUE_THRESHOLD) {
        push("hni");
    }

    if let Some(size) = item.company_size {
        if size >= CORPORATE_MIN_EMPLOYEES {
            push("corporate");
        } else {
            push("retail");
        }
    }

    required
}

/// The subset of `required` skills this agent holds.
pub fn matching_skills<'a>(agent: &Agent, required: &'a [String]) -> Vec<&'a str> {
    required
        .iter()
        .filter(|skill| agent.skills.iter().any(|s| s == *skill))
        .map(String::as_str)
        .collect()
}

// ── Tests ────────────────────────────────────────────────────────────────────
