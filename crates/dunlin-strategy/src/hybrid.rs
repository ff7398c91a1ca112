//! Hybrid strategy: the default, blending every routing signal.
//!
//! Every candidate starts from a base of 100 and receives additive
//! adjustments: a load penalty, a per-skill bonus, a tier bonus, a high-value
//! bonus for strong tiers, and a territory bonus. The full breakdown is part
//! of the result metadata — exposing the component scores, not just the final
//! pick, is a contract of this strategy, and the components always sum to the
//! reported total.

use serde::Serialize;
use serde_json::json;
use tracing::debug;

use dunlin_contracts::{
    agent::{Agent, PerformanceTier},
    assignment::{Selection, StrategyKind, StrategyOutcome},
};
use dunlin_engine::{compute_workload, traits::{SelectionContext, Strategy}};

use crate::{
    location::{extract_location, territory_match},
    score_based::value_score,
    skills::{matching_skills, required_skills},
};

/// Starting score for every candidate.
const BASE_SCORE: i64 = 100;
/// Multiplier on the workload score, subtracted.
const LOAD_PENALTY_WEIGHT: i64 = 2;
/// Bonus per matching skill.
const SKILL_BONUS: i64 = 20;
/// Bonus when the item score is ≥ 80 and the agent tier is top or high.
const HIGH_VALUE_BONUS: i64 = 25;
/// Bonus when a territory covers the item's location.
const TERRITORY_BONUS: i64 = 15;

fn tier_bonus(tier: PerformanceTier) -> i64 {
    match tier {
        PerformanceTier::Top => 30,
        PerformanceTier::High => 20,
        PerformanceTier::Average => 10,
        PerformanceTier::Low => 0,
    }
}

/// The additive component scores for one candidate.
///
/// `total` is always the sum of the other fields; `penalty` components are
/// stored negative so the sum property holds without special cases.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct HybridBreakdown {
    pub base: i64,
    pub load_penalty: i64,
    pub skill_bonus: i64,
    pub tier_bonus: i64,
    pub high_value_bonus: i64,
    pub territory_bonus: i64,
    pub total: i64,
}

/// Score one candidate against one item.
pub fn score_agent(
    agent: &Agent,
    ctx: &SelectionContext<'_>,
    required: &[String],
) -> HybridBreakdown {
    let snapshot = compute_workload(agent, ctx.work_items);
    let load_penalty = -(snapshot.workload_score as i64 * LOAD_PENALTY_WEIGHT);
    let skill_bonus = matching_skills(agent, required).len() as i64 * SKILL_BONUS;
    let tier_bonus = tier_bonus(agent.tier);

    let score = value_score(ctx.item, ctx.options);
    let strong_tier = matches!(agent.tier, PerformanceTier::Top | PerformanceTier::High);
    let high_value_bonus = if score >= 80.0 && strong_tier {
        HIGH_VALUE_BONUS
    } else {
        0
    };

    let territory_bonus = extract_location(ctx.item)
        .and_then(|location| territory_match(agent, &location))
        .map_or(0, |_| TERRITORY_BONUS);

    let total =
        BASE_SCORE + load_penalty + skill_bonus + tier_bonus + high_value_bonus + territory_bonus;

    HybridBreakdown {
        base: BASE_SCORE,
        load_penalty,
        skill_bonus,
        tier_bonus,
        high_value_bonus,
        territory_bonus,
        total,
    }
}

/// The blended default strategy.
pub struct Hybrid;

impl Strategy for Hybrid {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Hybrid
    }

    fn select(&self, ctx: &SelectionContext<'_>) -> StrategyOutcome {
        if ctx.candidates.is_empty() {
            return StrategyOutcome::NoMatch {
                reason: "no available agents to score".to_string(),
            };
        }

        let required = required_skills(ctx.item);

        // Maximum total wins; a strict comparison keeps the first candidate
        // on ties, matching the list-order discipline of the other strategies.
        let mut best: Option<(&Agent, HybridBreakdown)> = None;
        for agent in ctx.candidates {
            let breakdown = score_agent(agent, ctx, &required);
            if best.map_or(true, |(_, b)| breakdown.total > b.total) {
                best = Some((agent, breakdown));
            }
        }

        let (agent, breakdown) =
            best.expect("candidates are non-empty, a maximum always exists");

        debug!(
            agent_id = %agent.id,
            total = breakdown.total,
            "hybrid selection"
        );

        StrategyOutcome::Matched(Selection {
            agent: agent.clone(),
            strategy: StrategyKind::Hybrid,
            reason: format!(
                "hybrid score {} (load {:+}, skills {:+}, tier {:+}, value {:+}, territory {:+})",
                breakdown.total,
                breakdown.load_penalty,
                breakdown.skill_bonus,
                breakdown.tier_bonus,
                breakdown.high_value_bonus,
                breakdown.territory_bonus
            ),
            metadata: json!({ "breakdown": breakdown, "required_skills": required }),
            rotation: None,
        })
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use dunlin_contracts::{
        agent::{Agent, PerformanceTier},
        assignment::StrategyOutcome,
        work_item::{Priority, WorkItem, WorkItemKind},
    };
    use dunlin_engine::traits::{SelectionContext, SelectionOptions, Strategy};

    use super::{score_agent, Hybrid};
    use crate::skills::required_skills;

    fn agent(id: &str, name: &str) -> Agent {
        Agent::new(id, name)
    }

    /// The breakdown components always sum to the reported total.
    #[test]
    fn breakdown_components_sum_to_total() {
        let candidate = Agent {
            skills: vec!["motor_insurance".to_string(), "hni".to_string()],
            territories: vec!["Karnataka".to_string()],
            tier: PerformanceTier::Top,
            ..agent("A1", "Priya Nair")
        };
        let item = WorkItem {
            product: Some("Motor".to_string()),
            value: Some(2_000_000.0),
            score: Some(88.0),
            state: Some("Karnataka".to_string()),
            ..WorkItem::new("I1", WorkItemKind::Claim)
        };
        let existing = vec![WorkItem {
            status: "In Progress".to_string(),
            priority: Priority::Urgent,
            assigned_to: Some("A1".to_string()),
            ..WorkItem::new("I0", WorkItemKind::Case)
        }];

        let options = SelectionOptions::default();
        let ctx = SelectionContext {
            item: &item,
            candidates: std::slice::from_ref(&candidate),
            work_items: &existing,
            options: &options,
        };
        let required = required_skills(&item);
        let breakdown = score_agent(&candidate, &ctx, &required);

        assert_eq!(
            breakdown.total,
            breakdown.base
                + breakdown.load_penalty
                + breakdown.skill_bonus
                + breakdown.tier_bonus
                + breakdown.high_value_bonus
                + breakdown.territory_bonus
        );
        // One urgent active item: workload score 3 → penalty -6. Two skill
        // matches → +40. Top tier → +30. Score 88 on a top tier → +25.
        // Territory match → +15.
        assert_eq!(breakdown.load_penalty, -6);
        assert_eq!(breakdown.skill_bonus, 40);
        assert_eq!(breakdown.tier_bonus, 30);
        assert_eq!(breakdown.high_value_bonus, 25);
        assert_eq!(breakdown.territory_bonus, 15);
        assert_eq!(breakdown.total, 100 - 6 + 40 + 30 + 25 + 15);
    }

    /// The maximum total wins.
    #[test]
    fn highest_total_wins() {
        let agents = vec![
            Agent {
                tier: PerformanceTier::Low,
                ..agent("A1", "Priya Nair")
            },
            Agent {
                tier: PerformanceTier::Top,
                skills: vec!["motor_insurance".to_string()],
                ..agent("A2", "Marcus Webb")
            },
        ];
        let item = WorkItem {
            product: Some("Motor".to_string()),
            ..WorkItem::new("I1", WorkItemKind::Case)
        };

        let options = SelectionOptions::default();
        let outcome = Hybrid.select(&SelectionContext {
            item: &item,
            candidates: &agents,
            work_items: &[],
            options: &options,
        });

        match outcome {
            StrategyOutcome::Matched(selection) => {
                assert_eq!(selection.agent.id.0, "A2");
                assert!(selection.metadata["breakdown"]["total"].is_i64());
            }
            StrategyOutcome::NoMatch { reason } => panic!("unexpected NoMatch: {reason}"),
        }
    }

    /// Identical breakdowns: the first candidate in list order wins.
    #[test]
    fn ties_break_on_list_order() {
        let agents = vec![agent("A2", "Marcus Webb"), agent("A1", "Priya Nair")];
        let item = WorkItem::new("I1", WorkItemKind::Case);

        let options = SelectionOptions::default();
        let outcome = Hybrid.select(&SelectionContext {
            item: &item,
            candidates: &agents,
            work_items: &[],
            options: &options,
        });

        match outcome {
            StrategyOutcome::Matched(selection) => assert_eq!(selection.agent.id.0, "A2"),
            StrategyOutcome::NoMatch { reason } => panic!("unexpected NoMatch: {reason}"),
        }
    }

    /// Load pulls a strong agent below an idle weaker one when heavy enough.
    #[test]
    fn heavy_load_outweighs_tier() {
        let agents = vec![
            Agent {
                tier: PerformanceTier::Top,
                ..agent("A1", "Priya Nair")
            },
            Agent {
                tier: PerformanceTier::Average,
                ..agent("A2", "Marcus Webb")
            },
        ];
        // Top tier is +20 over average; 4 urgent active items is a workload
        // score of 12 → penalty -24, enough to flip the pick.
        let existing: Vec<WorkItem> = (0..4)
            .map(|i| WorkItem {
                status: "In Progress".to_string(),
                priority: Priority::Urgent,
                assigned_to: Some("A1".to_string()),
                ..WorkItem::new(format!("I{}", i), WorkItemKind::Case)
            })
            .collect();
        let item = WorkItem::new("I9", WorkItemKind::Case);

        let options = SelectionOptions::default();
        let outcome = Hybrid.select(&SelectionContext {
            item: &item,
            candidates: &agents,
            work_items: &existing,
            options: &options,
        });

        match outcome {
            StrategyOutcome::Matched(selection) => assert_eq!(selection.agent.id.0, "A2"),
            StrategyOutcome::NoMatch { reason } => panic!("unexpected NoMatch: {reason}"),
        }
    }

    #[test]
    fn empty_pool_declines() {
        let item = WorkItem::new("I1", WorkItemKind::Case);
        let options = SelectionOptions::default();
        let outcome = Hybrid.select(&SelectionContext {
            item: &item,
            candidates: &[],
            work_items: &[],
            options: &options,
        });
        assert!(matches!(outcome, StrategyOutcome::NoMatch { .. }));
    }
}
