//! Score-based strategy: route high-value work to top performers.
//!
//! The item's score is resolved as: external override map (keyed by item id)
//! → inline `score` field → 0. Score bands restrict the performance tiers
//! considered; an empty tier subset falls back to the full candidate pool so
//! a tier mismatch alone never fails an assignment.

use serde_json::json;
use tracing::debug;

use dunlin_contracts::{
    agent::PerformanceTier,
    assignment::{Selection, StrategyKind, StrategyOutcome},
    work_item::WorkItem,
};
use dunlin_engine::traits::{SelectionContext, SelectionOptions, Strategy};

use crate::load_based::lowest_workload;

/// Resolve the routing score for an item: override map, inline field, else 0.
pub(crate) fn value_score(item: &WorkItem, options: &SelectionOptions) -> f64 {
    options
        .score_overrides
        .get(&item.id.0)
        .copied()
        .or(item.score)
        .unwrap_or(0.0)
}

/// The tiers preferred for a given score, and the band's display name.
///
/// ≥80: top and high performers only. 60–79: average joins. Below 60: no
/// tier restriction.
fn preferred_tiers(score: f64) -> (&'static [PerformanceTier], &'static str) {
    if score >= 80.0 {
        (&[PerformanceTier::Top, PerformanceTier::High], "high")
    } else if score >= 60.0 {
        (
            &[
                PerformanceTier::Top,
                PerformanceTier::High,
                PerformanceTier::Average,
            ],
            "medium",
        )
    } else {
        (&[], "unrestricted")
    }
}

/// The performance-tier routing strategy.
pub struct ScoreBased;

impl Strategy for ScoreBased {
    fn kind(&self) -> StrategyKind {
        StrategyKind::ScoreBased
    }

    fn select(&self, ctx: &SelectionContext<'_>) -> StrategyOutcome {
        if ctx.candidates.is_empty() {
            return StrategyOutcome::NoMatch {
                reason: "no available agents to rank by tier".to_string(),
            };
        }

        let score = value_score(ctx.item, ctx.options);
        let (tiers, band) = preferred_tiers(score);

        let mut eligible: Vec<_> = ctx
            .candidates
            .iter()
            .filter(|agent| tiers.is_empty() || tiers.contains(&agent.tier))
            .collect();

        // A tier mismatch never fails the assignment on its own.
        let tier_restricted = !eligible.is_empty() && !tiers.is_empty();
        if eligible.is_empty() {
            eligible = ctx.candidates.iter().collect();
        }

        let (agent, snapshot) = lowest_workload(eligible.into_iter(), ctx.work_items)
            .expect("candidates are non-empty, a minimum always exists");

        debug!(
            agent_id = %agent.id,
            score,
            band,
            tier = %agent.tier,
            tier_restricted,
            "score-based selection"
        );

        StrategyOutcome::Matched(Selection {
            agent: agent.clone(),
            strategy: StrategyKind::ScoreBased,
            reason: format!(
                "score {:.0} routes to the {} band; '{}' is a {}-tier agent with workload score {}",
                score, band, agent.name, agent.tier, snapshot.workload_score
            ),
            metadata: json!({
                "score": score,
                "band": band,
                "tier": agent.tier,
                "tier_restricted": tier_restricted,
                "workload": snapshot,
            }),
            rotation: None,
        })
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use dunlin_contracts::{
        agent::{Agent, PerformanceTier},
        assignment::StrategyOutcome,
        work_item::{WorkItem, WorkItemKind},
    };
    use dunlin_engine::traits::{SelectionContext, SelectionOptions, Strategy};

    use super::ScoreBased;

    fn tiered(id: &str, name: &str, tier: PerformanceTier) -> Agent {
        Agent {
            tier,
            ..Agent::new(id, name)
        }
    }

    fn select(item: &WorkItem, candidates: &[Agent], options: &SelectionOptions) -> String {
        match ScoreBased.select(&SelectionContext {
            item,
            candidates,
            work_items: &[],
            options,
        }) {
            StrategyOutcome::Matched(selection) => selection.agent.id.0,
            StrategyOutcome::NoMatch { reason } => panic!("unexpected NoMatch: {reason}"),
        }
    }

    /// High scores route past average agents to the top/high tiers.
    #[test]
    fn high_score_restricts_to_top_tiers() {
        let agents = vec![
            tiered("A1", "Priya Nair", PerformanceTier::Average),
            tiered("A2", "Marcus Webb", PerformanceTier::Top),
        ];
        let item = WorkItem {
            score: Some(85.0),
            ..WorkItem::new("I1", WorkItemKind::Lead)
        };

        assert_eq!(select(&item, &agents, &SelectionOptions::default()), "A2");
    }

    /// Medium scores admit average agents too.
    #[test]
    fn medium_score_admits_average_tier() {
        let agents = vec![
            tiered("A1", "Priya Nair", PerformanceTier::Average),
            tiered("A2", "Marcus Webb", PerformanceTier::Low),
        ];
        let item = WorkItem {
            score: Some(65.0),
            ..WorkItem::new("I1", WorkItemKind::Lead)
        };

        assert_eq!(select(&item, &agents, &SelectionOptions::default()), "A1");
    }

    /// Low scores place no tier restriction; workload decides.
    #[test]
    fn low_score_is_unrestricted() {
        let agents = vec![
            tiered("A1", "Priya Nair", PerformanceTier::Low),
            tiered("A2", "Marcus Webb", PerformanceTier::Top),
        ];
        let item = WorkItem {
            score: Some(30.0),
            ..WorkItem::new("I1", WorkItemKind::Lead)
        };

        // Equal workloads: first in list order wins, tier ignored.
        assert_eq!(select(&item, &agents, &SelectionOptions::default()), "A1");
    }

    /// An empty preferred tier subset falls back to the full pool rather
    /// than failing.
    #[test]
    fn tier_mismatch_never_fails_alone() {
        let agents = vec![tiered("A1", "Priya Nair", PerformanceTier::Low)];
        let item = WorkItem {
            score: Some(95.0),
            ..WorkItem::new("I1", WorkItemKind::Lead)
        };

        assert_eq!(select(&item, &agents, &SelectionOptions::default()), "A1");
    }

    /// The override map takes precedence over the inline score field.
    #[test]
    fn score_override_beats_inline_field() {
        let agents = vec![
            tiered("A1", "Priya Nair", PerformanceTier::Average),
            tiered("A2", "Marcus Webb", PerformanceTier::Top),
        ];
        // Inline says 10 (unrestricted), override says 90 (top/high only).
        let item = WorkItem {
            score: Some(10.0),
            ..WorkItem::new("I1", WorkItemKind::Lead)
        };
        let options = SelectionOptions {
            score_overrides: HashMap::from([("I1".to_string(), 90.0)]),
            ..SelectionOptions::default()
        };

        assert_eq!(select(&item, &agents, &options), "A2");
    }

    /// Unscored items default to 0 and stay unrestricted.
    #[test]
    fn missing_score_defaults_to_zero() {
        let agents = vec![tiered("A1", "Priya Nair", PerformanceTier::Low)];
        let item = WorkItem::new("I1", WorkItemKind::Email);
        assert_eq!(select(&item, &agents, &SelectionOptions::default()), "A1");
    }
}
