//! Skill-based strategy: route to the agent whose skills fit the item.
//!
//! Requirements are derived from the item (see `skills`). Agents with zero
//! configured skills are treated as universally qualified — an explicit
//! policy so a freshly onboarded floor with no skill data still routes.
//! Among qualifying agents, more matching skills wins, then lower workload.
//! No derivable requirement or no qualifying agent → `NoMatch`, which the
//! standard registry chains into the load-based fallback.

use serde_json::json;
use tracing::debug;

use dunlin_contracts::{
    agent::Agent,
    assignment::{Selection, StrategyKind, StrategyOutcome, WorkloadSnapshot},
};
use dunlin_engine::{compute_workload, traits::{SelectionContext, Strategy}};

use crate::skills::{matching_skills, required_skills};

/// The skill-matching strategy.
pub struct SkillBased;

impl Strategy for SkillBased {
    fn kind(&self) -> StrategyKind {
        StrategyKind::SkillBased
    }

    fn select(&self, ctx: &SelectionContext<'_>) -> StrategyOutcome {
        let required = required_skills(ctx.item);
        if required.is_empty() {
            return StrategyOutcome::NoMatch {
                reason: "no skill requirements could be derived from the work item".to_string(),
            };
        }

        // Qualified: at least one matching skill, or no skills configured at
        // all (universally qualified).
        struct Scored<'a> {
            agent: &'a Agent,
            matched: Vec<&'a str>,
            snapshot: WorkloadSnapshot,
        }

        let mut best: Option<Scored<'_>> = None;
        for agent in ctx.candidates {
            let matched = matching_skills(agent, &required);
            if matched.is_empty() && !agent.skills.is_empty() {
                continue;
            }
            let snapshot = compute_workload(agent, ctx.work_items);
            let better = match &best {
                None => true,
                Some(current) => {
                    matched.len() > current.matched.len()
                        || (matched.len() == current.matched.len()
                            && snapshot.workload_score < current.snapshot.workload_score)
                }
            };
            if better {
                best = Some(Scored {
                    agent,
                    matched,
                    snapshot,
                });
            }
        }

        let Some(best) = best else {
            return StrategyOutcome::NoMatch {
                reason: format!(
                    "no agent holds any of the required skills [{}]",
                    required.join(", ")
                ),
            };
        };

        debug!(
            agent_id = %best.agent.id,
            matched = ?best.matched,
            required = ?required,
            "skill-based selection"
        );

        let reason = if best.matched.is_empty() {
            format!(
                "agent '{}' has no skill restrictions and the lowest workload among qualified agents",
                best.agent.name
            )
        } else {
            format!(
                "matched skills [{}] with workload score {}",
                best.matched.join(", "),
                best.snapshot.workload_score
            )
        };

        StrategyOutcome::Matched(Selection {
            agent: best.agent.clone(),
            strategy: StrategyKind::SkillBased,
            reason,
            metadata: json!({
                "required_skills": required,
                "matched_skills": best.matched,
                "workload": best.snapshot,
            }),
            rotation: None,
        })
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use dunlin_contracts::{
        agent::Agent,
        assignment::StrategyOutcome,
        work_item::{WorkItem, WorkItemKind},
    };
    use dunlin_engine::traits::{SelectionContext, SelectionOptions, Strategy};

    use super::SkillBased;

    fn skilled(id: &str, name: &str, skills: &[&str]) -> Agent {
        Agent {
            skills: skills.iter().map(|s| s.to_string()).collect(),
            ..Agent::new(id, name)
        }
    }

    fn select(item: &WorkItem, candidates: &[Agent]) -> StrategyOutcome {
        let options = SelectionOptions::default();
        SkillBased.select(&SelectionContext {
            item,
            candidates,
            work_items: &[],
            options: &options,
        })
    }

    /// The motor item lands on the motor-skilled agent, and the reason names
    /// the matched skill. The zero-skill agent qualifies but has no matches.
    #[test]
    fn motor_item_prefers_motor_skill() {
        let agents = vec![
            skilled("A1", "Priya Nair", &[]),
            skilled("A2", "Marcus Webb", &["motor_insurance"]),
        ];
        let item = WorkItem {
            product: Some("Motor".to_string()),
            ..WorkItem::new("I1", WorkItemKind::Case)
        };

        match select(&item, &agents) {
            StrategyOutcome::Matched(selection) => {
                assert_eq!(selection.agent.id.0, "A2");
                assert!(
                    selection.reason.contains("motor_insurance"),
                    "reason must name the matched skill: {}",
                    selection.reason
                );
            }
            StrategyOutcome::NoMatch { reason } => panic!("unexpected NoMatch: {reason}"),
        }
    }

    /// More matching skills beats fewer, regardless of order.
    #[test]
    fn more_matches_win() {
        let agents = vec![
            skilled("A1", "Priya Nair", &["hni"]),
            skilled("A2", "Marcus Webb", &["hni", "motor_insurance"]),
        ];
        let item = WorkItem {
            product: Some("Motor".to_string()),
            value: Some(3_000_000.0),
            ..WorkItem::new("I1", WorkItemKind::Claim)
        };

        match select(&item, &agents) {
            StrategyOutcome::Matched(selection) => assert_eq!(selection.agent.id.0, "A2"),
            StrategyOutcome::NoMatch { reason } => panic!("unexpected NoMatch: {reason}"),
        }
    }

    /// Equal match counts fall back to lower workload.
    #[test]
    fn equal_matches_prefer_lower_workload() {
        let agents = vec![
            skilled("A1", "Priya Nair", &["motor_insurance"]),
            skilled("A2", "Marcus Webb", &["motor_insurance"]),
        ];
        let existing = vec![WorkItem {
            status: "In Progress".to_string(),
            assigned_to: Some("A1".to_string()),
            ..WorkItem::new("I0", WorkItemKind::Case)
        }];
        let item = WorkItem {
            product: Some("Motor".to_string()),
            ..WorkItem::new("I1", WorkItemKind::Case)
        };

        let options = SelectionOptions::default();
        let outcome = SkillBased.select(&SelectionContext {
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

    /// Universally qualified agents carry the item when nobody matches.
    #[test]
    fn zero_skill_agents_qualify_universally() {
        let agents = vec![
            skilled("A1", "Priya Nair", &["health_insurance"]),
            skilled("A2", "Marcus Webb", &[]),
        ];
        let item = WorkItem {
            product: Some("Motor".to_string()),
            ..WorkItem::new("I1", WorkItemKind::Case)
        };

        match select(&item, &agents) {
            StrategyOutcome::Matched(selection) => {
                assert_eq!(selection.agent.id.0, "A2");
                assert!(selection.reason.contains("no skill restrictions"));
            }
            StrategyOutcome::NoMatch { reason } => panic!("unexpected NoMatch: {reason}"),
        }
    }

    /// No derivable requirement defers to the fallback chain.
    #[test]
    fn no_skill_signal_declines() {
        let agents = vec![skilled("A1", "Priya Nair", &["motor_insurance"])];
        let item = WorkItem::new("I1", WorkItemKind::Email);

        assert!(matches!(
            select(&item, &agents),
            StrategyOutcome::NoMatch { .. }
        ));
    }

    /// Skilled agents only, none matching: decline rather than misroute.
    #[test]
    fn all_mismatched_skills_decline() {
        let agents = vec![skilled("A1", "Priya Nair", &["health_insurance"])];
        let item = WorkItem {
            product: Some("Motor".to_string()),
            ..WorkItem::new("I1", WorkItemKind::Case)
        };

        match select(&item, &agents) {
            StrategyOutcome::NoMatch { reason } => {
                assert!(reason.contains("motor_insurance"));
            }
            StrategyOutcome::Matched(selection) => {
                panic!("expected NoMatch, got {}", selection.agent.id)
            }
        }
    }
}
