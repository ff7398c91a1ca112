//! The explicit fallback combinator.
//!
//! `OrElse` makes the fallback contract a first-class, independently testable
//! value: `SkillBased.or_else(LoadBased)` runs the primary, and only when it
//! reports `NoMatch` consults the fallback. The selection names whichever
//! strategy actually produced it, so audit records show a load-based pick
//! when the skill filter came up empty.

use tracing::debug;

use dunlin_contracts::assignment::{StrategyKind, StrategyOutcome};
use dunlin_engine::traits::{SelectionContext, Strategy};

/// A strategy that defers to `fallback` when `primary` declines.
///
/// Registered under the primary's kind — from the configuration's point of
/// view this IS the primary strategy, with its fallback behavior built in.
pub struct OrElse<P, F> {
    primary: P,
    fallback: F,
}

impl<P: Strategy, F: Strategy> Strategy for OrElse<P, F> {
    fn kind(&self) -> StrategyKind {
        self.primary.kind()
    }

    fn select(&self, ctx: &SelectionContext<'_>) -> StrategyOutcome {
        match self.primary.select(ctx) {
            StrategyOutcome::NoMatch { reason } => {
                debug!(
                    primary = %self.primary.kind(),
                    fallback = %self.fallback.kind(),
                    %reason,
                    "primary strategy declined, consulting fallback"
                );
                self.fallback.select(ctx)
            }
            matched => matched,
        }
    }
}

/// Chaining adapter for any strategy.
pub trait StrategyExt: Strategy + Sized {
    /// Defer to `fallback` when this strategy reports `NoMatch`.
    fn or_else<F: Strategy>(self, fallback: F) -> OrElse<Self, F> {
        OrElse {
            primary: self,
            fallback,
        }
    }
}

impl<S: Strategy + Sized> StrategyExt for S {}

// ── Tests ────────────────────────────────────────────────────────────────────
