// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Recursive search driver.
//!
//! Recursion depth equals the number of segments placed, so it is bounded by
//! the chain length.

use super::{SearchConfig, Solution, SolutionSink};
use crate::context::SearchContext;
use crate::geometry::{Axis, Direction, Move};
use crate::state::Counters;
use std::ops::ControlFlow;
use tracing::{debug, info};

/// Drives the move engine through the search tree, reporting complete folds to a sink.
pub struct SearchDriver<'a, S: SolutionSink> {
    config: &'a SearchConfig,
    sink: &'a mut S,
}

impl<'a, S: SolutionSink> SearchDriver<'a, S> {
    pub fn new(config: &'a SearchConfig, sink: &'a mut S) -> Self {
        Self { config, sink }
    }

    /// Search every continuation of the current state.
    ///
    /// If the chain is already fully placed (e.g. the seeded moves consumed it)
    /// the current state is reported as the only solution.
    ///
    /// Returns `Break` if the sink or the solution limit stopped the search.
    /// The state is back where it started either way.
    pub fn run(&mut self, ctx: &mut SearchContext) -> ControlFlow<()> {
        if ctx.is_complete() {
            return self.report(ctx);
        }
        self.find_solutions(ctx)
    }

    fn find_solutions(&mut self, ctx: &mut SearchContext) -> ControlFlow<()> {
        for axis in Axis::ALL {
            for direction in Direction::ALL {
                // By symmetry, the first move on each axis can be taken positive.
                if direction == Direction::Negative
                    && self.config.symmetry.canonical_first_direction
                    && ctx.state.span().is_virgin(axis)
                {
                    continue;
                }
                if self.visit(ctx, Move::new(axis, direction)).is_break() {
                    return ControlFlow::Break(());
                }
            }
        }
        ControlFlow::Continue(())
    }

    #[inline]
    fn visit(&mut self, ctx: &mut SearchContext, mv: Move) -> ControlFlow<()> {
        if let Err(rejection) = ctx.apply_move(mv) {
            ctx.statistics.record_rejection(rejection);
            return ControlFlow::Continue(());
        }
        ctx.statistics.increment(Counters::PositionsSeen);
        self.log_progress(ctx);

        let flow = if ctx.is_complete() {
            self.report(ctx)
        } else {
            self.find_solutions(ctx)
        };

        ctx.undo_move();
        flow
    }

    fn report(&mut self, ctx: &mut SearchContext) -> ControlFlow<()> {
        ctx.statistics.increment(Counters::SolutionsFound);
        let number = ctx.statistics.solutions_found();
        let solution = Solution::new(number, ctx);
        debug!(number, moves = %solution, "solution found");

        let flow = self.sink.on_solution(&solution);
        match self.config.max_solutions {
            Some(limit) if number >= limit => ControlFlow::Break(()),
            _ => flow,
        }
    }

    fn log_progress(&self, ctx: &SearchContext) {
        if let Some(interval) = self.config.progress_interval {
            let positions = ctx.statistics.positions_seen();
            if interval > 0 && positions % interval == 0 {
                info!(
                    positions_seen = positions,
                    depth = ctx.state.cursor(),
                    solutions_found = ctx.statistics.solutions_found(),
                    "progress"
                );
            }
        }
    }
}
