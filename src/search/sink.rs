// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The seam between the search driver and whatever consumes its solutions.

use crate::chain::Chain;
use crate::context::SearchContext;
use crate::geometry::Move;
use crate::state::FoldState;
use std::ops::ControlFlow;

/// A complete fold, borrowed from the search state at the moment it is found.
///
/// Only valid during the `on_solution` call; copy the moves out to keep them.
#[derive(Debug, Clone, Copy)]
pub struct Solution<'a> {
    /// 1-based index of this solution within the run.
    pub number: u64,
    state: &'a FoldState,
    chain: &'a Chain,
}

impl<'a> Solution<'a> {
    pub(crate) fn new(number: u64, ctx: &'a SearchContext) -> Self {
        Self {
            number,
            state: &ctx.state,
            chain: ctx.chain(),
        }
    }

    /// The moves chosen by the search, excluding the seeded opening moves.
    pub fn moves(&self) -> impl Iterator<Item = Move> + 'a {
        self.state.chosen_moves()
    }

    /// Every move, seeded ones included; replaying these reproduces the fold.
    pub fn all_moves(&self) -> impl Iterator<Item = Move> + 'a {
        self.state.history().moves()
    }

    /// Chosen moves paired with the length of the segment each one laid.
    pub fn folds(&self) -> impl Iterator<Item = (Move, u32)> + 'a {
        let seeded = self.state.seeded();
        let chain = self.chain;
        self.moves()
            .enumerate()
            .map(move |(i, mv)| (mv, chain.length(seeded + i)))
    }

    /// Number of seeded moves at the start of `all_moves`.
    pub fn seeded(&self) -> usize {
        self.state.seeded()
    }
}

/// Receives each solution as it is found.
///
/// Returning `ControlFlow::Break(())` stops the search.
pub trait SolutionSink {
    fn on_solution(&mut self, solution: &Solution<'_>) -> ControlFlow<()>;
}

impl<F> SolutionSink for F
where
    F: FnMut(&Solution<'_>) -> ControlFlow<()>,
{
    fn on_solution(&mut self, solution: &Solution<'_>) -> ControlFlow<()> {
        self(solution)
    }
}
