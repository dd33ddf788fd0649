// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context combining the puzzle definition and the DYNAMIC state.
//!
//! The SearchContext is the single mutable aggregate the search works on:
//! - Puzzle data (immutable): the chain and the cube side
//! - Fold state (mutable): lattice, span, head, cursor, move history
//! - Statistics: counters updated by the search driver
//!
//! It is passed by reference through the move engine and the search driver,
//! so independent searches only need independent contexts.
//!
//! The move engine operations (`apply_move`, `undo_move`) are implemented on
//! this type in `engine::moves`.

use crate::chain::Chain;
use crate::error::ConfigError;
use crate::geometry::{Axis, Direction, Move};
use crate::state::{FoldState, Statistics};

/// The two forced opening moves that fix the fold's global orientation.
pub const SEED_MOVES: [Move; 2] = [
    Move::new(Axis::X, Direction::Positive),
    Move::new(Axis::Y, Direction::Positive),
];

#[derive(Debug, Clone)]
pub struct SearchContext {
    /// Segment lengths (read-only during search)
    pub(crate) chain: Chain,
    /// Side of the target cube
    pub(crate) side: usize,
    /// Mutable fold state
    pub state: FoldState,
    /// Counters maintained by the search driver
    pub statistics: Statistics,
}

impl SearchContext {
    /// Create a context with an unfolded chain: only the origin is occupied.
    pub fn new(chain: Chain, side: usize) -> Result<Self, ConfigError> {
        chain.check_fits(side)?;
        let state = FoldState::new(side, chain.len());
        Ok(Self {
            chain,
            side,
            state,
            statistics: Statistics::new(),
        })
    }

    /// Apply the forced opening moves (`+x` then `+y`).
    ///
    /// Fixing the first two folds collapses the rotations of the whole cube, so
    /// each solution is found once per reflection class instead of once per
    /// orientation. Must be called on a fresh context.
    pub fn seed_orientation(&mut self) -> Result<(), ConfigError> {
        assert!(
            self.state.history().is_empty(),
            "seed_orientation called on a context that already has moves"
        );
        if self.chain.len() < SEED_MOVES.len() {
            return Err(ConfigError::TooFewSegments {
                needed: SEED_MOVES.len(),
                found: self.chain.len(),
            });
        }
        for (step, mv) in SEED_MOVES.into_iter().enumerate() {
            self.apply_move(mv)
                .map_err(|reason| ConfigError::SeedRejected { step, mv, reason })?;
        }
        self.state.seeded = SEED_MOVES.len();
        Ok(())
    }

    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    pub fn side(&self) -> usize {
        self.side
    }

    /// True once every segment has been placed.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.state.cursor() >= self.chain.len()
    }

    /// Segments still to place.
    pub fn remaining(&self) -> usize {
        self.chain.len() - self.state.cursor()
    }
}
