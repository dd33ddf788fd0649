// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Move engine.
//!
//! Places the next segment of the chain as a straight run of cells starting one
//! step past the current head, and reverses that placement exactly.
//!
//! # Checks
//!
//! A move is rejected, leaving the state untouched, when:
//! 1. it uses the same axis as the previous move (that would not be a fold)
//! 2. it would stretch the occupied span on its axis beyond the cube side
//! 3. any of the new cells is already occupied
//! 4. there is no segment left to place
//!
//! Rejection is the normal way the search prunes, not an error; it is reported
//! as `Err(MoveRejection)` so the driver can count the reasons.
//!
//! # Example
//!
//! ```
//! use snake_cube::chain::Chain;
//! use snake_cube::context::SearchContext;
//! use snake_cube::engine::MoveRejection;
//! use snake_cube::geometry::{Axis, Direction, Move};
//!
//! let chain = Chain::new(vec![3, 2, 2]).unwrap();
//! let mut ctx = SearchContext::new(chain, 4).unwrap();
//! ctx.apply_move(Move::new(Axis::X, Direction::Positive)).unwrap();
//! assert_eq!(
//!     ctx.apply_move(Move::new(Axis::X, Direction::Negative)),
//!     Err(MoveRejection::AxisRepeat)
//! );
//! ctx.undo_move();
//! assert_eq!(ctx.state.occupied_cells(), 1);
//! ```

pub mod moves;
pub mod replay;

pub use replay::{replay, FoldSummary};

use std::fmt;
use strum_macros::EnumCount as EnumCountMacro;

/// Why a move was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCountMacro)]
#[repr(u8)]
pub enum MoveRejection {
    /// Same axis as the previous move.
    AxisRepeat,
    /// The fold would no longer fit in the cube along this axis.
    SpanOverflow,
    /// A new cell is already occupied.
    Collision,
    /// Every segment has already been placed.
    ChainExhausted,
}

impl MoveRejection {
    pub const ALL: [MoveRejection; 4] = [
        MoveRejection::AxisRepeat,
        MoveRejection::SpanOverflow,
        MoveRejection::Collision,
        MoveRejection::ChainExhausted,
    ];

    /// Short name used in summaries.
    pub fn label(self) -> &'static str {
        match self {
            MoveRejection::AxisRepeat => "axis repeat",
            MoveRejection::SpanOverflow => "span overflow",
            MoveRejection::Collision => "collision",
            MoveRejection::ChainExhausted => "chain exhausted",
        }
    }
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveRejection::AxisRepeat => write!(f, "same axis as the previous move"),
            MoveRejection::SpanOverflow => write!(f, "fold would leave the cube"),
            MoveRejection::Collision => write!(f, "segment crosses an occupied cell"),
            MoveRejection::ChainExhausted => write!(f, "no segments left to place"),
        }
    }
}
