// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Replaying a complete move sequence on a fresh state.
//!
//! This is an independent check of a reported solution: every move is
//! re-validated from scratch, so a fold that replays cleanly is self-avoiding
//! and fits in the cube.

use crate::chain::Chain;
use crate::context::SearchContext;
use crate::error::ReplayError;
use crate::geometry::{Coord, Move};
use crate::state::Span;

/// What a replayed fold looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoldSummary {
    /// Distinct cells occupied.
    pub occupied: usize,
    /// Bounding extents relative to the first cell.
    pub span: Span,
    /// The last cell of the chain.
    pub end: Coord,
}

/// Replay `moves` (one per segment, including any seeded moves) against `chain`.
pub fn replay(chain: &Chain, side: usize, moves: &[Move]) -> Result<FoldSummary, ReplayError> {
    if moves.len() != chain.len() {
        return Err(ReplayError::LengthMismatch {
            expected: chain.len(),
            found: moves.len(),
        });
    }
    let mut ctx = SearchContext::new(chain.clone(), side)?;
    for (step, &mv) in moves.iter().enumerate() {
        ctx.apply_move(mv)
            .map_err(|reason| ReplayError::Rejected { step, mv, reason })?;
    }
    Ok(FoldSummary {
        occupied: ctx.state.occupied_cells(),
        span: *ctx.state.span(),
        end: ctx.state.head(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::MoveRejection;
    use crate::geometry::{Axis, Direction};

    fn mv(axis: Axis, direction: Direction) -> Move {
        Move::new(axis, direction)
    }

    #[test]
    fn test_replay_l_shape() {
        let chain = Chain::new(vec![3, 2]).unwrap();
        let summary = replay(
            &chain,
            4,
            &[mv(Axis::X, Direction::Positive), mv(Axis::Y, Direction::Positive)],
        )
        .unwrap();
        assert_eq!(summary.occupied, 4);
        assert_eq!(summary.span.dimensions(), [3, 2, 1]);
        assert_eq!(summary.end, Coord::new(2, 1, 0));
    }

    #[test]
    fn test_replay_length_mismatch() {
        let chain = Chain::new(vec![3, 2, 2]).unwrap();
        assert_eq!(
            replay(&chain, 4, &[mv(Axis::X, Direction::Positive)]),
            Err(ReplayError::LengthMismatch {
                expected: 3,
                found: 1
            })
        );
    }

    #[test]
    fn test_replay_reports_first_rejected_step() {
        let chain = Chain::new(vec![2, 2, 2, 2]).unwrap();
        let moves = [
            mv(Axis::X, Direction::Positive),
            mv(Axis::Y, Direction::Positive),
            mv(Axis::X, Direction::Negative),
            mv(Axis::Y, Direction::Negative),
        ];
        assert_eq!(
            replay(&chain, 4, &moves),
            Err(ReplayError::Rejected {
                step: 3,
                mv: moves[3],
                reason: MoveRejection::Collision
            })
        );
    }
}
