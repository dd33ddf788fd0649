// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Shared chains and helpers for integration tests.

#![allow(dead_code)]

use snake_cube::chain::Chain;
use snake_cube::context::SearchContext;
use snake_cube::geometry::{Direction, Move};
use snake_cube::search::SymmetryBreaking;

/// Classic 3x3x3 snake cube (17 segments, 27 cells).
pub const CLASSIC_3: [u32; 17] = [3, 3, 3, 3, 2, 2, 2, 3, 3, 2, 2, 3, 2, 3, 2, 2, 3];

/// Seven unit steps through the 2x2x2 cube.
pub const TINY_2: [u32; 7] = [2, 2, 2, 2, 2, 2, 2];

pub fn chain(segments: &[u32]) -> Chain {
    Chain::new(segments.to_vec()).unwrap()
}

/// A deliberately plain second driver, built only on the public move engine.
/// Returns (positions, solutions).
pub fn reference_count(ctx: &mut SearchContext, symmetry: SymmetryBreaking) -> (u64, u64) {
    if ctx.is_complete() {
        return (0, 1);
    }
    let mut positions = 0;
    let mut solutions = 0;
    walk(ctx, symmetry, &mut positions, &mut solutions);
    (positions, solutions)
}

fn walk(
    ctx: &mut SearchContext,
    symmetry: SymmetryBreaking,
    positions: &mut u64,
    solutions: &mut u64,
) {
    for mv in Move::candidates() {
        if mv.direction == Direction::Negative
            && symmetry.canonical_first_direction
            && ctx.state.span().is_virgin(mv.axis)
        {
            continue;
        }
        if ctx.apply_move(mv).is_ok() {
            *positions += 1;
            if ctx.is_complete() {
                *solutions += 1;
            } else {
                walk(ctx, symmetry, positions, solutions);
            }
            ctx.undo_move();
        }
    }
}
