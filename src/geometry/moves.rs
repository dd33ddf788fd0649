// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! A single fold: the axis and direction along which the next segment is laid.

use super::{Axis, Direction};
use std::fmt;

/// One fold of the chain.
///
/// Rendered as a signed axis label, e.g. `+x` or `-z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub axis: Axis,
    pub direction: Direction,
}

impl Move {
    pub const fn new(axis: Axis, direction: Direction) -> Self {
        Self { axis, direction }
    }

    /// All six candidate moves in the order the search tries them:
    /// `+x -x +y -y +z -z`.
    pub fn candidates() -> impl Iterator<Item = Move> {
        Axis::ALL.into_iter().flat_map(|axis| {
            Direction::ALL
                .into_iter()
                .map(move |direction| Move::new(axis, direction))
        })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.direction.sign(), self.axis.label())
    }
}
