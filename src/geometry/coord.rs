// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Lattice coordinates relative to the chain's starting cell.

use super::{Axis, Direction};

/// A lattice coordinate. The first cell of the chain is always `Coord::ORIGIN`;
/// every other coordinate is measured from it and may be negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coord([i32; 3]);

impl Coord {
    pub const ORIGIN: Coord = Coord([0, 0, 0]);

    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self([x, y, z])
    }

    /// Component along `axis`.
    #[inline]
    pub fn get(self, axis: Axis) -> i32 {
        self.0[axis.index()]
    }

    /// The neighbouring coordinate one unit step along `axis` in `direction`.
    #[inline]
    pub fn step(self, axis: Axis, direction: Direction) -> Self {
        let mut next = self;
        next.0[axis.index()] += direction.step();
        next
    }

    pub fn components(self) -> [i32; 3] {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_moves_one_axis() {
        let c = Coord::ORIGIN.step(Axis::Y, Direction::Negative);
        assert_eq!(c, Coord::new(0, -1, 0));
        assert_eq!(c.get(Axis::X), 0);
        assert_eq!(c.get(Axis::Y), -1);
    }

    #[test]
    fn test_repeated_steps() {
        let mut stepped = Coord::new(1, 2, 3);
        for _ in 0..3 {
            stepped = stepped.step(Axis::Z, Direction::Positive);
        }
        assert_eq!(stepped.components(), [1, 2, 6]);
    }
}
