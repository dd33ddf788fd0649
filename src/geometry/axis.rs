// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Axes and directions of the cubic lattice.

use std::fmt;
use strum_macros::EnumCount as EnumCountMacro;

/// One of the three lattice axes.
///
/// The discriminant doubles as the array index used by `Coord` and `Span`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCountMacro)]
#[repr(u8)]
pub enum Axis {
    X = 0,
    Y = 1,
    Z = 2,
}

impl Axis {
    /// All axes in canonical search order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Array index for this axis.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Lower-case label used when rendering moves.
    pub fn label(self) -> char {
        match self {
            Axis::X => 'x',
            Axis::Y => 'y',
            Axis::Z => 'z',
        }
    }

    /// Parse a rendered axis label (case-insensitive).
    pub fn from_label(label: char) -> Option<Self> {
        match label.to_ascii_lowercase() {
            'x' => Some(Axis::X),
            'y' => Some(Axis::Y),
            'z' => Some(Axis::Z),
            _ => None,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Direction of travel along an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Positive,
    Negative,
}

impl Direction {
    /// Directions in the order the search tries them.
    pub const ALL: [Direction; 2] = [Direction::Positive, Direction::Negative];

    /// Unit step along the axis: +1 or -1.
    #[inline]
    pub fn step(self) -> i32 {
        match self {
            Direction::Positive => 1,
            Direction::Negative => -1,
        }
    }

    pub fn sign(self) -> char {
        match self {
            Direction::Positive => '+',
            Direction::Negative => '-',
        }
    }

    pub fn from_sign(sign: char) -> Option<Self> {
        match sign {
            '+' => Some(Direction::Positive),
            '-' => Some(Direction::Negative),
            _ => None,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Direction::Positive => Direction::Negative,
            Direction::Negative => Direction::Positive,
        }
    }
}
