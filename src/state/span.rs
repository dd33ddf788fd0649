// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Per-axis bounding extents of the occupied cells.

use crate::geometry::{Axis, NAXES};

/// Minimum and maximum occupied coordinate along each axis.
///
/// Starts at `[0, 0]` on every axis: the origin cell is always occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    min: [i32; NAXES],
    max: [i32; NAXES],
}

impl Span {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn min(&self, axis: Axis) -> i32 {
        self.min[axis.index()]
    }

    #[inline]
    pub fn max(&self, axis: Axis) -> i32 {
        self.max[axis.index()]
    }

    /// `max - min` along `axis`.
    #[inline]
    pub fn extent(&self, axis: Axis) -> i32 {
        self.max(axis) - self.min(axis)
    }

    /// True if no move has extended this axis yet.
    #[inline]
    pub fn is_virgin(&self, axis: Axis) -> bool {
        self.min(axis) == self.max(axis)
    }

    /// Apply a signed span delta: negative lowers the minimum, positive raises the maximum.
    #[inline]
    pub fn extend(&mut self, axis: Axis, delta: i32) {
        if delta < 0 {
            self.min[axis.index()] += delta;
        } else if delta > 0 {
            self.max[axis.index()] += delta;
        }
    }

    /// Undo a previous `extend` with the same delta.
    #[inline]
    pub fn retract(&mut self, axis: Axis, delta: i32) {
        if delta < 0 {
            self.min[axis.index()] -= delta;
        } else if delta > 0 {
            self.max[axis.index()] -= delta;
        }
    }

    /// Side lengths of the bounding box, in cells.
    pub fn dimensions(&self) -> [usize; NAXES] {
        Axis::ALL.map(|axis| (self.extent(axis) + 1) as usize)
    }
}
