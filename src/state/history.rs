// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Move history: the record of applied moves, used for O(1) undo.
//!
//! Each successfully applied move pushes one `MoveRecord`; undo pops it. The
//! stack is sized to the chain length when the state is created and never
//! reallocates, so pushing on the hot path is allocation-free.

use crate::geometry::{Axis, Direction, Move};

/// One applied move, with enough information to reverse it exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub mv: Move,
    /// How far the move pushed the span on its axis: negative if it lowered the
    /// minimum, positive if it raised the maximum, zero otherwise.
    pub span_delta: i32,
}

impl MoveRecord {
    #[inline]
    pub fn axis(&self) -> Axis {
        self.mv.axis
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.mv.direction
    }
}

/// Fixed-capacity LIFO stack of move records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveHistory {
    records: Vec<MoveRecord>,
    capacity: usize,
}

impl MoveHistory {
    /// Create an empty history that can hold `capacity` moves.
    pub fn new(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Record an applied move.
    ///
    /// # Panics
    ///
    /// Panics if the history is full (more moves than chain segments indicates a bug).
    #[inline]
    pub fn push(&mut self, record: MoveRecord) {
        if self.records.len() >= self.capacity {
            panic!("Move history overflow: exceeded {} entries", self.capacity);
        }
        self.records.push(record);
    }

    /// Remove and return the most recent record.
    #[inline]
    pub fn pop(&mut self) -> Option<MoveRecord> {
        self.records.pop()
    }

    /// The most recent record, if any.
    #[inline]
    pub fn last(&self) -> Option<&MoveRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn records(&self) -> &[MoveRecord] {
        &self.records
    }

    /// The moves in application order.
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.records.iter().map(|r| r.mv)
    }
}
