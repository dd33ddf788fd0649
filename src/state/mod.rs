// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! DYNAMIC state (mutable, restored by undo).
//!
//! - Lattice: which cells are occupied
//! - Span: per-axis bounding extents of the occupied cells
//! - MoveHistory: the applied moves, for LIFO undo
//! - head and cursor: where the free end of the chain is, and which segment is next
//!
//! No validation lives here. The move engine checks a move before touching
//! the state, and this module only keeps the bookkeeping consistent.

pub mod history;
pub mod lattice;
pub mod span;
pub mod statistics;

pub use history::{MoveHistory, MoveRecord};
pub use lattice::Lattice;
pub use span::Span;
pub use statistics::{Counters, Statistics};

use crate::geometry::{Axis, Coord, Move};

/// The mutable fold state.
///
/// Two states compare equal exactly when they describe the same partial fold,
/// which is what the apply/undo reversibility tests rely on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoldState {
    pub(crate) lattice: Lattice,
    pub(crate) span: Span,
    pub(crate) head: Coord,
    pub(crate) cursor: usize,
    pub(crate) history: MoveHistory,
    pub(crate) seeded: usize,
}

impl FoldState {
    /// A fresh state for a cube of side `side` and a chain of `capacity` segments:
    /// only the origin cell is occupied and no move has been made.
    pub fn new(side: usize, capacity: usize) -> Self {
        let mut lattice = Lattice::new(side);
        lattice.occupy(Coord::ORIGIN);
        Self {
            lattice,
            span: Span::new(),
            head: Coord::ORIGIN,
            cursor: 0,
            history: MoveHistory::new(capacity),
            seeded: 0,
        }
    }

    /// Coordinate of the most recently placed cell.
    #[inline]
    pub fn head(&self) -> Coord {
        self.head
    }

    #[inline]
    pub fn span(&self) -> &Span {
        &self.span
    }

    /// Index of the next unplaced segment.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn is_occupied(&self, coord: Coord) -> bool {
        self.lattice.is_occupied(coord)
    }

    pub fn occupied_cells(&self) -> usize {
        self.lattice.occupied()
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// Number of moves at the start of the history that were forced by
    /// orientation seeding rather than chosen by the search.
    pub fn seeded(&self) -> usize {
        self.seeded
    }

    /// The moves chosen by the search, after the seeded ones.
    pub fn chosen_moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.history.moves().skip(self.seeded)
    }

    /// The axis of the last applied move, if any.
    #[inline]
    pub fn last_axis(&self) -> Option<Axis> {
        self.history.last().map(|r| r.axis())
    }
}
