// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exhaustive solver for snake cube puzzles.
//!
//! A snake cube is a chain of rigid straight segments that must be folded,
//! without crossing itself, into a cube. This crate enumerates every such fold
//! and reports each one as a sequence of turn directions.
//!
//! # Architecture
//!
//! The implementation separates immutable puzzle data from mutable search state:
//!
//! ## Puzzle data (immutable)
//!
//! - Chain: the ordered segment lengths
//! - Cube side
//!
//! ## DYNAMIC data (mutable)
//!
//! Search state that changes during search and is restored by undo:
//! - Occupancy lattice, preallocated for the cube side
//! - Per-axis span of the occupied cells
//! - Move history - records each move for O(1) undo in LIFO order
//! - Head position and chain cursor
//!
//! # Search Algorithm
//!
//! The search is a depth-first walk of the move tree:
//!
//! 1. **Seeding**: the first two moves are fixed to `+x`, `+y`
//! 2. **Move engine**: each candidate fold is validated (axis change, cube bounds,
//!    self-avoidance) before the state is touched
//! 3. **Driver**: recurses on every accepted move, reports complete folds, and
//!    undoes the move before trying the next
//!
//! Symmetry breaking (seeding plus "first move on a fresh axis is positive")
//! keeps the search from enumerating rotated and reflected copies.
//!
//! # Parallelization
//!
//! A search is single-threaded. Disjoint subtrees (partitioned on the first
//! few chosen moves) could be searched on independent `SearchContext`s.

pub mod chain;
pub mod context;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod report;
pub mod search;
pub mod state;

// Re-export commonly used types
pub use chain::Chain;
pub use context::SearchContext;
pub use engine::MoveRejection;
pub use search::{run, SearchConfig, SearchSummary, Solution, SolutionSink, SymmetryBreaking};
