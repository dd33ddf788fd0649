// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Geometric types for the cubic lattice.
//!
//! This module contains the small value types the rest of the search is built on:
//! - Axis / Direction: the six unit directions of the lattice
//! - Coord: a lattice cell relative to the chain's first cell
//! - Move: one fold (axis + direction)

pub mod axis;
pub mod constants;
pub mod coord;
pub mod moves;

// Re-export for convenience
pub use axis::{Axis, Direction};
pub use constants::*;
pub use coord::Coord;
pub use moves::Move;
