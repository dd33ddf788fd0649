// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Lattice constants.
//!
//! The target region is always a cube. Its side length is chosen at run time
//! (from the chain definition or the command line) but must lie within
//! `MIN_SIDE..=MAX_SIDE` so that the occupancy lattice can be sized up front.

/// Number of lattice axes.
pub const NAXES: usize = 3;

/// Side length of the classic 4x4x4 snake cube.
pub const DEFAULT_SIDE: usize = 4;

/// Smallest cube that admits a fold (every segment has length at least 2).
pub const MIN_SIDE: usize = 2;

/// Largest supported cube.
///
/// The lattice reserves `(2 * side - 1)^3` cells, so this keeps the
/// allocation under 32K cells.
pub const MAX_SIDE: usize = 16;

/// Shortest legal segment: the shared vertex plus one new cell.
pub const MIN_SEGMENT_LENGTH: u32 = 2;
