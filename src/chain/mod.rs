// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The chain: an immutable ordered sequence of segment lengths.
//!
//! A segment of length `L` occupies `L` unit cells, the first of which is shared
//! with the end of the previous segment. A chain of `n` segments therefore
//! covers `sum(L) - (n - 1)` cells once folded.
//!
//! The chain is read-only during search. Where it comes from (command line,
//! file, or the embedded default) is handled by `parse`.

pub mod parse;

pub use parse::{load_file, parse_list, PuzzleDefinition};

use crate::error::{ChainError, ConfigError};
use crate::geometry::{MAX_SIDE, MIN_SEGMENT_LENGTH, MIN_SIDE};

/// Segment lengths of the classic 4x4x4 snake cube (46 segments, 64 cells).
pub const DEFAULT_CHAIN: [u32; 46] = [
    3, 2, 3, 2, 2, 4, 2, 3, 2, 3, 2, 3, 2, 2, 2, 2, 2, 2, 2, 2, 3, 3, //
    2, 2, 2, 2, 2, 3, 4, 2, 2, 2, 4, 2, 3, 2, 2, 2, 2, 2, 2, 2, 2, 2, //
    4, 2,
];

/// An ordered sequence of segment lengths, each at least 2.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    segments: Vec<u32>,
}

impl Chain {
    /// Build a chain, rejecting empty chains and segments shorter than 2.
    pub fn new(segments: Vec<u32>) -> Result<Self, ChainError> {
        if segments.is_empty() {
            return Err(ChainError::Empty);
        }
        if let Some((index, &length)) = segments
            .iter()
            .enumerate()
            .find(|&(_, &length)| length < MIN_SEGMENT_LENGTH)
        {
            return Err(ChainError::SegmentTooShort { index, length });
        }
        Ok(Self { segments })
    }

    /// The 46-segment 4x4x4 puzzle.
    pub fn default_puzzle() -> Self {
        Self {
            segments: DEFAULT_CHAIN.to_vec(),
        }
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Length of segment `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[inline]
    pub fn length(&self, index: usize) -> u32 {
        self.segments[index]
    }

    /// Length of segment `index`, or None past the end of the chain.
    #[inline]
    pub fn get(&self, index: usize) -> Option<u32> {
        self.segments.get(index).copied()
    }

    pub fn segments(&self) -> &[u32] {
        &self.segments
    }

    /// Number of distinct cells the folded chain occupies.
    pub fn cell_count(&self) -> usize {
        let total: usize = self.segments.iter().map(|&l| l as usize).sum();
        total - (self.segments.len() - 1)
    }

    /// Side of the cube this chain exactly fills, if its cell count is a perfect cube.
    pub fn cube_side(&self) -> Option<usize> {
        let cells = self.cell_count();
        (1..=cells).take_while(|s| s * s * s <= cells).find(|s| s * s * s == cells)
    }

    /// Pick the cube side: an explicit choice wins, otherwise derive it from the chain.
    pub fn resolve_side(&self, explicit: Option<usize>) -> Result<usize, ConfigError> {
        let side = match explicit {
            Some(side) => side,
            None => self.cube_side().ok_or(ConfigError::SideUnknown {
                cells: self.cell_count(),
            })?,
        };
        self.check_fits(side)?;
        Ok(side)
    }

    /// Check that `side` is supported and that every segment could fit along one axis.
    pub fn check_fits(&self, side: usize) -> Result<(), ConfigError> {
        if !(MIN_SIDE..=MAX_SIDE).contains(&side) {
            return Err(ConfigError::SideOutOfRange { side });
        }
        if let Some((index, &length)) = self
            .segments
            .iter()
            .enumerate()
            .find(|&(_, &length)| length as usize > side)
        {
            return Err(ConfigError::SegmentTooLong {
                index,
                length,
                side,
            });
        }
        Ok(())
    }
}

impl Default for Chain {
    fn default() -> Self {
        Self::default_puzzle()
    }
}
