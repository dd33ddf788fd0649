// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Statistics are stored in the context and incremented by the search driver:
//! one counter per successful move and per solution, plus one per kind of
//! rejected move.

use crate::engine::MoveRejection;
use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

#[derive(Debug, EnumCountMacro, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Successful move applications.
    PositionsSeen,
    /// Complete folds.
    SolutionsFound,
}

const COUNT: usize = Counters::COUNT + MoveRejection::COUNT;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    #[inline]
    pub fn increment(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Count one rejected move.
    #[inline]
    pub fn record_rejection(&mut self, rejection: MoveRejection) {
        self.stats[Counters::COUNT + rejection as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// How many moves were rejected for the given reason.
    pub fn rejections(&self, rejection: MoveRejection) -> u64 {
        self.stats[Counters::COUNT + rejection as usize]
    }

    pub fn positions_seen(&self) -> u64 {
        self.get(Counters::PositionsSeen)
    }

    pub fn solutions_found(&self) -> u64 {
        self.get(Counters::SolutionsFound)
    }
}
