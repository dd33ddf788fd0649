// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exhaustive depth-first search over fold sequences.
//!
//! # Algorithm
//!
//! At each node the driver tries, for each axis in the order x, y, z:
//! 1. the positive direction
//! 2. the negative direction, but only if the axis already has a nonzero span
//!
//! Every successful move counts as a position. If it places the last segment,
//! the fold is reported as a solution; otherwise the driver recurses. The move
//! is always undone before the next candidate is tried.
//!
//! # Symmetry breaking
//!
//! Two rules keep the search from rediscovering rotated or reflected copies of
//! the same fold:
//! - `seed_orientation`: the first two moves are forced to `+x`, `+y`
//! - `canonical_first_direction`: the first move along an untouched axis is
//!   always positive (the "virgin-axis" rule above)
//!
//! With both rules off the search visits every orientation; for chains that
//! fill their cube the number of solutions grows by a factor of 48.
//!
//! # Example
//!
//! ```
//! use snake_cube::chain::Chain;
//! use snake_cube::search::{run, SearchConfig};
//! use snake_cube::report::CollectingSink;
//!
//! let chain = Chain::new(vec![2, 2, 2, 2, 2, 2, 2]).unwrap();
//! let mut sink = CollectingSink::default();
//! let summary = run(&chain, &SearchConfig::new(2), &mut sink).unwrap();
//! assert_eq!(summary.solutions_found, 3);
//! assert_eq!(sink.solutions.len(), 3);
//! ```

pub mod driver;
pub mod sink;

pub use driver::SearchDriver;
pub use sink::{Solution, SolutionSink};

use crate::chain::Chain;
use crate::context::SearchContext;
use crate::engine::MoveRejection;
use crate::error::ConfigError;
use crate::geometry::DEFAULT_SIDE;
use crate::state::Statistics;
use std::time::{Duration, Instant};
use tracing::info;

/// Which symmetry-breaking rules are active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymmetryBreaking {
    /// Force the first two moves to `+x`, `+y`.
    pub seed_orientation: bool,
    /// Only try the positive direction on an axis with zero span.
    pub canonical_first_direction: bool,
}

impl SymmetryBreaking {
    /// Both rules on: each fold is found once per symmetry class.
    pub const fn canonical() -> Self {
        Self {
            seed_orientation: true,
            canonical_first_direction: true,
        }
    }

    /// Both rules off: every orientation of every fold is found.
    pub const fn none() -> Self {
        Self {
            seed_orientation: false,
            canonical_first_direction: false,
        }
    }
}

impl Default for SymmetryBreaking {
    fn default() -> Self {
        Self::canonical()
    }
}

/// Search parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Side of the target cube.
    pub side: usize,
    pub symmetry: SymmetryBreaking,
    /// Stop after this many solutions. `None` searches exhaustively.
    pub max_solutions: Option<u64>,
    /// Log a progress line every this many positions.
    pub progress_interval: Option<u64>,
}

impl SearchConfig {
    pub fn new(side: usize) -> Self {
        Self {
            side,
            symmetry: SymmetryBreaking::canonical(),
            max_solutions: None,
            progress_interval: None,
        }
    }

    pub fn with_symmetry(mut self, symmetry: SymmetryBreaking) -> Self {
        self.symmetry = symmetry;
        self
    }

    pub fn with_max_solutions(mut self, limit: Option<u64>) -> Self {
        self.max_solutions = limit;
        self
    }

    pub fn with_progress_interval(mut self, interval: Option<u64>) -> Self {
        self.progress_interval = interval;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SIDE)
    }
}

/// Aggregate result of a search run.
#[derive(Debug, Clone)]
pub struct SearchSummary {
    pub positions_seen: u64,
    pub solutions_found: u64,
    pub elapsed: Duration,
    /// False if the run stopped early at `max_solutions`.
    pub exhausted: bool,
    pub statistics: Statistics,
}

impl SearchSummary {
    fn new(statistics: &Statistics, elapsed: Duration, exhausted: bool) -> Self {
        Self {
            positions_seen: statistics.positions_seen(),
            solutions_found: statistics.solutions_found(),
            elapsed,
            exhausted,
            statistics: statistics.clone(),
        }
    }

    /// Mean wall time per position, if any position was seen.
    pub fn nanos_per_position(&self) -> Option<f64> {
        if self.positions_seen == 0 {
            return None;
        }
        Some(self.elapsed.as_secs_f64() * 1e9 / self.positions_seen as f64)
    }
}

/// Build a context for `chain`, apply the configured seeding, search, and summarize.
pub fn run<S: SolutionSink>(
    chain: &Chain,
    config: &SearchConfig,
    sink: &mut S,
) -> Result<SearchSummary, ConfigError> {
    let mut ctx = SearchContext::new(chain.clone(), config.side)?;
    if config.symmetry.seed_orientation {
        ctx.seed_orientation()?;
    }
    info!(
        segments = chain.len(),
        cells = chain.cell_count(),
        side = config.side,
        seed_orientation = config.symmetry.seed_orientation,
        canonical_first_direction = config.symmetry.canonical_first_direction,
        "starting search"
    );

    let start = Instant::now();
    let flow = SearchDriver::new(config, sink).run(&mut ctx);
    let summary = SearchSummary::new(&ctx.statistics, start.elapsed(), flow.is_continue());

    info!(
        positions_seen = summary.positions_seen,
        solutions_found = summary.solutions_found,
        elapsed_ms = summary.elapsed.as_millis() as u64,
        exhausted = summary.exhausted,
        axis_repeat = summary.statistics.rejections(MoveRejection::AxisRepeat),
        span_overflow = summary.statistics.rejections(MoveRejection::SpanOverflow),
        collision = summary.statistics.rejections(MoveRejection::Collision),
        "search finished"
    );
    Ok(summary)
}
