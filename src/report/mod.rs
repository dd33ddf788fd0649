// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Rendering solutions and run summaries.
//!
//! A solution renders as its chosen moves, one signed axis label per fold:
//!
//! ```text
//! moves: -x+y+x+z+x-y
//! ```
//!
//! The detailed format puts one fold per line with the length of the segment it lays:
//!
//! ```text
//! -x (3)
//! +y (2)
//! ```

pub mod sinks;

pub use sinks::{CollectingSink, PrintSink};

use crate::engine::MoveRejection;
use crate::error::MoveParseError;
use crate::geometry::{Axis, Direction, Move};
use crate::search::{SearchSummary, Solution};
use std::fmt;

/// How solutions are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// `moves: +x-y+z...` on one line.
    #[default]
    Compact,
    /// A header line, then one `+x (L)` line per fold.
    Detailed,
}

/// Concatenate moves as signed axis labels.
pub fn render_moves<I>(moves: I) -> String
where
    I: IntoIterator<Item = Move>,
{
    moves.into_iter().map(|mv| mv.to_string()).collect()
}

impl fmt::Display for Solution<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mv in self.moves() {
            write!(f, "{}", mv)?;
        }
        Ok(())
    }
}

/// Render one solution in the given format, without a trailing newline.
pub fn render_solution(solution: &Solution<'_>, format: Format) -> String {
    match format {
        Format::Compact => format!("moves: {}", solution),
        Format::Detailed => {
            let mut out = format!("solution {}:", solution.number);
            for (mv, length) in solution.folds() {
                out.push_str(&format!("\n{} ({})", mv, length));
            }
            out
        }
    }
}

/// Parse a rendered move string such as `+x-y+z`.
///
/// Whitespace is ignored and an optional `moves:` prefix is skipped, so the
/// output of `render_solution` in compact format parses back.
pub fn parse_moves(text: &str) -> Result<Vec<Move>, MoveParseError> {
    let text = text.trim();
    let text = text.strip_prefix("moves:").unwrap_or(text);
    let mut moves = Vec::new();
    let mut chars = text.char_indices().filter(|(_, c)| !c.is_whitespace());
    while let Some((offset, sign)) = chars.next() {
        let direction =
            Direction::from_sign(sign).ok_or(MoveParseError::ExpectedSign { offset, found: sign })?;
        let (offset, label) = chars.next().ok_or(MoveParseError::Truncated)?;
        let axis =
            Axis::from_label(label).ok_or(MoveParseError::ExpectedAxis { offset, found: label })?;
        moves.push(Move::new(axis, direction));
    }
    Ok(moves)
}

/// Summary lines: elapsed time, positions, time per position, rejected moves, solutions.
pub fn render_summary(summary: &SearchSummary) -> String {
    let rate = match summary.nanos_per_position() {
        Some(ns) => format!("({:.0}ns/position)", ns),
        None => "(no positions)".to_string(),
    };
    let rejected: Vec<String> = MoveRejection::ALL
        .iter()
        .map(|&kind| format!("{} {}", kind.label(), summary.statistics.rejections(kind)))
        .collect();
    let limit = if summary.exhausted {
        ""
    } else {
        " (stopped at limit)"
    };
    format!(
        "Took {:.1} s\npositions seen: {}\n{}\nrejected moves: {}\nsolutions found: {}{}",
        summary.elapsed.as_secs_f64(),
        summary.positions_seen,
        rate,
        rejected.join(", "),
        summary.solutions_found,
        limit
    )
}
