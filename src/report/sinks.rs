// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Ready-made solution sinks.

use super::{render_solution, Format};
use crate::geometry::Move;
use crate::search::{Solution, SolutionSink};
use std::io::{self, Write};
use std::ops::ControlFlow;

/// Keeps every solution's chosen moves.
#[derive(Debug, Default, Clone)]
pub struct CollectingSink {
    pub solutions: Vec<Vec<Move>>,
}

impl SolutionSink for CollectingSink {
    fn on_solution(&mut self, solution: &Solution<'_>) -> ControlFlow<()> {
        self.solutions.push(solution.moves().collect());
        ControlFlow::Continue(())
    }
}

/// Writes each solution to a writer as it is found.
///
/// A write failure stops the search; the error is kept for the caller.
#[derive(Debug)]
pub struct PrintSink<W: Write> {
    writer: W,
    format: Format,
    error: Option<io::Error>,
}

impl<W: Write> PrintSink<W> {
    pub fn new(writer: W, format: Format) -> Self {
        Self {
            writer,
            format,
            error: None,
        }
    }

    /// Flush the writer and return the first write error, if any.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> SolutionSink for PrintSink<W> {
    fn on_solution(&mut self, solution: &Solution<'_>) -> ControlFlow<()> {
        match writeln!(self.writer, "{}", render_solution(solution, self.format)) {
            Ok(()) => ControlFlow::Continue(()),
            Err(err) => {
                self.error = Some(err);
                ControlFlow::Break(())
            }
        }
    }
}
