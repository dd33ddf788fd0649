// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for puzzle definition, configuration and replay.
//!
//! Rejected moves are not errors; see `engine::MoveRejection`.

use crate::engine::MoveRejection;
use crate::geometry::{Move, MAX_SIDE, MIN_SIDE};
use thiserror::Error;

/// Problems with a chain definition or the source it was read from.
#[derive(Error, Debug)]
pub enum ChainError {
    #[error("chain has no segments")]
    Empty,

    #[error("segment {index} has length {length}; every segment must have length at least 2")]
    SegmentTooShort { index: usize, length: u32 },

    #[error("could not parse chain entry {token:?} at position {position}")]
    Parse { token: String, position: usize },

    #[error("chain file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("chain file JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A chain that is well-formed on its own but cannot be searched as configured.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("cube side {side} is outside the supported range {}..={}", MIN_SIDE, MAX_SIDE)]
    SideOutOfRange { side: usize },

    #[error("chain covers {cells} cells, which is not a cube; pass the side length explicitly")]
    SideUnknown { cells: usize },

    #[error("segment {index} has length {length}, which cannot fit in a cube of side {side}")]
    SegmentTooLong { index: usize, length: u32, side: usize },

    #[error("chain needs at least {needed} segments, found {found}")]
    TooFewSegments { needed: usize, found: usize },

    #[error("pre-seeded move {step} ({mv}) was rejected: {reason}")]
    SeedRejected {
        step: usize,
        mv: Move,
        reason: MoveRejection,
    },
}

/// Failure to replay a rendered move sequence against a chain.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReplayError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("move sequence has {found} moves but the chain has {expected} segments")]
    LengthMismatch { expected: usize, found: usize },

    #[error("move {step} ({mv}) was rejected: {reason}")]
    Rejected {
        step: usize,
        mv: Move,
        reason: MoveRejection,
    },
}

/// A rendered move string that does not parse.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    #[error("expected '+' or '-' at offset {offset}, found {found:?}")]
    ExpectedSign { offset: usize, found: char },

    #[error("expected an axis label x, y or z at offset {offset}, found {found:?}")]
    ExpectedAxis { offset: usize, found: char },

    #[error("move string ends after a sign")]
    Truncated,
}
