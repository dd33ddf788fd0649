// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Reading chain definitions from text.
//!
//! Two formats are accepted:
//!
//! ```text
//! # plain list: integers separated by whitespace and/or commas
//! 3, 2, 3, 2, 2, 4
//! 2 3 2 3
//! ```
//!
//! ```text
//! {"segments": [3, 2, 3, 2, 2, 4, 2, 3, 2, 3], "side": 4}
//! ```
//!
//! A bare JSON array is also accepted since it parses as a plain list once the
//! brackets are stripped.

use super::Chain;
use crate::error::ChainError;
use serde::Deserialize;
use std::path::Path;

/// A chain plus an optional cube side, as read from a definition file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PuzzleDefinition {
    pub segments: Vec<u32>,
    #[serde(default)]
    pub side: Option<usize>,
}

impl PuzzleDefinition {
    /// Parse either format.
    pub fn parse(text: &str) -> Result<Self, ChainError> {
        if text.trim_start().starts_with('{') {
            let definition: PuzzleDefinition = serde_json::from_str(text)?;
            return Ok(definition);
        }
        Ok(Self {
            segments: parse_list(text)?,
            side: None,
        })
    }

    /// Validate the segment list into a `Chain`.
    pub fn into_chain(self) -> Result<(Chain, Option<usize>), ChainError> {
        Ok((Chain::new(self.segments)?, self.side))
    }
}

/// Parse a plain list of segment lengths.
///
/// `#` starts a comment that runs to the end of the line; `[` and `]` are ignored.
pub fn parse_list(text: &str) -> Result<Vec<u32>, ChainError> {
    let mut segments = Vec::new();
    for line in text.lines() {
        let content = line.split('#').next().unwrap_or("");
        for token in content
            .split(|c: char| c.is_whitespace() || matches!(c, ',' | '[' | ']'))
            .filter(|t| !t.is_empty())
        {
            let length = token.parse::<u32>().map_err(|_| ChainError::Parse {
                token: token.to_string(),
                position: segments.len(),
            })?;
            segments.push(length);
        }
    }
    Ok(segments)
}

/// Read a definition file in either format.
pub fn load_file(path: &Path) -> Result<PuzzleDefinition, ChainError> {
    let text = std::fs::read_to_string(path)?;
    PuzzleDefinition::parse(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_mixed_separators() {
        let segments = parse_list("3, 2,3\n2 2\t4").unwrap();
        assert_eq!(segments, vec![3, 2, 3, 2, 2, 4]);
    }

    #[test]
    fn test_parse_list_comments_and_brackets() {
        let text = "# classic 3x3x3\n[3, 3, 3] # first row\n\n3 2";
        assert_eq!(parse_list(text).unwrap(), vec![3, 3, 3, 3, 2]);
    }

    #[test]
    fn test_parse_list_reports_bad_token() {
        match parse_list("3 2 x 4") {
            Err(ChainError::Parse { token, position }) => {
                assert_eq!(token, "x");
                assert_eq!(position, 2);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_parse_json_definition() {
        let definition =
            PuzzleDefinition::parse(r#"{"segments": [2, 2, 2, 2, 2, 2, 2], "side": 2}"#).unwrap();
        assert_eq!(definition.segments.len(), 7);
        assert_eq!(definition.side, Some(2));
    }

    #[test]
    fn test_parse_json_without_side() {
        let definition = PuzzleDefinition::parse(r#"{"segments": [3, 2]}"#).unwrap();
        assert_eq!(definition.side, None);
        let (chain, side) = definition.into_chain().unwrap();
        assert_eq!(chain.segments(), &[3, 2]);
        assert_eq!(side, None);
    }

    #[test]
    fn test_parse_invalid_json() {
        assert!(matches!(
            PuzzleDefinition::parse(r#"{"segments": [3, 2"#),
            Err(ChainError::Json(_))
        ));
    }
}
