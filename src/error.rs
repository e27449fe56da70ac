//! Error types for the treeify pipeline

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Pipeline stage that produced an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    /// Raised while scanning characters into tokens
    Lexer,
    /// Raised while reconstructing nested lists from tokens
    Builder,
    /// Raised by an output backend (HTML, JS) that rejects a tree shape
    Backend,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Lexer => write!(f, "lexer"),
            Stage::Builder => write!(f, "builder"),
            Stage::Backend => write!(f, "backend"),
        }
    }
}

/// Location of a character in the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    /// 0-based character index into the input
    pub offset: usize,
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
}

impl Position {
    /// Creates a position from its parts
    pub fn new(offset: usize, line: usize, column: usize) -> Self {
        Position {
            offset,
            line,
            column,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (line {}, column {})",
            self.offset, self.line, self.column
        )
    }
}

/// The single failure kind of the pipeline
///
/// The first error aborts the whole call; there is no partial tree and no
/// recovery. Structural and numeric failures share this one channel.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{stage}: {message}")]
pub struct SyntaxError {
    /// Stage that raised the error
    pub stage: Stage,
    /// Human readable description, already naming any cited positions
    pub message: String,
    /// Every position the error cites (empty for backend errors)
    pub positions: Vec<Position>,
}

impl SyntaxError {
    /// Lexer error citing a single position
    pub fn lexer(message: impl Into<String>, position: Position) -> Self {
        SyntaxError {
            stage: Stage::Lexer,
            message: message.into(),
            positions: vec![position],
        }
    }

    /// Builder error citing a single position
    pub fn builder(message: impl Into<String>, position: Position) -> Self {
        SyntaxError {
            stage: Stage::Builder,
            message: message.into(),
            positions: vec![position],
        }
    }

    /// Backend error; trees carry no positions
    pub fn backend(message: impl Into<String>) -> Self {
        SyntaxError {
            stage: Stage::Backend,
            message: message.into(),
            positions: Vec::new(),
        }
    }

    /// Error citing several positions at once (unclosed brackets)
    pub fn with_positions(
        stage: Stage,
        message: impl Into<String>,
        positions: Vec<Position>,
    ) -> Self {
        SyntaxError {
            stage,
            message: message.into(),
            positions,
        }
    }

    /// First cited position, if any
    pub fn position(&self) -> Option<Position> {
        self.positions.first().copied()
    }
}

/// Joins positions for messages that cite several of them
pub(crate) fn join_positions(positions: &[Position]) -> String {
    positions
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type for treeify operations
pub type Result<T> = std::result::Result<T, SyntaxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_stage() {
        let err = SyntaxError::lexer("unexpected ) at position 0", Position::new(0, 1, 1));
        assert_eq!(err.to_string(), "lexer: unexpected ) at position 0");
        assert_eq!(err.position(), Some(Position::new(0, 1, 1)));
    }

    #[test]
    fn test_backend_error_has_no_position() {
        let err = SyntaxError::backend("expected parameter list for lambda");
        assert_eq!(err.stage, Stage::Backend);
        assert_eq!(err.position(), None);
        assert!(err.to_string().starts_with("backend: "));
    }

    #[test]
    fn test_join_positions() {
        let joined = join_positions(&[Position::new(0, 1, 1), Position::new(4, 2, 2)]);
        assert_eq!(joined, "0 (line 1, column 1), 4 (line 2, column 2)");
    }
}
