use crate::error::Position;
use serde::{Deserialize, Serialize};

/// A single token from the source text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The type of token
    pub kind: TokenKind,
    /// Raw matched text; for strings, the text between the quotes
    pub text: String,
    /// Where the token starts
    pub position: Position,
}

impl Token {
    /// Creates a new token with the given properties
    pub fn new(kind: TokenKind, text: impl Into<String>, position: Position) -> Self {
        Token {
            kind,
            text: text.into(),
            position,
        }
    }
}

/// Token classes produced by the scanner
///
/// Numbers keep their raw text; conversion to a value happens in the tree
/// builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// Left parenthesis (
    LeftBracket,
    /// Right parenthesis )
    RightBracket,
    /// Double-quoted string literal
    String,
    /// Numeric literal
    Number,
    /// Any other run of non-whitespace, non-bracket characters
    Identifier,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            TokenKind::LeftBracket => "left-bracket",
            TokenKind::RightBracket => "right-bracket",
            TokenKind::String => "string-literal",
            TokenKind::Number => "number-literal",
            TokenKind::Identifier => "identifier",
        };
        write!(f, "{}", name)
    }
}
