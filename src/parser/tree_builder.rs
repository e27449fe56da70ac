use super::ast::Node;
use crate::error::{join_positions, Position, Result, Stage, SyntaxError};
use crate::lexer::{Token, TokenKind};

/// An open `(` waiting for its `)`
#[derive(Debug, Clone, Copy)]
struct Mark {
    /// Length of the value stack when the bracket opened
    depth: usize,
    /// Where the bracket appeared
    position: Position,
}

/// Rebuilds nested lists from a flat token sequence
///
/// Uses an explicit value stack plus a stack of bracket marks instead of
/// recursion, so nesting depth is bounded only by memory. This is the
/// authoritative structural check: it does not trust that the tokens came
/// from the scanner.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    values: Vec<Node>,
    marks: Vec<Mark>,
}

impl TreeBuilder {
    /// Creates an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes the tokens and returns the top-level forms in source order
    pub fn build(mut self, tokens: Vec<Token>) -> Result<Vec<Node>> {
        for token in tokens {
            self.push_token(token)?;
        }

        if !self.marks.is_empty() {
            let open: Vec<Position> = self.marks.iter().map(|m| m.position).collect();
            return Err(SyntaxError::with_positions(
                Stage::Builder,
                format!("unclosed brackets at positions {}", join_positions(&open)),
                open,
            ));
        }

        tracing::debug!(forms = self.values.len(), "built syntax trees");
        Ok(self.values)
    }

    fn push_token(&mut self, token: Token) -> Result<()> {
        tracing::trace!(kind = %token.kind, text = %token.text, "builder transition");

        match token.kind {
            TokenKind::LeftBracket => {
                self.marks.push(Mark {
                    depth: self.values.len(),
                    position: token.position,
                });
            }
            TokenKind::RightBracket => {
                let mark = self.marks.pop().ok_or_else(|| {
                    SyntaxError::builder(
                        format!(
                            "unbalanced brackets: ) at position {} has no matching (",
                            token.position
                        ),
                        token.position,
                    )
                })?;
                let children = self.values.split_off(mark.depth);
                self.values.push(Node::List(children));
            }
            TokenKind::Identifier => self.values.push(Node::Atom(token.text)),
            TokenKind::String => self.values.push(Node::String(token.text)),
            TokenKind::Number => {
                let value = parse_number(&token.text).ok_or_else(|| {
                    SyntaxError::builder(
                        format!(
                            "invalid number \"{}\" at position {}",
                            token.text, token.position
                        ),
                        token.position,
                    )
                })?;
                self.values.push(Node::Number(value));
            }
        }

        Ok(())
    }
}

/// Non-finite results (overflowing literals) are rejected; they could not
/// be printed back as numbers.
fn parse_number(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}
