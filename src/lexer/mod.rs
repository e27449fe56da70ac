//! Lexical analysis
//!
//! Converts source text into an ordered sequence of classified tokens.

mod sexpr_scanner;
mod token;

pub use sexpr_scanner::SExprScanner;
pub use token::{Token, TokenKind};
