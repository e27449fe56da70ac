//! # Treeify - S-expression Trees and Retextualizers
//!
//! Reads S-expression source into an in-memory tree and writes it back out,
//! either as canonical S-expressions or through one of the output backends
//! (HTML markup, a small JavaScript subset). Nothing is ever evaluated.
//!
//! ## Quick Start
//!
//! ```rust
//! use treeify::{parse, print, Node};
//!
//! # fn main() -> treeify::Result<()> {
//! let forms = parse(r#"(define x (a b c (-123 "456 789" 10.5 11)))"#)?;
//!
//! assert_eq!(forms.len(), 1);
//! assert_eq!(forms[0].head_atom(), Some("define"));
//! assert_eq!(print(&forms), r#"(define x (a b c (-123 "456 789" 10.5 11)))"#);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Source → Scanner → Tokens → TreeBuilder → [Node] → { printer, HtmlBackend, JsBackend }
//! ```
//!
//! - [`Scanner`] - classifies characters into bracket, string, number and
//!   identifier tokens, failing fast on unbalanced brackets
//! - [`TreeBuilder`] - rebuilds nested lists with an explicit stack and
//!   performs the authoritative structural check
//! - [`print`] - canonical text; `parse(print(forms))` reproduces `forms`
//! - [`backend`] - HTML and JavaScript emitters
//!
//! ## Error Handling
//!
//! Every stage reports through [`SyntaxError`], tagged with the [`Stage`]
//! that raised it. The first error aborts the call:
//!
//! ```rust
//! let err = treeify::parse("(a (b)").unwrap_err();
//! assert_eq!(err.stage, treeify::Stage::Lexer);
//! assert_eq!(err.position().map(|p| p.offset), Some(0));
//! ```

/// Version of the treeify crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod backend;
pub mod config;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod printer;

// Re-export main types
pub use backend::{Backend, HtmlBackend, JsBackend};
pub use config::{Config, HtmlOptions, JsOptions, Target};
pub use error::{Position, Result, Stage, SyntaxError};
pub use lexer::{SExprScanner, Token, TokenKind};
pub use parser::{Node, TreeBuilder};
pub use printer::{print, print_list, Print};

/// Type alias for the S-expression scanner (lexer).
/// Converts raw source text into tokens for the tree builder.
pub type Scanner = SExprScanner;

/// Parses source text into its top-level forms, in source order
pub fn parse(source: &str) -> Result<Vec<Node>> {
    let tokens = Scanner::new(source).scan_tokens()?;
    TreeBuilder::new().build(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_source() {
        assert_eq!(parse("").unwrap(), Vec::<Node>::new());
    }

    #[test]
    fn test_parse_several_forms() {
        let forms = parse("a (b) \"c\" 1").unwrap();
        assert_eq!(
            forms,
            vec![
                Node::atom("a"),
                Node::List(vec![Node::atom("b")]),
                Node::string("c"),
                Node::Number(1.0),
            ]
        );
    }
}
