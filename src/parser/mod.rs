//! Tree building
//!
//! Reconstructs nested S-expression lists from the scanner's flat token
//! sequence.

mod ast;
mod tree_builder;

pub use ast::Node;
pub use tree_builder::TreeBuilder;
