use serde::{Deserialize, Serialize};
use std::fmt;

/// A node of a parsed S-expression tree
///
/// Each variant carries exactly its own payload; a `List` owns its children
/// outright, so trees never share nodes or form cycles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// Numeric literal
    Number(f64),
    /// String literal, without its quotes
    String(String),
    /// Identifier or other bare value
    Atom(String),
    /// Parenthesised list, possibly empty
    List(Vec<Node>),
}

impl Node {
    /// Creates an atom node
    pub fn atom(text: impl Into<String>) -> Self {
        Node::Atom(text.into())
    }

    /// Creates a string node
    pub fn string(text: impl Into<String>) -> Self {
        Node::String(text.into())
    }

    /// Returns the atom text, if this is an atom
    pub fn as_atom(&self) -> Option<&str> {
        match self {
            Node::Atom(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the children, if this is a list
    pub fn as_list(&self) -> Option<&[Node]> {
        match self {
            Node::List(children) => Some(children),
            _ => None,
        }
    }

    /// Check if node is a list
    pub fn is_list(&self) -> bool {
        matches!(self, Node::List(_))
    }

    /// Atom text of a list's first child, e.g. `define` in `(define x 5)`
    pub fn head_atom(&self) -> Option<&str> {
        self.as_list()
            .and_then(|children| children.first())
            .and_then(Node::as_atom)
    }

    /// Short name of the node kind, for diagnostics
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Number(_) => "number",
            Node::String(_) => "string",
            Node::Atom(_) => "atom",
            Node::List(_) => "list",
        }
    }
}

/// Tears lists down through a heap worklist instead of the default
/// recursive drop, so arbitrarily deep trees can be freed.
impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = match self {
            Node::List(children) if !children.is_empty() => std::mem::take(children),
            _ => return,
        };

        while let Some(mut node) = pending.pop() {
            if let Node::List(children) = &mut node {
                pending.append(children);
            }
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::printer::print(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_head_atom() {
        let node = Node::List(vec![Node::atom("define"), Node::atom("x"), Node::Number(5.0)]);
        assert_eq!(node.head_atom(), Some("define"));
        assert_eq!(Node::List(vec![]).head_atom(), None);
        assert_eq!(Node::atom("x").head_atom(), None);
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Node::atom("a").as_atom(), Some("a"));
        assert_eq!(Node::string("a").as_atom(), None);
        assert!(Node::List(vec![]).is_list());
        assert_eq!(Node::List(vec![]).as_list(), Some(&[][..]));
        assert_eq!(Node::Number(1.0).kind_name(), "number");
    }

    #[test]
    fn test_serde_shape() {
        let node = Node::List(vec![Node::atom("a"), Node::Number(1.5)]);
        let json = serde_json::to_string(&node).unwrap();
        assert_eq!(json, r#"{"List":[{"Atom":"a"},{"Number":1.5}]}"#);
        let back: Node = serde_json::from_str(&json).unwrap();
        assert_eq!(back, node);
    }

    #[test]
    fn test_drop_deep_tree() {
        let mut node = Node::atom("leaf");
        for _ in 0..200_000 {
            node = Node::List(vec![node, Node::Number(1.0)]);
        }
        drop(node);
    }

    #[test]
    fn test_display_uses_printer() {
        let node = Node::List(vec![Node::atom("a"), Node::string("b c")]);
        assert_eq!(node.to_string(), "(a \"b c\")");
    }
}
