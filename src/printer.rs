//! Canonical S-expression printer
//!
//! Lists print as `(` + space-joined children + `)`, strings inside double
//! quotes, numbers and atoms as their plain text. Source whitespace is not
//! kept, but printing then parsing yields a structurally equal tree.

use crate::parser::Node;

/// Things that can be rendered back to S-expression text
pub trait Print {
    /// Appends the rendering to `out`
    fn print_into(&self, out: &mut String);
}

/// Walks the tree with an explicit stack of child iterators, so nesting
/// depth is bounded only by memory.
impl Print for Node {
    fn print_into(&self, out: &mut String) {
        // Open lists: remaining children, and whether none has printed yet
        let mut frames: Vec<(std::slice::Iter<'_, Node>, bool)> = Vec::new();
        let mut next = Some(self);

        loop {
            if let Some(node) = next.take() {
                match node {
                    Node::List(children) => {
                        out.push('(');
                        frames.push((children.iter(), true));
                    }
                    scalar => print_scalar(scalar, out),
                }
            }

            match frames.last_mut() {
                None => break,
                Some((children, first)) => match children.next() {
                    Some(child) => {
                        if !*first {
                            out.push(' ');
                        }
                        *first = false;
                        next = Some(child);
                    }
                    None => {
                        out.push(')');
                        frames.pop();
                    }
                },
            }
        }
    }
}

fn print_scalar(node: &Node, out: &mut String) {
    match node {
        Node::Number(value) => out.push_str(&format_number(*value)),
        Node::String(text) => {
            out.push('"');
            out.push_str(text);
            out.push('"');
        }
        Node::Atom(text) => out.push_str(text),
        Node::List(_) => {}
    }
}

/// A sequence prints as one form per line
impl Print for [Node] {
    fn print_into(&self, out: &mut String) {
        for (i, node) in self.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            node.print_into(out);
        }
    }
}

impl Print for Vec<Node> {
    fn print_into(&self, out: &mut String) {
        self.as_slice().print_into(out);
    }
}

/// Renders a node or a sequence of top-level forms
pub fn print<P: Print + ?Sized>(value: &P) -> String {
    let mut out = String::new();
    value.print_into(&mut out);
    out
}

/// Renders a sequence as a single parenthesised list
pub fn print_list(nodes: &[Node]) -> String {
    let mut out = String::new();
    out.push('(');
    for (i, node) in nodes.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        node.print_into(&mut out);
    }
    out.push(')');
    out
}

/// Shortest text that parses back to the same value: `11`, `10.5`, `-123`
pub fn format_number(value: f64) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_scalars() {
        assert_eq!(print(&Node::Number(11.0)), "11");
        assert_eq!(print(&Node::Number(10.5)), "10.5");
        assert_eq!(print(&Node::Number(-123.0)), "-123");
        assert_eq!(print(&Node::string("456 789")), "\"456 789\"");
        assert_eq!(print(&Node::atom("eq?")), "eq?");
    }

    #[test]
    fn test_print_nested_list() {
        let node = Node::List(vec![
            Node::atom("a"),
            Node::List(vec![]),
            Node::List(vec![Node::Number(1.0), Node::string("x")]),
        ]);
        assert_eq!(print(&node), "(a () (1 \"x\"))");
    }

    #[test]
    fn test_print_sequence() {
        let forms = vec![Node::atom("a"), Node::List(vec![Node::atom("b")])];
        assert_eq!(print(&forms), "a\n(b)");
        assert_eq!(print(&forms[..]), "a\n(b)");
        assert_eq!(print_list(&forms), "(a (b))");
    }

    #[test]
    fn test_print_deep_nesting() {
        let depth = 200_000;
        let source = format!("{}x{}", "(".repeat(depth), ")".repeat(depth));

        let forms = crate::parse(&source).unwrap();
        assert_eq!(print(&forms), source);
        drop(forms);
    }

    #[test]
    fn test_print_empty_sequence() {
        let forms: Vec<Node> = Vec::new();
        assert_eq!(print(&forms), "");
        assert_eq!(print_list(&forms), "()");
    }
}
