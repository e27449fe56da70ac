//! # HTML Emitter
//!
//! An element is a list: tag, attribute part, then body nodes.
//!
//! ```text
//! (div ((class "a b") (hidden)) "hi" (br))
//!   → <div class="a b" hidden>hi <br></br></div>
//! ```
//!
//! The attribute part is either a list of entries, each a scalar or a
//! `(name value...)` list, or a single scalar copied verbatim. Scalars in
//! body position are emitted as raw text; no escaping is applied.

use super::Backend;
use crate::config::HtmlOptions;
use crate::error::{Result, SyntaxError};
use crate::parser::Node;
use crate::printer::format_number;

/// HTML backend
#[derive(Debug, Clone, Default)]
pub struct HtmlBackend {
    options: HtmlOptions,
}

impl HtmlBackend {
    /// Creates an HTML backend with the given options
    pub fn new(options: HtmlOptions) -> Self {
        Self { options }
    }

    /// Renders a single node: lists become elements, scalars raw text
    pub fn render_node(&self, node: &Node) -> Result<String> {
        match node {
            Node::List(children) => self.render_element(children),
            scalar => scalar_text(scalar)
                .ok_or_else(|| SyntaxError::backend("expected a scalar node")),
        }
    }

    fn render_element(&self, children: &[Node]) -> Result<String> {
        let (tag, rest) = children
            .split_first()
            .ok_or_else(|| SyntaxError::backend("cannot render an empty list as an element"))?;
        let tag = scalar_text(tag).ok_or_else(|| {
            SyntaxError::backend("element tag must be an atom, string or number, got list")
        })?;

        let attributes = match rest.first() {
            Some(part) => render_attributes(part)?,
            None => String::new(),
        };

        let body = rest
            .iter()
            .skip(1)
            .map(|child| self.render_node(child))
            .collect::<Result<Vec<_>>>()?
            .join(&self.options.body_separator);

        let mut out = String::new();
        out.push('<');
        out.push_str(&tag);
        if !attributes.is_empty() {
            out.push(' ');
            out.push_str(&attributes);
        }
        out.push('>');
        out.push_str(&body);
        out.push_str("</");
        out.push_str(&tag);
        out.push('>');
        Ok(out)
    }
}

impl Backend for HtmlBackend {
    fn render_form(&self, form: &Node) -> Result<String> {
        self.render_node(form)
    }

    fn form_separator(&self) -> &str {
        &self.options.document_separator
    }
}

/// Raw text of a scalar; strings lose their quotes
fn scalar_text(node: &Node) -> Option<String> {
    match node {
        Node::Number(value) => Some(format_number(*value)),
        Node::String(text) | Node::Atom(text) => Some(text.clone()),
        Node::List(_) => None,
    }
}

fn render_attributes(part: &Node) -> Result<String> {
    match part {
        Node::List(entries) => Ok(entries
            .iter()
            .map(render_attribute)
            .collect::<Result<Vec<_>>>()?
            .join(" ")),
        scalar => scalar_text(scalar)
            .ok_or_else(|| SyntaxError::backend("expected a scalar attribute part")),
    }
}

fn render_attribute(entry: &Node) -> Result<String> {
    let parts = match entry {
        Node::List(parts) => parts,
        scalar => {
            return scalar_text(scalar)
                .ok_or_else(|| SyntaxError::backend("expected a scalar attribute"))
        }
    };

    let (name, values) = parts
        .split_first()
        .ok_or_else(|| SyntaxError::backend("attribute entry must name an attribute"))?;
    let name = scalar_text(name)
        .ok_or_else(|| SyntaxError::backend("attribute name must be a scalar, got list"))?;

    if values.is_empty() {
        return Ok(name);
    }

    let values = values
        .iter()
        .map(|value| {
            scalar_text(value).ok_or_else(|| {
                SyntaxError::backend(format!("value of attribute {} must be a scalar", name))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(format!("{}=\"{}\"", name, values.join(" ")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    fn html(source: &str) -> Result<String> {
        let forms = parse(source)?;
        HtmlBackend::default().render(&forms)
    }

    #[test]
    fn test_element_with_class() {
        assert_eq!(
            html(r#"(div ((class "a b")) "hi")"#).unwrap(),
            r#"<div class="a b">hi</div>"#
        );
    }

    #[test]
    fn test_empty_attributes() {
        assert_eq!(
            html(r#"(title () "Hello world!")"#).unwrap(),
            "<title>Hello world!</title>"
        );
    }

    #[test]
    fn test_missing_attribute_part() {
        assert_eq!(html("(br)").unwrap(), "<br></br>");
    }

    #[test]
    fn test_body_nodes_joined_by_separator() {
        assert_eq!(
            html(r#"(h1 () "Hello" "there" (b () "you"))"#).unwrap(),
            "<h1>Hello there <b>you</b></h1>"
        );
    }

    #[test]
    fn test_scalar_attribute_blob() {
        assert_eq!(
            html(r#"(input "type=text" "x")"#).unwrap(),
            "<input type=text>x</input>"
        );
    }

    #[test]
    fn test_bare_and_multi_value_attributes() {
        assert_eq!(
            html(r#"(input (disabled (value 1 2) (data-x)))"#).unwrap(),
            r#"<input disabled value="1 2" data-x></input>"#
        );
    }

    #[test]
    fn test_nested_document() {
        let source = r#"
            (html ()
                (head ()
                    (title () "Hello world!"))
                (body ()
                    (div ((class "class-1 class-2")) "first page")))
        "#;
        assert_eq!(
            html(source).unwrap(),
            "<html><head><title>Hello world!</title></head> \
             <body><div class=\"class-1 class-2\">first page</div></body></html>"
        );
    }

    #[test]
    fn test_documents_joined() {
        assert_eq!(html("(p () 1) (p () 2)").unwrap(), "<p>1</p><p>2</p>");
    }

    #[test]
    fn test_top_level_scalar_is_text() {
        assert_eq!(html(r#""plain""#).unwrap(), "plain");
    }

    #[test]
    fn test_empty_element_fails() {
        let err = html("(div () ())").unwrap_err();
        assert_eq!(err.stage, crate::Stage::Backend);
        assert!(err.message.contains("empty list"));
    }

    #[test]
    fn test_list_tag_fails() {
        assert!(html("((div) ())").is_err());
    }

    #[test]
    fn test_list_attribute_value_fails() {
        let err = html("(a ((href (x))))").unwrap_err();
        assert!(err.message.contains("attribute href"));
    }

    #[test]
    fn test_custom_separators() {
        let backend = HtmlBackend::new(HtmlOptions {
            body_separator: String::new(),
            document_separator: "\n".to_string(),
        });
        let forms = parse(r#"(p () "a" "b") (p ())"#).unwrap();
        assert_eq!(backend.render(&forms).unwrap(), "<p>ab</p>\n<p></p>");
    }
}
