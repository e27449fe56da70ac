//! # Output Backends
//!
//! Tree walkers that retextualize parsed forms into another syntax.
//!
//! ```text
//! forms → HtmlBackend → <tag attrs>body</tag>
//! forms → JsBackend   → const x = 5;
//! ```
//!
//! Backends only read the tree. Shapes they cannot express fail with a
//! [`Stage::Backend`](crate::Stage) error; there are no partial outputs.

pub mod html;
pub mod js;

pub use html::HtmlBackend;
pub use js::JsBackend;

use crate::config::{Config, Target};
use crate::error::{Result, SyntaxError};
use crate::parser::Node;
use crate::printer::print;

/// A renderer from parsed forms to output text
pub trait Backend {
    /// Renders one top-level form
    fn render_form(&self, form: &Node) -> Result<String>;

    /// Separator placed between rendered top-level forms
    fn form_separator(&self) -> &str;

    /// Renders a whole program, stopping at the first error
    fn render(&self, forms: &[Node]) -> Result<String> {
        let rendered = forms
            .iter()
            .map(|form| self.render_form(form))
            .collect::<Result<Vec<_>>>()?;
        Ok(rendered.join(self.form_separator()))
    }
}

/// Renders forms in the format the configuration selects
pub fn render(forms: &[Node], config: &Config) -> Result<String> {
    tracing::debug!(target_format = %config.target, forms = forms.len(), "rendering");

    match config.target {
        Target::Sexpr => Ok(print(forms)),
        Target::Html => HtmlBackend::new(config.html.clone()).render(forms),
        Target::Js => JsBackend::new(config.js.clone()).render(forms),
        Target::Json => serde_json::to_string_pretty(forms)
            .map_err(|e| SyntaxError::backend(format!("failed to serialise forms: {}", e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forms() -> Vec<Node> {
        vec![Node::List(vec![
            Node::atom("define"),
            Node::atom("x"),
            Node::Number(5.0),
        ])]
    }

    #[test]
    fn test_render_dispatch() {
        let mut config = Config::default();
        assert_eq!(render(&forms(), &config).unwrap(), "(define x 5)");

        config.target = Target::Js;
        assert_eq!(render(&forms(), &config).unwrap(), "const x = 5;");

        config.target = Target::Html;
        assert_eq!(render(&forms(), &config).unwrap(), "<define x>5</define>");

        config.target = Target::Json;
        let json = render(&forms(), &config).unwrap();
        let back: Vec<Node> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, forms());
    }
}
