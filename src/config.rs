//! Rendering configuration
//!
//! Loaded from JSON by the command-line front end; every field has a
//! default so a partial file (or none at all) is fine.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Output format selected for a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// Canonical S-expression text
    #[default]
    Sexpr,
    /// HTML markup
    Html,
    /// JavaScript subset
    Js,
    /// JSON dump of the parsed forms
    Json,
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Target::Sexpr => "sexpr",
            Target::Html => "html",
            Target::Js => "js",
            Target::Json => "json",
        };
        f.write_str(name)
    }
}

/// HTML backend options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HtmlOptions {
    /// Joins sibling body nodes inside an element
    pub body_separator: String,
    /// Joins top-level documents
    pub document_separator: String,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            body_separator: " ".to_string(),
            document_separator: String::new(),
        }
    }
}

/// JavaScript backend options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JsOptions {
    /// Wrap top-level expressions (anything but `const`) in `console.log(...)`
    pub log_expressions: bool,
    /// Drop a leading `#lang ...` line before parsing
    pub skip_lang_line: bool,
    /// Joins top-level statements
    pub statement_separator: String,
}

impl Default for JsOptions {
    fn default() -> Self {
        Self {
            log_expressions: true,
            skip_lang_line: true,
            statement_separator: "\n".to_string(),
        }
    }
}

/// Full configuration for a rendering run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output format
    pub target: Target,
    /// HTML backend options
    pub html: HtmlOptions,
    /// JavaScript backend options
    pub js: JsOptions,
}

impl Config {
    /// Parses a configuration from JSON text
    pub fn from_json(text: &str) -> Result<Config, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Replaces the target when one was chosen explicitly
    pub fn with_target(mut self, target: Option<Target>) -> Config {
        if let Some(target) = target {
            self.target = target;
        }
        self
    }

    /// Source text to parse for this configuration; the `#lang` header is
    /// only dropped for the JavaScript target
    pub fn source_for_target<'a>(&self, contents: &'a str) -> &'a str {
        if self.target == Target::Js && self.js.skip_lang_line {
            strip_lang_line(contents)
        } else {
            contents
        }
    }
}

/// Drops a first line beginning with `#lang` (Racket source header)
pub fn strip_lang_line(source: &str) -> &str {
    if !source.starts_with("#lang") {
        return source;
    }
    match source.find('\n') {
        Some(newline) => &source[newline + 1..],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.target, Target::Sexpr);
        assert!(config.js.log_expressions);
        assert_eq!(config.html.body_separator, " ");
    }

    #[test]
    fn test_partial_json() {
        let config = Config::from_json(r#"{"target": "js", "js": {"log_expressions": false}}"#)
            .unwrap();
        assert_eq!(config.target, Target::Js);
        assert!(!config.js.log_expressions);
        assert_eq!(config.js.statement_separator, "\n");
        assert_eq!(config.html, HtmlOptions::default());
    }

    #[test]
    fn test_unknown_target_rejected() {
        assert!(Config::from_json(r#"{"target": "xml"}"#).is_err());
    }

    #[test]
    fn test_explicit_target_overrides_file() {
        let config = Config::from_json(r#"{"target": "html"}"#).unwrap();
        assert_eq!(config.clone().with_target(Some(Target::Js)).target, Target::Js);
        assert_eq!(config.with_target(None).target, Target::Html);
    }

    #[test]
    fn test_lang_line_dropped_only_for_js() {
        let contents = "#lang racket\n(define x 5)";

        let js = Config::default().with_target(Some(Target::Js));
        assert_eq!(js.source_for_target(contents), "(define x 5)");

        let sexpr = Config::default();
        assert_eq!(sexpr.source_for_target(contents), contents);

        let mut keep = Config::default().with_target(Some(Target::Js));
        keep.js.skip_lang_line = false;
        assert_eq!(keep.source_for_target(contents), contents);
    }

    #[test]
    fn test_target_value_names() {
        let names: Vec<String> = Target::value_variants()
            .iter()
            .filter_map(|t| t.to_possible_value())
            .map(|v| v.get_name().to_string())
            .collect();
        assert_eq!(names, vec!["sexpr", "html", "js", "json"]);
    }

    #[test]
    fn test_strip_lang_line() {
        assert_eq!(strip_lang_line("#lang racket\n(define x 5)"), "(define x 5)");
        assert_eq!(strip_lang_line("(define x 5)"), "(define x 5)");
        assert_eq!(strip_lang_line("#lang racket"), "");
    }
}
