//! # JavaScript Subset Transpiler
//!
//! Recognises three special forms and a small operator table; every other
//! list becomes a call.
//!
//! ```text
//! (define x 5)                  → const x = 5;
//! (if (<= x 5) x y)             → (x<=5) ? (x) : (y)
//! (define f (lambda (x) (* x 2)))  → const f = (x) => x*2;
//! (f 10)                        → f(10)
//! ```

use super::Backend;
use crate::config::JsOptions;
use crate::error::{Result, SyntaxError};
use crate::parser::Node;
use crate::printer::format_number;
use std::collections::HashMap;

lazy_static::lazy_static! {
    /// Source operator → JavaScript operator
    static ref BINARY_OPS: HashMap<&'static str, &'static str> = {
        let mut ops = HashMap::new();
        ops.insert("eq?", "===");
        ops.insert("<=", "<=");
        ops.insert(">=", ">=");
        ops.insert("+", "+");
        ops.insert("-", "-");
        ops.insert("*", "*");
        ops.insert("/", "/");
        ops
    };
}

/// JavaScript backend
#[derive(Debug, Clone, Default)]
pub struct JsBackend {
    options: JsOptions,
}

impl JsBackend {
    /// Creates a JavaScript backend with the given options
    pub fn new(options: JsOptions) -> Self {
        Self { options }
    }

    /// Renders a top-level form, logging bare expressions if configured
    pub fn render_statement(&self, form: &Node) -> Result<String> {
        let out = render_expr(form)?;
        if self.options.log_expressions && !out.starts_with("const") {
            Ok(format!("console.log({})", out))
        } else {
            Ok(out)
        }
    }
}

impl Backend for JsBackend {
    fn render_form(&self, form: &Node) -> Result<String> {
        self.render_statement(form)
    }

    fn form_separator(&self) -> &str {
        &self.options.statement_separator
    }
}

/// Renders a node as a JavaScript expression (or `const` declaration)
pub fn render_expr(node: &Node) -> Result<String> {
    match node {
        Node::Number(value) => Ok(format_number(*value)),
        Node::Atom(name) => Ok(name.clone()),
        Node::String(text) => string_literal(text),
        Node::List(children) => render_list(children),
    }
}

fn render_list(children: &[Node]) -> Result<String> {
    let (head, args) = match children.split_first() {
        Some(split) => split,
        None => return Ok("null".to_string()),
    };

    if let Node::Atom(name) = head {
        match name.as_str() {
            "define" => return render_define(args),
            "if" => return render_if(args),
            "lambda" => return render_lambda(args),
            op => {
                if let Some(js_op) = BINARY_OPS.get(op) {
                    return render_binary(op, js_op, args);
                }
            }
        }
    }

    render_call(head, args)
}

fn render_define(args: &[Node]) -> Result<String> {
    if args.len() != 2 {
        return Err(SyntaxError::backend(format!(
            "expected two clauses for define, got {}",
            args.len()
        )));
    }
    let name = args[0]
        .as_atom()
        .ok_or_else(|| SyntaxError::backend("cannot assign to non-identifier"))?;

    Ok(format!("const {} = {};", name, render_expr(&args[1])?))
}

fn render_if(args: &[Node]) -> Result<String> {
    if args.len() != 3 {
        return Err(SyntaxError::backend(format!(
            "expected three clauses for if, got {}",
            args.len()
        )));
    }

    Ok(format!(
        "({}) ? ({}) : ({})",
        render_expr(&args[0])?,
        render_expr(&args[1])?,
        render_expr(&args[2])?
    ))
}

fn render_lambda(args: &[Node]) -> Result<String> {
    if args.len() != 2 {
        return Err(SyntaxError::backend(format!(
            "expected two clauses for lambda, got {}",
            args.len()
        )));
    }
    let params = args[0]
        .as_list()
        .ok_or_else(|| SyntaxError::backend("expected parameter list for lambda"))?;
    let params = params
        .iter()
        .map(|param| {
            param.as_atom().ok_or_else(|| {
                SyntaxError::backend("parameter list must only contain identifiers")
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(format!("({}) => {}", params.join(","), render_expr(&args[1])?))
}

fn render_binary(op: &str, js_op: &str, args: &[Node]) -> Result<String> {
    if args.len() < 2 {
        return Err(SyntaxError::backend(format!(
            "expected at least two operands for {}, got {}",
            op,
            args.len()
        )));
    }

    let operands = args
        .iter()
        .map(render_operand)
        .collect::<Result<Vec<_>>>()?;
    Ok(operands.join(js_op))
}

/// Operators, conditionals and lambdas bind loosely; parenthesise them
/// when nested as operands so `(* (+ 1 2) 3)` stays `(1+2)*3`. Negative
/// numbers are wrapped too, so `(- x -1)` does not become `x--1`.
fn render_operand(node: &Node) -> Result<String> {
    let out = render_expr(node)?;
    if let Node::Number(value) = node {
        if value.is_sign_negative() {
            return Ok(format!("({})", out));
        }
    }
    match node.head_atom() {
        Some(head) if head == "if" || head == "lambda" || BINARY_OPS.contains_key(head) => {
            Ok(format!("({})", out))
        }
        _ => Ok(out),
    }
}

fn render_call(head: &Node, args: &[Node]) -> Result<String> {
    let callee = match head {
        Node::List(_) => format!("({})", render_expr(head)?),
        scalar => render_expr(scalar)?,
    };
    let args = args
        .iter()
        .map(render_expr)
        .collect::<Result<Vec<_>>>()?;

    Ok(format!("{}({})", callee, args.join(",")))
}

/// JSON string literals are valid JavaScript string literals
fn string_literal(text: &str) -> Result<String> {
    serde_json::to_string(text)
        .map_err(|e| SyntaxError::backend(format!("cannot encode string literal: {}", e)))
}
