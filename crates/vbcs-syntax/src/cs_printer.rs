//! C# expression renderer
//!
//! Walks a `CsExpr` tree and writes C# source text. Parentheses are only
//! written where the tree has `Parenthesized` nodes; the passes that build the
//! tree are responsible for inserting them.

use crate::cs_ir::{CsExpr, CsExprKind};
use std::fmt;

/// Renders IR nodes to C# text.
#[derive(Default)]
pub struct CsPrinter {
    output: String,
}

impl CsPrinter {
    pub fn new() -> Self {
        CsPrinter {
            output: String::new(),
        }
    }

    /// Render a single expression.
    pub fn emit_to_string(expr: &CsExpr) -> String {
        let mut printer = CsPrinter::new();
        printer.emit_node(expr);
        printer.finish()
    }

    pub fn finish(self) -> String {
        self.output
    }

    fn write(&mut self, text: &str) {
        self.output.push_str(text);
    }

    pub fn emit_node(&mut self, expr: &CsExpr) {
        match expr.kind() {
            CsExprKind::NumericLiteral(text) => self.write(text),
            CsExprKind::StringLiteral(text) => self.emit_string_literal(text),
            CsExprKind::BooleanLiteral(value) => self.write(if *value { "true" } else { "false" }),
            CsExprKind::NullLiteral => self.write("null"),
            CsExprKind::Identifier(name) => self.write(name),
            CsExprKind::MemberAccess { object, member } => {
                self.emit_node(object);
                self.write(".");
                self.write(member);
            }
            CsExprKind::Invocation { callee, arguments } => {
                self.emit_node(callee);
                self.write("(");
                for (i, argument) in arguments.iter().enumerate() {
                    if i > 0 {
                        self.write(", ");
                    }
                    self.emit_node(argument);
                }
                self.write(")");
            }
            CsExprKind::Binary {
                left,
                operator,
                right,
            } => {
                self.emit_node(left);
                self.write(" ");
                self.write(operator.text());
                self.write(" ");
                self.emit_node(right);
            }
            CsExprKind::LogicalAnd { left, right } => {
                self.emit_node(left);
                self.write(" && ");
                self.emit_node(right);
            }
            CsExprKind::LogicalOr { left, right } => {
                self.emit_node(left);
                self.write(" || ");
                self.emit_node(right);
            }
            CsExprKind::PrefixUnary { operator, operand } => {
                self.write(operator.text());
                self.emit_node(operand);
            }
            CsExprKind::Cast { ty, expression } => {
                self.write("(");
                self.write(&ty.to_string());
                self.write(")");
                self.emit_node(expression);
            }
            CsExprKind::Conditional {
                condition,
                when_true,
                when_false,
            } => {
                self.emit_node(condition);
                self.write(" ? ");
                self.emit_node(when_true);
                self.write(" : ");
                self.emit_node(when_false);
            }
            CsExprKind::Parenthesized(inner) => {
                self.write("(");
                self.emit_node(inner);
                self.write(")");
            }
        }
    }

    fn emit_string_literal(&mut self, text: &str) {
        self.output.push('"');
        for ch in text.chars() {
            match ch {
                '"' => self.write("\\\""),
                '\\' => self.write("\\\\"),
                '\n' => self.write("\\n"),
                '\r' => self.write("\\r"),
                '\t' => self.write("\\t"),
                '\0' => self.write("\\0"),
                _ => self.output.push(ch),
            }
        }
        self.output.push('"');
    }
}

impl fmt::Display for CsExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&CsPrinter::emit_to_string(self))
    }
}

#[cfg(test)]
#[path = "../tests/cs_printer.rs"]
mod tests;
