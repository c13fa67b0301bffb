//! S-expression rendering of a parsed program.
//!
//! `1 + 2 * 3` renders as `(+ 1 (* 2 3))`. Top-level statements are placed
//! on separate lines. The output is stable, so tests compare against it.

use std::fmt::Write;

use super::{ExprKind, FunctionDef, Program, StmtKind};
use crate::{format_number, ExprArena, ExprId, StmtId, StringInterner};

/// Render every top-level statement of `program`, one per line.
pub fn dump_program(arena: &ExprArena, program: Program, interner: &StringInterner) -> String {
    let printer = Printer { arena, interner };
    let mut out = String::new();
    for (i, &stmt) in arena.get_stmt_list(program.body).iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        printer.stmt(stmt, &mut out);
    }
    out
}

/// Render a single expression.
pub fn dump_expr(arena: &ExprArena, expr: ExprId, interner: &StringInterner) -> String {
    let mut out = String::new();
    Printer { arena, interner }.expr(expr, &mut out);
    out
}

struct Printer<'a> {
    arena: &'a ExprArena,
    interner: &'a StringInterner,
}

impl Printer<'_> {
    fn expr(&self, id: ExprId, out: &mut String) {
        match self.arena.get_expr(id).kind {
            ExprKind::Number(n) => out.push_str(&format_number(n)),
            ExprKind::Str(s) => {
                let _ = write!(out, "\"{}\"", self.interner.lookup(s).escape_debug());
            }
            ExprKind::Bool(b) => {
                let _ = write!(out, "{b}");
            }
            ExprKind::Null => out.push_str("null"),
            ExprKind::Ident(name) => out.push_str(self.interner.lookup(name)),
            ExprKind::List(items) => {
                out.push_str("(list");
                for &item in self.arena.get_expr_list(items) {
                    out.push(' ');
                    self.expr(item, out);
                }
                out.push(')');
            }
            ExprKind::Index { target, index } => {
                out.push_str("(index ");
                self.expr(target, out);
                out.push(' ');
                self.expr(index, out);
                out.push(')');
            }
            ExprKind::Unary { op, operand } => {
                let _ = write!(out, "({} ", op.as_symbol());
                self.expr(operand, out);
                out.push(')');
            }
            ExprKind::Binary { op, left, right } => {
                let _ = write!(out, "({} ", op.as_symbol());
                self.expr(left, out);
                out.push(' ');
                self.expr(right, out);
                out.push(')');
            }
            ExprKind::Assign { target, value } => {
                let _ = write!(out, "(= {} ", self.interner.lookup(target));
                self.expr(value, out);
                out.push(')');
            }
            ExprKind::Call { func, args } => {
                out.push_str("(call ");
                self.expr(func, out);
                for &arg in self.arena.get_expr_list(args) {
                    out.push(' ');
                    self.expr(arg, out);
                }
                out.push(')');
            }
            ExprKind::Function(func) => self.function(self.arena.get_function(func), out),
        }
    }

    fn function(&self, def: &FunctionDef, out: &mut String) {
        out.push_str("(fn ");
        if let Some(name) = def.name {
            out.push_str(self.interner.lookup(name));
            out.push(' ');
        }
        out.push('(');
        let params: Vec<&str> = self
            .arena
            .get_params(def.params)
            .iter()
            .map(|&p| self.interner.lookup(p))
            .collect();
        out.push_str(&params.join(" "));
        out.push(')');
        for &stmt in self.arena.get_stmt_list(def.body) {
            out.push(' ');
            self.stmt(stmt, out);
        }
        out.push(')');
    }

    fn stmt(&self, id: StmtId, out: &mut String) {
        match self.arena.get_stmt(id).kind {
            StmtKind::Expr(expr) => self.expr(expr, out),
            StmtKind::VarDecl { name, init } => {
                let _ = write!(out, "(let {}", self.interner.lookup(name));
                if let Some(init) = init {
                    out.push(' ');
                    self.expr(init, out);
                }
                out.push(')');
            }
            StmtKind::Function(func) => self.function(self.arena.get_function(func), out),
            StmtKind::Block(body) => {
                out.push_str("(block");
                for &stmt in self.arena.get_stmt_list(body) {
                    out.push(' ');
                    self.stmt(stmt, out);
                }
                out.push(')');
            }
            StmtKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                out.push_str("(if ");
                self.expr(cond, out);
                out.push(' ');
                self.stmt(then_branch, out);
                if let Some(else_branch) = else_branch {
                    out.push(' ');
                    self.stmt(else_branch, out);
                }
                out.push(')');
            }
            StmtKind::While { cond, body } => {
                out.push_str("(while ");
                self.expr(cond, out);
                out.push(' ');
                self.stmt(body, out);
                out.push(')');
            }
            StmtKind::Return(value) => {
                out.push_str("(return");
                if let Some(value) = value {
                    out.push(' ');
                    self.expr(value, out);
                }
                out.push(')');
            }
            StmtKind::Break => out.push_str("(break)"),
            StmtKind::Continue => out.push_str("(continue)"),
        }
    }
}
