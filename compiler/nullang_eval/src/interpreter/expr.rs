//! Expression evaluation.

use nullang_ir::ast::{BinaryOp, ExprKind};
use nullang_ir::{ExprId, Name, Span};
use nullang_stack::ensure_sufficient_stack;

use super::Interpreter;
use crate::errors::{index_out_of_bounds, type_mismatch, undefined_variable, EvalError, EvalResult};
use crate::operators::{evaluate_binary, evaluate_unary};
use crate::Value;

impl Interpreter {
    pub(crate) fn eval_expr(&mut self, id: ExprId) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_expr_inner(id))
    }

    fn eval_expr_inner(&mut self, id: ExprId) -> EvalResult {
        let expr = *self.arena.get_expr(id);
        match expr.kind {
            ExprKind::Number(n) => Ok(Value::Number(n)),
            ExprKind::Str(s) => Ok(Value::string(self.interner.lookup(s))),
            ExprKind::Bool(b) => Ok(Value::Bool(b)),
            ExprKind::Null => Ok(Value::Null),
            ExprKind::Ident(name) => self.lookup(name, expr.span),
            ExprKind::List(items) => {
                let arena = self.arena.clone();
                let items = arena
                    .get_expr_list(items)
                    .iter()
                    .map(|&item| self.eval_expr(item))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Value::list(items))
            }
            ExprKind::Index { target, index } => {
                let target = self.eval_expr(target)?;
                let index = self.eval_expr(index)?;
                index_value(&target, &index, expr.span)
            }
            ExprKind::Unary { op, operand } => {
                let operand = self.eval_expr(operand)?;
                evaluate_unary(op, &operand, expr.span)
            }
            ExprKind::Binary { op, left, right } => self.eval_binary(op, left, right, expr.span),
            ExprKind::Assign { target, value } => {
                let value = self.eval_expr(value)?;
                self.env
                    .assign(target, value.clone())
                    .map_err(|err| self.binding_error(err, target, expr.span))?;
                Ok(value)
            }
            ExprKind::Call { func, args } => {
                let callee = self.eval_expr(func)?;
                let arena = self.arena.clone();
                let args = arena
                    .get_expr_list(args)
                    .iter()
                    .map(|&arg| self.eval_expr(arg))
                    .collect::<Result<Vec<_>, _>>()?;
                self.eval_call(&callee, args, expr.span)
            }
            ExprKind::Function(function) => Ok(self.make_function(function)),
        }
    }

    fn eval_binary(&mut self, op: BinaryOp, left: ExprId, right: ExprId, span: Span) -> EvalResult {
        let left = self.eval_expr(left)?;
        match op {
            BinaryOp::And if !left.is_truthy() => Ok(Value::Bool(false)),
            BinaryOp::Or if left.is_truthy() => Ok(Value::Bool(true)),
            BinaryOp::And | BinaryOp::Or => Ok(Value::Bool(self.eval_expr(right)?.is_truthy())),
            _ => {
                let right = self.eval_expr(right)?;
                evaluate_binary(op, &left, &right, span)
            }
        }
    }

    /// Scope chain first, then builtins.
    fn lookup(&self, name: Name, span: Span) -> EvalResult {
        if let Some(value) = self.env.lookup(name) {
            return Ok(value);
        }
        if let Some(builtin) = self.builtins.get(name) {
            return Ok(Value::Builtin(builtin));
        }
        Err(undefined_variable(self.interner.lookup(name), span))
    }
}

fn index_value(target: &Value, index: &Value, span: Span) -> EvalResult {
    match target {
        Value::List(items) => {
            let position = element_position(index, items.len(), span)?;
            Ok(items[position].clone())
        }
        Value::Str(s) => {
            let len = s.chars().count();
            let position = element_position(index, len, span)?;
            let ch = s.chars().nth(position).unwrap_or_default();
            Ok(Value::string(ch.encode_utf8(&mut [0; 4])))
        }
        other => Err(type_mismatch(
            "indexing",
            "a list or string",
            other.type_name(),
            span,
        )),
    }
}

/// Validate `index` as a position in a sequence of `len` elements.
#[expect(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "index is checked to be an integer in 0..len first"
)]
fn element_position(index: &Value, len: usize, span: Span) -> Result<usize, EvalError> {
    let &Value::Number(n) = index else {
        return Err(type_mismatch("index", "a number", index.type_name(), span));
    };
    if n.fract() != 0.0 || n < 0.0 || n >= len as f64 {
        return Err(index_out_of_bounds(n, len, span));
    }
    Ok(n as usize)
}
