//! Operator semantics.
//!
//! Dispatch is a match on the operand kinds. `&&` and `||` are normally
//! short-circuited by the interpreter before reaching here; the arms below
//! only make [`evaluate_binary`] total.

use std::cmp::Ordering;

use nullang_ir::ast::{BinaryOp, UnaryOp};
use nullang_ir::Span;

use crate::errors::{EvalError, EvalErrorKind, EvalResult};
use crate::Value;

/// Apply a binary operator to two evaluated operands.
pub fn evaluate_binary(op: BinaryOp, left: &Value, right: &Value, span: Span) -> EvalResult {
    match op {
        BinaryOp::Eq => return Ok(Value::Bool(left == right)),
        BinaryOp::NotEq => return Ok(Value::Bool(left != right)),
        BinaryOp::And => return Ok(Value::Bool(left.is_truthy() && right.is_truthy())),
        BinaryOp::Or => return Ok(Value::Bool(left.is_truthy() || right.is_truthy())),
        _ => {}
    }

    match (left, right) {
        (Value::Number(a), Value::Number(b)) => eval_number_binary(*a, *b, op, span),
        (Value::Str(a), Value::Str(b)) => match op {
            BinaryOp::Add => {
                let mut joined = String::with_capacity(a.len() + b.len());
                joined.push_str(a);
                joined.push_str(b);
                Ok(Value::string(&joined))
            }
            _ => compare(op, a.cmp(b))
                .map(Value::Bool)
                .ok_or_else(|| invalid_binary_op(op, left, right, span)),
        },
        (Value::List(a), Value::List(b)) if op == BinaryOp::Add => {
            Ok(Value::list(a.iter().chain(b.iter()).cloned().collect()))
        }
        _ => Err(invalid_binary_op(op, left, right, span)),
    }
}

fn eval_number_binary(a: f64, b: f64, op: BinaryOp, span: Span) -> EvalResult {
    let value = match op {
        BinaryOp::Add => a + b,
        BinaryOp::Sub => a - b,
        BinaryOp::Mul => a * b,
        BinaryOp::Div => {
            if b == 0.0 {
                return Err(EvalError::new(EvalErrorKind::DivisionByZero, span));
            }
            a / b
        }
        // Truncated remainder: the result takes the sign of the dividend.
        BinaryOp::Mod => {
            if b == 0.0 {
                return Err(EvalError::new(EvalErrorKind::ModuloByZero, span));
            }
            a % b
        }
        BinaryOp::Lt => return Ok(Value::Bool(a < b)),
        BinaryOp::LtEq => return Ok(Value::Bool(a <= b)),
        BinaryOp::Gt => return Ok(Value::Bool(a > b)),
        BinaryOp::GtEq => return Ok(Value::Bool(a >= b)),
        BinaryOp::Eq | BinaryOp::NotEq | BinaryOp::And | BinaryOp::Or => {
            return Err(invalid_binary_op(
                op,
                &Value::Number(a),
                &Value::Number(b),
                span,
            ))
        }
    };
    Ok(Value::Number(value))
}

/// Ordering comparisons; `None` for non-comparison operators.
fn compare(op: BinaryOp, ordering: Ordering) -> Option<bool> {
    match op {
        BinaryOp::Lt => Some(ordering.is_lt()),
        BinaryOp::LtEq => Some(ordering.is_le()),
        BinaryOp::Gt => Some(ordering.is_gt()),
        BinaryOp::GtEq => Some(ordering.is_ge()),
        _ => None,
    }
}

/// Apply a prefix operator.
pub fn evaluate_unary(op: UnaryOp, operand: &Value, span: Span) -> EvalResult {
    match (op, operand) {
        (UnaryOp::Neg, Value::Number(n)) => Ok(Value::Number(-n)),
        (UnaryOp::Not, value) => Ok(Value::Bool(!value.is_truthy())),
        (UnaryOp::Neg, other) => Err(EvalError::new(
            EvalErrorKind::InvalidUnaryOp {
                op: op.as_symbol(),
                operand: other.type_name(),
            },
            span,
        )),
    }
}

#[cold]
fn invalid_binary_op(op: BinaryOp, left: &Value, right: &Value, span: Span) -> EvalError {
    EvalError::new(
        EvalErrorKind::InvalidBinaryOp {
            op: op.as_symbol(),
            left: left.type_name(),
            right: right.type_name(),
        },
        span,
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "tests use unwrap for brevity")]
mod tests;
