//! Token to operator mapping, one function per precedence level.

use nullang_ir::ast::{BinaryOp, UnaryOp};
use nullang_ir::TokenKind;

pub(super) fn match_or_op(kind: &TokenKind) -> Option<BinaryOp> {
    matches!(kind, TokenKind::OrOr).then_some(BinaryOp::Or)
}

pub(super) fn match_and_op(kind: &TokenKind) -> Option<BinaryOp> {
    matches!(kind, TokenKind::AndAnd).then_some(BinaryOp::And)
}

pub(super) fn match_equality_op(kind: &TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::EqEq => Some(BinaryOp::Eq),
        TokenKind::NotEq => Some(BinaryOp::NotEq),
        _ => None,
    }
}

pub(super) fn match_comparison_op(kind: &TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Lt => Some(BinaryOp::Lt),
        TokenKind::LtEq => Some(BinaryOp::LtEq),
        TokenKind::Gt => Some(BinaryOp::Gt),
        TokenKind::GtEq => Some(BinaryOp::GtEq),
        _ => None,
    }
}

pub(super) fn match_additive_op(kind: &TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Plus => Some(BinaryOp::Add),
        TokenKind::Minus => Some(BinaryOp::Sub),
        _ => None,
    }
}

pub(super) fn match_multiplicative_op(kind: &TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Star => Some(BinaryOp::Mul),
        TokenKind::Slash => Some(BinaryOp::Div),
        TokenKind::Percent => Some(BinaryOp::Mod),
        _ => None,
    }
}

pub(super) fn match_unary_op(kind: &TokenKind) -> Option<UnaryOp> {
    match kind {
        TokenKind::Minus => Some(UnaryOp::Neg),
        TokenKind::Bang => Some(UnaryOp::Not),
        _ => None,
    }
}
