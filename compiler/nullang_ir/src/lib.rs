//! Nullang IR: the data shared by every stage of the pipeline.
//!
//! - [`Span`] byte ranges and [`Position`] line/column pairs
//! - [`Name`] handles from a [`StringInterner`]
//! - [`Token`], [`TokenKind`] and [`TokenList`] produced by the lexer
//! - the AST in [`ast`], stored flat in an [`ExprArena`]
//!
//! Nothing in the AST is boxed: nodes refer to children by `u32` handles.

/// Compile-time assertion that a type has a specific size.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod arena;
pub mod ast;
mod expr_id;
mod interner;
mod name;
mod number;
mod span;
mod token;

pub use arena::{ExprArena, SharedArena};
pub use expr_id::{ExprId, ExprRange, FunctionId, ParamRange, StmtId, StmtRange};
pub use interner::{InternError, SharedInterner, StringInterner};
pub use name::Name;
pub use number::format_number;
pub use span::Span;
pub use token::{Position, Token, TokenCategory, TokenKind, TokenList};
