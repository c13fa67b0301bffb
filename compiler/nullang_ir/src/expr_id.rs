//! Arena handles and ranges.
//!
//! The AST never boxes children. Nodes refer to each other through `u32`
//! handles into an [`ExprArena`](crate::ExprArena), and variable-length
//! children (call arguments, block bodies, parameters) are contiguous
//! ranges in the arena's side tables.

use std::fmt;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash)]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            #[inline]
            pub const fn new(index: u32) -> Self {
                $name(index)
            }

            #[inline]
            pub const fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.0)
            }
        }
    };
}

macro_rules! define_range {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
        pub struct $name {
            pub start: u32,
            pub len: u32,
        }

        impl $name {
            pub const EMPTY: $name = $name { start: 0, len: 0 };

            #[inline]
            pub const fn new(start: u32, len: u32) -> Self {
                $name { start, len }
            }

            #[inline]
            pub const fn len(&self) -> usize {
                self.len as usize
            }

            #[inline]
            pub const fn is_empty(&self) -> bool {
                self.len == 0
            }

            #[inline]
            pub fn to_range(self) -> std::ops::Range<usize> {
                let start = self.start as usize;
                start..start + self.len as usize
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(
                    f,
                    concat!(stringify!($name), "({}..{})"),
                    self.start,
                    u64::from(self.start) + u64::from(self.len)
                )
            }
        }
    };
}

define_id!(
    /// Handle to an [`Expr`](crate::ast::Expr).
    ExprId
);
define_id!(
    /// Handle to a [`Stmt`](crate::ast::Stmt).
    StmtId
);
define_id!(
    /// Handle to a [`FunctionDef`](crate::ast::FunctionDef).
    FunctionId
);

define_range!(
    /// Contiguous run of expression handles, e.g. call arguments.
    ExprRange
);
define_range!(
    /// Contiguous run of statement handles, e.g. a block body.
    StmtRange
);
define_range!(
    /// Contiguous run of parameter names.
    ParamRange
);

crate::static_assert_size!(ExprId, 4);
crate::static_assert_size!(ExprRange, 8);
