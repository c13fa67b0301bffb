//! `InterpreterBuilder` for configuring an [`Interpreter`].

use nullang_ir::SharedInterner;

use super::Interpreter;
use crate::diagnostics::{CallStack, DEFAULT_MAX_CALL_DEPTH};
use crate::{stdout_handler, SharedPrintHandler};

/// Builder for [`Interpreter`].
///
/// Defaults: a fresh interner, output to stdout, and a call depth limit of
/// [`DEFAULT_MAX_CALL_DEPTH`].
pub struct InterpreterBuilder {
    interner: Option<SharedInterner>,
    print_handler: Option<SharedPrintHandler>,
    max_call_depth: usize,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        InterpreterBuilder {
            interner: None,
            print_handler: None,
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
        }
    }

    /// Share an interner with other pipeline stages.
    #[must_use]
    pub fn interner(mut self, interner: SharedInterner) -> Self {
        self.interner = Some(interner);
        self
    }

    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Maximum number of nested function calls before a call fails.
    #[must_use]
    pub fn max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = depth;
        self
    }

    pub fn build(self) -> Interpreter {
        Interpreter::from_parts(
            self.interner.unwrap_or_default(),
            self.print_handler.unwrap_or_else(stdout_handler),
            CallStack::new(self.max_call_depth),
        )
    }
}

impl Default for InterpreterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
