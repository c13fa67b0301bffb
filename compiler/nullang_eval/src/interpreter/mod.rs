//! Tree-walking interpreter.
//!
//! One [`Interpreter`] is one session: its global scope persists across
//! calls to [`Interpreter::run`], so a REPL feeds every input unit to the
//! same instance. Statements evaluate to a [`Flow`]; expressions to a
//! [`Value`].
//!
//! # Modules
//!
//! - `exec`: statements and control flow
//! - `expr`: expressions and indexing
//! - `function_call`: closures and calls
//! - `scope_guard`: block scopes
//! - `builder`: [`InterpreterBuilder`]

mod builder;
mod exec;
mod expr;
mod function_call;
mod scope_guard;

use nullang_ir::{ExprArena, SharedArena, SharedInterner, Span};
use nullang_parse::ParseOutput;

pub use builder::InterpreterBuilder;

use crate::builtins::BuiltinRegistry;
use crate::diagnostics::CallStack;
use crate::errors::{control_flow_outside, EvalResult};
use crate::{Environment, SharedPrintHandler, Value};

/// How a statement finished.
///
/// `Return`, `Break` and `Continue` are signals, not errors. They carry the
/// span of the statement that raised them so that an escape from its valid
/// context can be reported where it happened.
#[derive(Clone, Debug)]
pub(crate) enum Flow {
    /// Completed normally with a completion value.
    Normal(Value),
    Return(Value, Span),
    Break(Span),
    Continue(Span),
}

pub struct Interpreter {
    interner: SharedInterner,
    /// The running code's scope chain. Swapped out for the duration of
    /// each function call.
    env: Environment,
    /// Arena holding the code being executed. Swapped with `env`.
    arena: SharedArena,
    builtins: BuiltinRegistry,
    call_stack: CallStack,
    print_handler: SharedPrintHandler,
}

impl Interpreter {
    /// Interpreter with default settings, printing to stdout.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    pub fn interner(&self) -> &SharedInterner {
        &self.interner
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Output captured by a buffer print handler.
    pub fn get_print_output(&self) -> String {
        self.print_handler.get_output()
    }

    /// Evaluate a parsed program in the global scope.
    ///
    /// Returns the completion value of the last top-level statement.
    /// Bindings made before an error stay defined.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn run(&mut self, parsed: ParseOutput) -> EvalResult {
        self.arena = SharedArena::new(parsed.arena);
        let flow = self.exec_stmts(parsed.program.body)?;
        match flow {
            Flow::Normal(value) => Ok(value),
            Flow::Return(_, span) => Err(control_flow_outside("return", "a function", span)),
            Flow::Break(span) => Err(control_flow_outside("break", "a loop", span)),
            Flow::Continue(span) => Err(control_flow_outside("continue", "a loop", span)),
        }
    }

    fn from_parts(
        interner: SharedInterner,
        print_handler: SharedPrintHandler,
        call_stack: CallStack,
    ) -> Self {
        Interpreter {
            builtins: BuiltinRegistry::new(&interner),
            interner,
            env: Environment::new(),
            arena: SharedArena::new(ExprArena::new()),
            call_stack,
            print_handler,
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

// Functions stored in the global scope capture it, forming Rc cycles.
impl Drop for Interpreter {
    fn drop(&mut self) {
        let bindings = self.env.global().borrow_mut().take_bindings();
        drop(bindings);
    }
}
