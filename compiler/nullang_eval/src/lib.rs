//! Nullang evaluator.
//!
//! A tree-walking interpreter over the arena AST produced by
//! `nullang_parse`. The pieces:
//!
//! - [`Environment`]: lexical scope chains shared through `Rc<RefCell<_>>`
//! - [`Value`]: the closed set of runtime values
//! - [`Interpreter`]: statement execution, expression evaluation, calls
//! - [`Builtin`]: `print`, `len`, `push`, `type`
//! - [`EvalError`]: runtime failures, convertible to diagnostics
//!
//! [`Interpreter::run_source`] drives the whole pipeline from source text.

mod builtins;
mod diagnostics;
mod environment;
mod errors;
mod interpreter;
mod operators;
mod pipeline;
mod print_handler;
mod teardown;
mod value;

pub use builtins::{Builtin, BuiltinRegistry};
pub use diagnostics::{CallFrame, CallStack, DEFAULT_MAX_CALL_DEPTH};
pub use environment::{BindingError, Environment, LocalScope, Scope};
pub use errors::{BacktraceFrame, EvalBacktrace, EvalError, EvalErrorKind, EvalResult};
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use operators::{evaluate_binary, evaluate_unary};
pub use pipeline::Error;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use value::{FunctionValue, Value};
