//! Closure creation and function calls.

use std::mem;
use std::rc::Rc;

use nullang_ir::{FunctionId, SharedArena, Span};

use super::{Flow, Interpreter};
use crate::diagnostics::CallFrame;
use crate::errors::{control_flow_outside, not_callable, wrong_arg_count, EvalResult};
use crate::{Environment, FunctionValue, Value};

impl Interpreter {
    /// Close over the current scope.
    pub(crate) fn make_function(&self, id: FunctionId) -> Value {
        let name = self
            .arena
            .get_function(id)
            .name
            .map(|name| self.interner.lookup(name));
        Value::Function(Rc::new(FunctionValue::new(
            name,
            id,
            self.arena.clone(),
            self.env.capture(),
        )))
    }

    /// Call `callee` with already evaluated arguments.
    pub(crate) fn eval_call(&mut self, callee: &Value, args: Vec<Value>, span: Span) -> EvalResult {
        match callee {
            Value::Function(func) => self.call_function(func, args, span),
            Value::Builtin(builtin) => builtin.call(&args, span, &self.print_handler),
            other => Err(not_callable(other.type_name(), span)),
        }
    }

    #[tracing::instrument(level = "debug", skip_all, fields(name = func.name().unwrap_or("<anonymous>")))]
    fn call_function(&mut self, func: &FunctionValue, args: Vec<Value>, span: Span) -> EvalResult {
        let def = *func.definition();
        if args.len() != def.arity() {
            let callee = match func.name() {
                Some(name) => format!("`{name}`"),
                None => "function".to_string(),
            };
            return Err(wrong_arg_count(&callee, def.arity(), args.len(), span));
        }

        let mut env = self.env.for_call(func.captured());
        for (&param, arg) in func.arena().get_params(def.params).iter().zip(args) {
            env.define(param, arg)
                .map_err(|err| self.binding_error(err, param, def.span))?;
        }

        self.call_stack.push(CallFrame {
            name: func.name().unwrap_or("<anonymous>"),
            call_span: span,
        })?;
        tracing::trace!(depth = self.call_stack.depth(), "enter call");
        let result = self
            .with_frame(env, func.arena().clone(), |this| this.exec_stmts(def.body))
            .map_err(|err| self.call_stack.attach_backtrace(err));
        self.call_stack.pop();

        match result? {
            Flow::Normal(value) | Flow::Return(value, _) => Ok(value),
            Flow::Break(span) => Err(control_flow_outside("break", "a loop", span)),
            Flow::Continue(span) => Err(control_flow_outside("continue", "a loop", span)),
        }
    }

    /// Run `f` with `env` and `arena` as the active frame, then restore the
    /// caller's.
    fn with_frame<T>(
        &mut self,
        env: Environment,
        arena: SharedArena,
        f: impl FnOnce(&mut Interpreter) -> T,
    ) -> T {
        let caller_env = mem::replace(&mut self.env, env);
        let caller_arena = mem::replace(&mut self.arena, arena);
        let result = f(self);
        self.env = caller_env;
        self.arena = caller_arena;
        result
    }
}
