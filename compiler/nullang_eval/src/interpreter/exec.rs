//! Statement execution.

use nullang_ir::ast::StmtKind;
use nullang_ir::{ExprId, Name, Span, StmtId, StmtRange};
use nullang_stack::ensure_sufficient_stack;

use super::{Flow, Interpreter};
use crate::environment::BindingError;
use crate::errors::{redeclaration, undefined_variable, EvalError, EvalResult};
use crate::Value;

impl Interpreter {
    /// Run statements in order in the current scope.
    ///
    /// The completion value is the last statement's; a signal stops the
    /// sequence and is handed to the caller.
    pub(crate) fn exec_stmts(&mut self, range: StmtRange) -> EvalResult<Flow> {
        let arena = self.arena.clone();
        let mut last = Value::Null;
        for &id in arena.get_stmt_list(range) {
            match self.exec_stmt(id)? {
                Flow::Normal(value) => last = value,
                signal => return Ok(signal),
            }
        }
        Ok(Flow::Normal(last))
    }

    pub(crate) fn exec_stmt(&mut self, id: StmtId) -> EvalResult<Flow> {
        ensure_sufficient_stack(|| self.exec_stmt_inner(id))
    }

    fn exec_stmt_inner(&mut self, id: StmtId) -> EvalResult<Flow> {
        let stmt = *self.arena.get_stmt(id);
        match stmt.kind {
            StmtKind::Expr(expr) => Ok(Flow::Normal(self.eval_expr(expr)?)),
            StmtKind::VarDecl { name, init } => {
                let value = match init {
                    Some(init) => self.eval_expr(init)?,
                    None => Value::Null,
                };
                self.declare(name, value, stmt.span)?;
                Ok(Flow::Normal(Value::Null))
            }
            StmtKind::Function(function) => {
                let value = self.make_function(function);
                if let Some(name) = self.arena.get_function(function).name {
                    self.declare(name, value, stmt.span)?;
                }
                Ok(Flow::Normal(Value::Null))
            }
            StmtKind::Block(body) => self.with_env_scope(|this| this.exec_stmts(body)),
            StmtKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                if self.eval_expr(cond)?.is_truthy() {
                    self.exec_stmt(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.exec_stmt(else_branch)
                } else {
                    Ok(Flow::Normal(Value::Null))
                }
            }
            StmtKind::While { cond, body } => self.exec_while(cond, body),
            StmtKind::Return(value) => {
                let value = match value {
                    Some(value) => self.eval_expr(value)?,
                    None => Value::Null,
                };
                Ok(Flow::Return(value, stmt.span))
            }
            StmtKind::Break => Ok(Flow::Break(stmt.span)),
            StmtKind::Continue => Ok(Flow::Continue(stmt.span)),
        }
    }

    fn exec_while(&mut self, cond: ExprId, body: StmtId) -> EvalResult<Flow> {
        while self.eval_expr(cond)?.is_truthy() {
            match self.exec_stmt(body)? {
                Flow::Break(_) => break,
                Flow::Normal(_) | Flow::Continue(_) => {}
                ret @ Flow::Return(..) => return Ok(ret),
            }
        }
        Ok(Flow::Normal(Value::Null))
    }

    /// Bind `name` in the innermost scope.
    pub(crate) fn declare(&mut self, name: Name, value: Value, span: Span) -> EvalResult<()> {
        self.env
            .define(name, value)
            .map_err(|err| self.binding_error(err, name, span))
    }

    #[cold]
    pub(crate) fn binding_error(&self, err: BindingError, name: Name, span: Span) -> EvalError {
        let name = self.interner.lookup(name);
        match err {
            BindingError::AlreadyDefined => redeclaration(name, span),
            BindingError::Undefined => undefined_variable(name, span),
        }
    }
}
