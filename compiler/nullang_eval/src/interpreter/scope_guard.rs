//! RAII scope management.
//!
//! [`ScopedInterpreter`] pops the scope it pushed when dropped, so every
//! exit path out of a block, including `?`, restores the environment.

use std::ops::{Deref, DerefMut};

use super::Interpreter;

pub(crate) struct ScopedInterpreter<'a> {
    interpreter: &'a mut Interpreter,
}

impl Drop for ScopedInterpreter<'_> {
    fn drop(&mut self) {
        self.interpreter.env.pop_scope();
    }
}

impl Deref for ScopedInterpreter<'_> {
    type Target = Interpreter;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for ScopedInterpreter<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl Interpreter {
    /// Push a scope that lives as long as the returned guard.
    pub(crate) fn scoped(&mut self) -> ScopedInterpreter<'_> {
        self.env.push_scope();
        ScopedInterpreter { interpreter: self }
    }

    /// Run `f` in a fresh child scope.
    pub(crate) fn with_env_scope<T>(&mut self, f: impl FnOnce(&mut Interpreter) -> T) -> T {
        let mut scoped = self.scoped();
        f(&mut scoped)
    }
}
