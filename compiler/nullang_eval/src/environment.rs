//! Lexically scoped variable storage.
//!
//! Scopes are reference counted and interiorly mutable so that a closure can
//! keep the scope it was created in alive, and observe later assignments to
//! it, after the block or call that created the scope has finished.

use std::cell::RefCell;
use std::mem;
use std::rc::Rc;

use nullang_ir::Name;
use rustc_hash::FxHashMap;

use crate::teardown::Teardown;
use crate::{FunctionValue, Value};

/// Single-threaded shared handle.
#[derive(Debug)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    #[inline]
    pub fn borrow(&self) -> std::cell::Ref<'_, T> {
        self.0.borrow()
    }

    #[inline]
    pub fn borrow_mut(&self) -> std::cell::RefMut<'_, T> {
        self.0.borrow_mut()
    }

    #[cfg(test)]
    pub(crate) fn downgrade(&self) -> std::rc::Weak<RefCell<T>> {
        Rc::downgrade(&self.0)
    }

    /// True when both handles refer to the same scope.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for LocalScope<T> {
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

/// Why a binding operation failed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BindingError {
    /// `define` found the name already bound in the same scope.
    AlreadyDefined,
    /// `assign` walked the whole chain without finding the name.
    Undefined,
}

/// What an emptied scope gave up: its values and its parent link.
pub(crate) type ScopeContents = (Vec<Value>, Option<LocalScope<Scope>>);

impl LocalScope<Scope> {
    /// Empty the scope when nothing outside it can reach it any more.
    ///
    /// `held` counts handles the caller is about to drop. Closures bound in
    /// the scope that capture it, and that only the scope holds, count as
    /// internal; `dropping` is a handle to one of them being dropped. The
    /// scope is unreachable when those account for every strong reference.
    pub(crate) fn take_if_unreachable(
        &self,
        held: usize,
        dropping: Option<&Rc<FunctionValue>>,
    ) -> Option<ScopeContents> {
        let outside = Rc::strong_count(&self.0).checked_sub(held)?;
        let mut scope = self.0.try_borrow_mut().ok()?;
        if outside > scope.closures {
            return None;
        }
        let internal = scope
            .bindings
            .values()
            .filter(|value| self.is_own_closure(value, dropping))
            .count();
        (internal == outside).then(|| scope.take_contents())
    }

    fn is_own_closure(&self, value: &Value, dropping: Option<&Rc<FunctionValue>>) -> bool {
        let Value::Function(func) = value else {
            return false;
        };
        let released = usize::from(dropping.is_some_and(|d| Rc::ptr_eq(d, func)));
        func.captured().ptr_eq(self) && Rc::strong_count(func) - released == 1
    }
}

/// One level of the scope chain.
#[derive(Debug, Default)]
pub struct Scope {
    bindings: FxHashMap<Name, Value>,
    parent: Option<LocalScope<Scope>>,
    /// Bindings currently holding a function.
    closures: usize,
}

impl Scope {
    pub fn new() -> Self {
        Scope::default()
    }

    pub fn with_parent(parent: LocalScope<Scope>) -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent: Some(parent),
            closures: 0,
        }
    }

    pub fn parent(&self) -> Option<&LocalScope<Scope>> {
        self.parent.as_ref()
    }

    /// Bound in this scope, ignoring parents.
    pub fn contains(&self, name: Name) -> bool {
        self.bindings.contains_key(&name)
    }

    pub fn define(&mut self, name: Name, value: Value) -> Result<(), BindingError> {
        match self.bindings.entry(name) {
            std::collections::hash_map::Entry::Occupied(_) => Err(BindingError::AlreadyDefined),
            std::collections::hash_map::Entry::Vacant(slot) => {
                self.closures += usize::from(value.is_function());
                slot.insert(value);
                Ok(())
            }
        }
    }

    pub fn lookup(&self, name: Name) -> Option<Value> {
        if let Some(value) = self.bindings.get(&name) {
            return Some(value.clone());
        }
        self.parent
            .as_ref()
            .and_then(|parent| parent.borrow().lookup(name))
    }

    /// Overwrite the nearest binding of `name`, returning the old value.
    pub fn assign(&mut self, name: Name, value: Value) -> Result<Value, BindingError> {
        if let Some(slot) = self.bindings.get_mut(&name) {
            self.closures = self.closures + usize::from(value.is_function())
                - usize::from(slot.is_function());
            return Ok(mem::replace(slot, value));
        }
        match &self.parent {
            Some(parent) => parent.borrow_mut().assign(name, value),
            None => Err(BindingError::Undefined),
        }
    }

    /// Remove every binding, handing the values back.
    pub fn take_bindings(&mut self) -> Vec<Value> {
        self.closures = 0;
        self.bindings.drain().map(|(_, value)| value).collect()
    }

    fn take_contents(&mut self) -> ScopeContents {
        (self.take_bindings(), self.parent.take())
    }
}

impl Drop for Scope {
    fn drop(&mut self) {
        if self.bindings.is_empty() && self.parent.is_none() {
            return;
        }
        let (bindings, parent) = self.take_contents();
        let mut teardown = Teardown::default();
        teardown.add_values(bindings);
        if let Some(parent) = parent {
            teardown.add_scope(parent);
        }
        teardown.run();
    }
}

/// The scope chain seen by running code.
///
/// `current` is the innermost scope; `saved` holds the scopes that
/// `push_scope` shadowed, innermost last. The global scope is the root of
/// every chain.
#[derive(Debug)]
pub struct Environment {
    current: LocalScope<Scope>,
    saved: Vec<LocalScope<Scope>>,
    global: LocalScope<Scope>,
}

impl Environment {
    /// A fresh environment holding only an empty global scope.
    pub fn new() -> Self {
        let global = LocalScope::new(Scope::new());
        Environment {
            current: global.clone(),
            saved: Vec::new(),
            global,
        }
    }

    /// Environment for a function activation: one parameter scope chained to
    /// the scope the function captured when it was created.
    pub fn for_call(&self, captured: &LocalScope<Scope>) -> Self {
        Environment {
            current: LocalScope::new(Scope::with_parent(captured.clone())),
            saved: Vec::new(),
            global: self.global.clone(),
        }
    }

    pub fn push_scope(&mut self) {
        let child = LocalScope::new(Scope::with_parent(self.current.clone()));
        let parent = mem::replace(&mut self.current, child);
        self.saved.push(parent);
        tracing::debug!(depth = self.saved.len(), "push scope");
    }

    pub fn pop_scope(&mut self) {
        debug_assert!(!self.saved.is_empty(), "pop_scope on the outermost scope");
        if let Some(parent) = self.saved.pop() {
            let child = mem::replace(&mut self.current, parent);
            tracing::debug!(depth = self.saved.len(), "pop scope");
            let mut teardown = Teardown::default();
            teardown.add_scope(child);
            teardown.run();
        }
    }

    /// Number of scopes pushed on top of the base scope.
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    pub fn define(&mut self, name: Name, value: Value) -> Result<(), BindingError> {
        self.current.borrow_mut().define(name, value)
    }

    pub fn lookup(&self, name: Name) -> Option<Value> {
        self.current.borrow().lookup(name)
    }

    pub fn assign(&mut self, name: Name, value: Value) -> Result<(), BindingError> {
        let replaced = self.current.borrow_mut().assign(name, value);
        // The old value may close over a scope on this chain.
        replaced.map(drop)
    }

    /// The innermost scope, for a closure to hold on to.
    pub fn capture(&self) -> LocalScope<Scope> {
        self.current.clone()
    }

    pub fn global(&self) -> &LocalScope<Scope> {
        &self.global
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

// The global scope outlives the environment; its owner empties it.
impl Drop for Environment {
    fn drop(&mut self) {
        let mut teardown = Teardown::default();
        teardown.release_scope(&self.current, 1, None);
        for scope in self.saved.drain(..) {
            teardown.add_scope(scope);
        }
        teardown.run();
    }
}
