//! Iterative release of values and scopes.
//!
//! The default drop glue for `Value` recurses once per nesting level, so a
//! list nested a few hundred thousand deep overflows the host stack when
//! freed. Scope chains recurse the same way through `parent`. The `Drop`
//! impls on [`Value`], [`Scope`](crate::Scope) and
//! [`Environment`](crate::Environment) hand their contents to a
//! [`Teardown`] instead, which frees them from a worklist.
//!
//! The same pass collects closure cycles. A scope that binds a closure over
//! itself keeps itself alive through that closure. When every remaining
//! strong reference to a scope comes from such closures, and nothing else
//! holds those closures, the scope is emptied and the cycle falls apart.

use std::mem;
use std::rc::Rc;

use crate::environment::{LocalScope, Scope};
use crate::{FunctionValue, Value};

#[derive(Default)]
pub(crate) struct Teardown {
    values: Vec<Value>,
    scopes: Vec<LocalScope<Scope>>,
}

impl Teardown {
    /// Move out what `value` owns exclusively, leaving a shallow shell for
    /// the caller to drop.
    pub(crate) fn release_value(&mut self, value: &mut Value) {
        match value {
            Value::List(items) => {
                if let Some(items) = Rc::get_mut(items) {
                    for item in items.iter_mut().filter(|item| item.is_compound()) {
                        self.values.push(mem::replace(item, Value::Null));
                    }
                }
            }
            Value::Function(func) => {
                // A unique closure takes its captured handle with it.
                let held = usize::from(Rc::strong_count(func) == 1);
                self.release_scope(func.captured(), held, Some(func));
            }
            _ => {}
        }
    }

    /// Empty `scope` if `held` handles about to go away, plus closures the
    /// scope binds over itself, are all that keep it alive.
    pub(crate) fn release_scope(
        &mut self,
        scope: &LocalScope<Scope>,
        held: usize,
        dropping: Option<&Rc<FunctionValue>>,
    ) {
        if let Some((bindings, parent)) = scope.take_if_unreachable(held, dropping) {
            self.add_values(bindings);
            self.scopes.extend(parent);
        }
    }

    pub(crate) fn add_values(&mut self, values: impl IntoIterator<Item = Value>) {
        self.values
            .extend(values.into_iter().filter(Value::is_compound));
    }

    pub(crate) fn add_scope(&mut self, scope: LocalScope<Scope>) {
        self.scopes.push(scope);
    }

    pub(crate) fn run(mut self) {
        loop {
            if let Some(mut value) = self.values.pop() {
                self.release_value(&mut value);
            } else if let Some(scope) = self.scopes.pop() {
                self.release_scope(&scope, 1, None);
            } else {
                break;
            }
        }
    }
}
