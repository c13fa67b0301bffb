//! Runtime values.

use std::fmt;
use std::rc::Rc;

use nullang_ir::ast::FunctionDef;
use nullang_ir::{format_number, FunctionId, SharedArena};
use nullang_stack::ensure_sufficient_stack;

use crate::builtins::Builtin;
use crate::environment::{LocalScope, Scope};
use crate::teardown::Teardown;

/// A Nullang value.
///
/// Strings and lists are immutable and shared; cloning a value never copies
/// its contents.
#[derive(Clone, Debug)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    Str(Rc<str>),
    List(Rc<[Value]>),
    Function(Rc<FunctionValue>),
    Builtin(Builtin),
}

impl Value {
    pub fn string(s: &str) -> Self {
        Value::Str(Rc::from(s))
    }

    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Rc::from(items))
    }

    /// Kind name as reported by `type()` and in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::List(_) => "list",
            Value::Function(_) | Value::Builtin(_) => "function",
        }
    }

    /// `null` and `false` are falsy; everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Null | Value::Bool(false))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub(crate) fn is_function(&self) -> bool {
        matches!(self, Value::Function(_))
    }

    /// Owns other values or scopes, so freeing it may recurse.
    pub(crate) fn is_compound(&self) -> bool {
        matches!(self, Value::List(_) | Value::Function(_))
    }

    /// The form the REPL echoes: strings quoted and escaped.
    pub fn repr(&self) -> String {
        Repr(self).to_string()
    }
}

/// Values of different kinds are never equal. Functions compare by identity.
impl PartialEq for Value {
    #[allow(clippy::float_cmp, reason = "language equality is IEEE equality")]
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => ensure_sufficient_stack(|| a == b),
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
            (Value::Builtin(a), Value::Builtin(b)) => a == b,
            _ => false,
        }
    }
}

// Nesting depth is unbounded; free children from a worklist.
impl Drop for Value {
    fn drop(&mut self) {
        if self.is_compound() {
            let mut teardown = Teardown::default();
            teardown.release_value(self);
            teardown.run();
        }
    }
}

/// Display form, used by `print`: strings appear raw.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            other => Repr(other).fmt(f),
        }
    }
}

struct Repr<'a>(&'a Value);

impl fmt::Display for Repr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => f.write_str(&format_number(*n)),
            Value::Str(s) => write_quoted(f, s),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    ensure_sufficient_stack(|| Repr(item).fmt(f))?;
                }
                f.write_str("]")
            }
            Value::Function(func) => match func.name() {
                Some(name) => write!(f, "<fn {name}>"),
                None => f.write_str("<fn>"),
            },
            Value::Builtin(builtin) => write!(f, "<builtin {}>", builtin.name()),
        }
    }
}

/// Quote `s` using the escapes the lexer accepts.
fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_str("\"")?;
    for c in s.chars() {
        match c {
            '\n' => f.write_str("\\n")?,
            '\t' => f.write_str("\\t")?,
            '\r' => f.write_str("\\r")?,
            '\0' => f.write_str("\\0")?,
            '\\' => f.write_str("\\\\")?,
            '"' => f.write_str("\\\"")?,
            c => write!(f, "{c}")?,
        }
    }
    f.write_str("\"")
}

/// A closure: a function definition plus the scope it was created in.
pub struct FunctionValue {
    name: Option<&'static str>,
    def: FunctionId,
    arena: SharedArena,
    captured: LocalScope<Scope>,
}

impl FunctionValue {
    pub fn new(
        name: Option<&'static str>,
        def: FunctionId,
        arena: SharedArena,
        captured: LocalScope<Scope>,
    ) -> Self {
        FunctionValue {
            name,
            def,
            arena,
            captured,
        }
    }

    pub fn name(&self) -> Option<&'static str> {
        self.name
    }

    pub fn definition(&self) -> &FunctionDef {
        self.arena.get_function(self.def)
    }

    /// The arena holding the body.
    pub fn arena(&self) -> &SharedArena {
        &self.arena
    }

    pub fn captured(&self) -> &LocalScope<Scope> {
        &self.captured
    }
}

// The captured scope may contain this very function.
impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionValue")
            .field("name", &self.name)
            .field("def", &self.def)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;
