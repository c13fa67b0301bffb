//! Builtin functions.
//!
//! Builtins are not bound in any scope. The interpreter consults
//! [`BuiltinRegistry`] only after a name misses the whole scope chain, so a
//! user binding with the same name shadows the builtin.

use nullang_ir::{Name, Span, StringInterner};
use rustc_hash::FxHashMap;

use crate::errors::{type_mismatch, wrong_arg_count, EvalResult};
use crate::print_handler::PrintHandlerImpl;
use crate::Value;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Builtin {
    Print,
    Len,
    Push,
    Type,
}

impl Builtin {
    pub const ALL: [Builtin; 4] = [Builtin::Print, Builtin::Len, Builtin::Push, Builtin::Type];

    pub fn name(self) -> &'static str {
        match self {
            Builtin::Print => "print",
            Builtin::Len => "len",
            Builtin::Push => "push",
            Builtin::Type => "type",
        }
    }

    /// Fixed argument count; `None` for variadic builtins.
    pub fn arity(self) -> Option<usize> {
        match self {
            Builtin::Print => None,
            Builtin::Len | Builtin::Type => Some(1),
            Builtin::Push => Some(2),
        }
    }

    /// Apply the builtin. `span` is the call expression, used for errors.
    pub fn call(self, args: &[Value], span: Span, out: &PrintHandlerImpl) -> EvalResult {
        if let Some(expected) = self.arity() {
            if args.len() != expected {
                return Err(wrong_arg_count(
                    &format!("`{}`", self.name()),
                    expected,
                    args.len(),
                    span,
                ));
            }
        }
        match self {
            Builtin::Print => Ok(builtin_print(args, out)),
            Builtin::Len => builtin_len(&args[0], span),
            Builtin::Push => builtin_push(&args[0], &args[1], span),
            Builtin::Type => Ok(Value::string(args[0].type_name())),
        }
    }
}

fn builtin_print(args: &[Value], out: &PrintHandlerImpl) -> Value {
    let line = args
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    out.println(&line);
    Value::Null
}

#[expect(
    clippy::cast_precision_loss,
    reason = "lengths beyond 2^53 are not representable in memory anyway"
)]
fn builtin_len(value: &Value, span: Span) -> EvalResult {
    match value {
        Value::Str(s) => Ok(Value::Number(s.chars().count() as f64)),
        Value::List(items) => Ok(Value::Number(items.len() as f64)),
        other => Err(type_mismatch("`len`", "a string or list", other.type_name(), span)),
    }
}

fn builtin_push(list: &Value, item: &Value, span: Span) -> EvalResult {
    match list {
        Value::List(items) => {
            let mut extended = Vec::with_capacity(items.len() + 1);
            extended.extend(items.iter().cloned());
            extended.push(item.clone());
            Ok(Value::list(extended))
        }
        other => Err(type_mismatch("`push`", "a list", other.type_name(), span)),
    }
}

/// Builtin names, interned once per interpreter.
#[derive(Clone, Debug, Default)]
pub struct BuiltinRegistry {
    by_name: FxHashMap<Name, Builtin>,
}

impl BuiltinRegistry {
    pub fn new(interner: &StringInterner) -> Self {
        let by_name = Builtin::ALL
            .iter()
            .map(|&builtin| (interner.intern(builtin.name()), builtin))
            .collect();
        BuiltinRegistry { by_name }
    }

    pub fn get(&self, name: Name) -> Option<Builtin> {
        self.by_name.get(&name).copied()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "tests use unwrap for brevity")]
mod tests {
    use nullang_diagnostic::ErrorKind;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::print_handler::buffer_handler;

    fn call(builtin: Builtin, args: &[Value]) -> EvalResult {
        builtin.call(args, Span::DUMMY, &PrintHandlerImpl::Silent)
    }

    #[test]
    fn print_joins_display_forms() {
        let out = buffer_handler();
        let args = [Value::string("a"), Value::Number(1.0), Value::Null];
        let result = Builtin::Print.call(&args, Span::DUMMY, &out).unwrap();
        assert_eq!(result, Value::Null);
        assert_eq!(out.get_output(), "a 1 null\n");
    }

    #[test]
    fn print_without_arguments_prints_empty_line() {
        let out = buffer_handler();
        Builtin::Print.call(&[], Span::DUMMY, &out).unwrap();
        assert_eq!(out.get_output(), "\n");
    }

    #[test]
    fn len_counts_chars_and_items() {
        assert_eq!(call(Builtin::Len, &[Value::string("héllo")]).unwrap(), Value::Number(5.0));
        let list = Value::list(vec![Value::Null, Value::Null]);
        assert_eq!(call(Builtin::Len, &[list]).unwrap(), Value::Number(2.0));
    }

    #[test]
    fn len_of_number_is_type_error() {
        let err = call(Builtin::Len, &[Value::Number(1.0)]).unwrap_err();
        assert_eq!(err.error_kind(), ErrorKind::TypeError);
        assert_eq!(err.to_string(), "`len` expects a string or list, found number");
    }

    #[test]
    fn push_returns_new_list() {
        let original = Value::list(vec![Value::Number(1.0)]);
        let pushed = call(Builtin::Push, &[original.clone(), Value::Number(2.0)]).unwrap();
        assert_eq!(pushed, Value::list(vec![Value::Number(1.0), Value::Number(2.0)]));
        assert_eq!(original, Value::list(vec![Value::Number(1.0)]));
    }

    #[test]
    fn arity_is_checked() {
        let err = call(Builtin::Push, &[Value::list(vec![])]).unwrap_err();
        assert_eq!(err.error_kind(), ErrorKind::ArityError);
        assert_eq!(err.to_string(), "`push` expects 2 arguments, got 1");
    }

    #[test]
    fn type_names_values() {
        assert_eq!(call(Builtin::Type, &[Value::Bool(true)]).unwrap(), Value::string("bool"));
    }

    #[test]
    fn registry_resolves_interned_names() {
        let interner = StringInterner::new();
        let registry = BuiltinRegistry::new(&interner);
        assert_eq!(registry.get(interner.intern("len")), Some(Builtin::Len));
        assert_eq!(registry.get(interner.intern("nope")), None);
    }
}
