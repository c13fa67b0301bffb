use pretty_assertions::assert_eq;

use super::*;

#[test]
fn truthiness() {
    assert!(!Value::Null.is_truthy());
    assert!(!Value::Bool(false).is_truthy());
    assert!(Value::Bool(true).is_truthy());
    assert!(Value::Number(0.0).is_truthy());
    assert!(Value::string("").is_truthy());
    assert!(Value::list(vec![]).is_truthy());
}

#[test]
fn cross_kind_values_are_unequal() {
    assert_ne!(Value::Number(1.0), Value::string("1"));
    assert_ne!(Value::Null, Value::Bool(false));
    assert_ne!(Value::Number(0.0), Value::Bool(false));
}

#[test]
fn lists_compare_elementwise() {
    let a = Value::list(vec![Value::Number(1.0), Value::string("a")]);
    let b = Value::list(vec![Value::Number(1.0), Value::string("a")]);
    let c = Value::list(vec![Value::Number(1.0)]);
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn nan_is_not_equal_to_itself() {
    assert_ne!(Value::Number(f64::NAN), Value::Number(f64::NAN));
}

#[test]
fn display_and_repr() {
    assert_eq!(Value::Number(7.0).to_string(), "7");
    assert_eq!(Value::Number(-3.0).to_string(), "-3");
    assert_eq!(Value::Number(0.5).to_string(), "0.5");
    assert_eq!(Value::string("hi").to_string(), "hi");
    assert_eq!(Value::string("hi").repr(), "\"hi\"");
    assert_eq!(Value::string("a\"b\n").repr(), "\"a\\\"b\\n\"");
    assert_eq!(Value::Null.repr(), "null");
    assert_eq!(Value::Bool(true).repr(), "true");
}

#[test]
fn lists_show_elements_in_repr_form() {
    let list = Value::list(vec![Value::Number(1.0), Value::string("a"), Value::Null]);
    assert_eq!(list.to_string(), "[1, \"a\", null]");
    assert_eq!(list.repr(), "[1, \"a\", null]");
}

#[test]
fn builtins_display_by_name() {
    assert_eq!(Value::Builtin(Builtin::Len).to_string(), "<builtin len>");
    assert_eq!(Value::Builtin(Builtin::Len).type_name(), "function");
}

#[test]
fn type_names() {
    assert_eq!(Value::Null.type_name(), "null");
    assert_eq!(Value::Bool(true).type_name(), "bool");
    assert_eq!(Value::Number(1.0).type_name(), "number");
    assert_eq!(Value::string("").type_name(), "string");
    assert_eq!(Value::list(vec![]).type_name(), "list");
}

fn nested(depth: usize) -> Value {
    let mut value = Value::Null;
    for _ in 0..depth {
        value = Value::list(vec![value]);
    }
    value
}

#[test]
fn deeply_nested_list_drops_without_overflow() {
    drop(nested(300_000));
}

#[test]
fn deeply_nested_lists_compare_and_print() {
    let a = nested(100_000);
    let b = nested(100_000);
    assert!(a == b);
    assert!(a != nested(99_999));

    let repr = a.repr();
    assert_eq!(repr.len(), 2 * 100_000 + "null".len());
    assert!(repr.starts_with("[[[") && repr.ends_with("null]]]"));
}

#[test]
fn shared_children_survive_parent_drop() {
    let child = Value::list(vec![Value::Number(1.0)]);
    let parent = Value::list(vec![child.clone(), child.clone()]);
    drop(parent);
    assert_eq!(child, Value::list(vec![Value::Number(1.0)]));
}
