//! REPL sessions driven through in-memory streams.

#![allow(clippy::unwrap_used, reason = "tests use unwrap for brevity")]

use pretty_assertions::assert_eq;

use nullang_diagnostic::emitter::{ColorMode, TerminalEmitter};
use nullang_eval::{buffer_handler, Interpreter};
use nullangc::Repl;

struct Session {
    out: String,
    err: String,
    printed: String,
}

fn session_with(input: &[u8], show_prompt: bool) -> Session {
    let interpreter = Interpreter::builder()
        .print_handler(buffer_handler())
        .build();
    let diagnostics = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    let mut repl =
        Repl::new(interpreter, input, Vec::new(), diagnostics).with_prompt(show_prompt);
    repl.run().unwrap();
    let printed = repl.interpreter().get_print_output();
    let (out, err) = repl.into_output();
    Session {
        out: String::from_utf8(out).unwrap(),
        err: String::from_utf8(err).unwrap(),
        printed,
    }
}

fn session(input: &str) -> Session {
    session_with(input.as_bytes(), false)
}

#[test]
fn echoes_non_null_values() {
    let s = session("1 + 2\n\"hi\"\n[1, \"a\", null]\n");
    assert_eq!(s.out, "3\n\"hi\"\n[1, \"a\", null]\n");
    assert_eq!(s.err, "");
}

#[test]
fn null_results_are_not_echoed() {
    let s = session("let x = 1;\nnull\nprint(x)\n");
    assert_eq!(s.out, "");
    assert_eq!(s.printed, "1\n");
}

#[test]
fn bindings_persist_across_lines() {
    let s = session("var n = 1;\nn = n + 1;\nfn twice(x) { x * 2 }\ntwice(n)\n");
    assert_eq!(s.out, "2\n4\n");
}

#[test]
fn open_delimiters_continue_the_unit() {
    let s = session("fn add(a, b) {\n  return a + b;\n}\nadd(\n  1,\n  2\n)\n");
    assert_eq!(s.out, "3\n");
    assert_eq!(s.err, "");
}

#[test]
fn errors_are_reported_and_the_session_continues() {
    let s = session("missing\nlet a = 1;\nlet a = 2;\na\n");
    assert!(s.err.starts_with("UndefinedVariableError[E2002]"), "{}", s.err);
    assert!(s.err.contains("RedeclarationError[E2001]"), "{}", s.err);
    assert_eq!(s.out, "1\n");
}

#[test]
fn pending_unit_is_submitted_at_end_of_input() {
    let s = session("{ print(1);");
    assert!(s.err.starts_with("SyntaxError"), "{}", s.err);
    assert_eq!(s.printed, "");
}

#[test]
fn exit_ends_the_session() {
    let s = session("1\nexit\n2\n");
    assert_eq!(s.out, "1\n");
}

#[test]
fn blank_lines_are_skipped() {
    let s = session("\n   \n7\n\n");
    assert_eq!(s.out, "7\n");
}

#[test]
fn prompts_only_when_enabled() {
    let s = session_with(b"[1,\n2]\n", true);
    assert_eq!(s.out, ">> .. [1, 2]\n>> ");
}

#[test]
fn runtime_errors_leave_earlier_effects() {
    let s = session("print(\"before\"); 1 / 0;\n");
    assert_eq!(s.printed, "before\n");
    assert!(s.err.starts_with("RuntimeError[E2007]"), "{}", s.err);
}

#[test]
fn invalid_utf8_does_not_end_the_session() {
    let s = session_with(b"1 + 1\n\"\xff\"\n2 + 2\n", false);
    assert_eq!(s.out, "2\n\"\u{fffd}\"\n4\n");
    assert_eq!(s.err, "");
}
