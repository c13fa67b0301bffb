//! Call frame tracking.
//!
//! [`CallStack`] bounds recursion depth and snapshots the active calls into
//! an [`EvalBacktrace`] when an error escapes a function body.

use nullang_ir::Span;

use crate::errors::{recursion_limit_exceeded, BacktraceFrame, EvalBacktrace, EvalError};

/// Default bound on nested calls.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 1024;

#[derive(Clone, Debug)]
pub struct CallFrame {
    /// `<anonymous>` for function literals never bound to a name.
    pub name: &'static str,
    pub call_span: Span,
}

#[derive(Clone, Debug)]
pub struct CallStack {
    frames: Vec<CallFrame>,
    max_depth: usize,
}

impl CallStack {
    pub fn new(max_depth: usize) -> Self {
        CallStack {
            frames: Vec::new(),
            max_depth,
        }
    }

    /// Enter a call, failing once `max_depth` calls are already active.
    pub fn push(&mut self, frame: CallFrame) -> Result<(), EvalError> {
        if self.frames.len() >= self.max_depth {
            return Err(recursion_limit_exceeded(self.max_depth, frame.call_span));
        }
        self.frames.push(frame);
        Ok(())
    }

    pub fn pop(&mut self) {
        debug_assert!(!self.frames.is_empty(), "CallStack::pop on empty stack");
        self.frames.pop();
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Most recent call first.
    pub fn capture(&self) -> EvalBacktrace {
        EvalBacktrace::new(
            self.frames
                .iter()
                .rev()
                .map(|frame| BacktraceFrame {
                    name: frame.name.to_string(),
                    call_span: frame.call_span,
                })
                .collect(),
        )
    }

    /// Record the active calls on `err`, unless an inner frame already did.
    pub fn attach_backtrace(&self, err: EvalError) -> EvalError {
        if self.frames.is_empty() || !err.backtrace.is_empty() {
            return err;
        }
        err.with_backtrace(self.capture())
    }
}

impl Default for CallStack {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CALL_DEPTH)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "tests use unwrap for brevity")]
mod tests {
    use nullang_diagnostic::ErrorCode;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::errors::EvalErrorKind;

    fn frame(name: &'static str, start: u32) -> CallFrame {
        CallFrame {
            name,
            call_span: Span::new(start, start + 1),
        }
    }

    #[test]
    fn push_and_pop_track_depth() {
        let mut stack = CallStack::new(4);
        stack.push(frame("a", 0)).unwrap();
        stack.push(frame("b", 1)).unwrap();
        assert_eq!(stack.depth(), 2);
        stack.pop();
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn push_past_limit_fails() {
        let mut stack = CallStack::new(2);
        stack.push(frame("a", 0)).unwrap();
        stack.push(frame("a", 1)).unwrap();
        let err = stack.push(frame("a", 2)).unwrap_err();
        assert_eq!(err.code(), ErrorCode::E2009);
        assert_eq!(err.span, Span::new(2, 3));
        assert_eq!(stack.depth(), 2);
    }

    #[test]
    fn capture_is_innermost_first() {
        let mut stack = CallStack::default();
        stack.push(frame("outer", 0)).unwrap();
        stack.push(frame("inner", 5)).unwrap();
        let names: Vec<_> = stack
            .capture()
            .frames()
            .iter()
            .map(|f| f.name.clone())
            .collect();
        assert_eq!(names, vec!["inner", "outer"]);
    }

    #[test]
    fn attach_keeps_innermost_backtrace() {
        let mut stack = CallStack::default();
        stack.push(frame("outer", 0)).unwrap();
        stack.push(frame("inner", 5)).unwrap();
        let err = stack.attach_backtrace(EvalError::new(EvalErrorKind::DivisionByZero, Span::DUMMY));
        stack.pop();
        let err = stack.attach_backtrace(err);
        assert_eq!(err.backtrace.frames().len(), 2);
    }

    #[test]
    fn empty_stack_attaches_nothing() {
        let stack = CallStack::default();
        let err = stack.attach_backtrace(EvalError::new(EvalErrorKind::DivisionByZero, Span::DUMMY));
        assert!(err.backtrace.is_empty());
    }
}
