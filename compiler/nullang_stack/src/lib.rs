//! Host stack growth for recursive descent.
//!
//! The parser and evaluator recurse once per nested expression, statement
//! and function call. Wrapping each recursive entry point in
//! [`ensure_sufficient_stack`] lets deeply nested input run on a heap-allocated
//! stack segment instead of overflowing the thread stack, so the evaluator's
//! call-depth limit is what ends runaway recursion.

/// Grow when less than this much stack is left.
const RED_ZONE: usize = 128 * 1024;

/// Size of each freshly allocated stack segment.
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first switching to a new stack segment if the current one is
/// nearly exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack; run `f` directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nesting_depth(n: u32) -> u32 {
        ensure_sufficient_stack(|| if n == 0 { 0 } else { nesting_depth(n - 1) + 1 })
    }

    #[test]
    fn passes_value_through() {
        assert_eq!(ensure_sufficient_stack(|| "done"), "done");
    }

    #[test]
    fn passes_errors_through() {
        let result: Result<(), String> = ensure_sufficient_stack(|| Err("boom".to_string()));
        assert_eq!(result, Err("boom".to_string()));
    }

    #[test]
    fn survives_deep_recursion() {
        assert_eq!(nesting_depth(200_000), 200_000);
    }
}
