//! Stack growth for deeply nested expression trees.
//!
//! Every combinator evaluates its operands through `Expr::evaluate`, so a
//! tree built from thousands of nested conditionals recurses just as deep.
//! On native targets `stacker` grows the stack before it runs out; WASM
//! manages its own stack and the closure is called directly.

/// Run `f`, growing the stack first if little of it remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    /// Grow once less than this much stack (100KB) is left.
    const RED_ZONE: usize = 100 * 1024;

    /// Size of each new stack segment (1MB).
    const STACK_PER_RECURSION: usize = 1024 * 1024;

    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
