//! Invariant checks excluded from coverage reports.
//!
//! Every protocol operation except `enter` needs an active production.
//! Calling one without it is a bug in the grammar, not a parse failure, so
//! these checks panic.

#![cfg_attr(coverage_nightly, coverage(off))]

use descent_core::DebugTree;

use super::frame::{Frame, FrameStack};
use super::trace::TraceStack;

fn no_active_production(op: &str) -> ! {
    panic!("cannot {op}: no active production (enter must come first)")
}

impl<T> FrameStack<T> {
    #[inline]
    pub(super) fn expect_top_mut(&mut self, op: &str) -> &mut Frame<T> {
        self.top_mut().unwrap_or_else(|| no_active_production(op))
    }

    #[inline]
    pub(super) fn expect_pop(&mut self, op: &str) -> Frame<T> {
        self.pop().unwrap_or_else(|| no_active_production(op))
    }
}

impl TraceStack {
    #[inline]
    pub(super) fn expect_pop(&mut self, op: &str) -> DebugTree {
        self.pop().unwrap_or_else(|| no_active_production(op))
    }
}

#[inline]
pub(super) fn assert_balanced<T>(frames: &FrameStack<T>, traces: &TraceStack) {
    debug_assert_eq!(
        frames.len(),
        traces.len(),
        "broken builder invariant: frame and trace stacks out of step"
    );
}
