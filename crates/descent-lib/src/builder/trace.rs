//! Trace stack, parallel to the frame stack.
//!
//! Unlike parse subtrees, trace nodes are never discarded: a popped node is
//! always attached to its parent, or becomes the final debug tree.

use descent_core::DebugTree;

/// Seen-side text of an attempt made at the end of input.
pub(crate) const NO_TOKENS_LEFT: &str = "<no tokens left>";

/// Inserted before the result annotation of a skipped production.
pub(crate) const SKIPPED_MARKER: &str = "[skipped]";

#[derive(Debug, Default)]
pub(crate) struct TraceStack {
    nodes: Vec<DebugTree>,
}

impl TraceStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, label: &str) {
        self.nodes.push(DebugTree::new(label));
    }

    pub fn pop(&mut self) -> Option<DebugTree> {
        self.nodes.pop()
    }

    pub fn top_mut(&mut self) -> Option<&mut DebugTree> {
        self.nodes.last_mut()
    }

    /// Adds an attempt leaf under the current production.
    pub fn record(&mut self, attempt: String) {
        if let Some(top) = self.nodes.last_mut() {
            top.add(DebugTree::new(attempt));
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }
}
