//! Frame stack: one frame per active production.
//!
//! A frame owns the subtree its production is building. On a successful
//! exit the subtree moves into the parent frame; otherwise it is dropped
//! with the frame.

use descent_core::ParseTree;

use super::cursor::Checkpoint;

#[derive(Debug)]
pub(crate) struct Frame<T> {
    /// Cursor state at `enter`.
    pub checkpoint: Checkpoint,
    /// Subtree under construction, rooted at `Symbol::Rule(label)`.
    pub tree: ParseTree<T>,
    /// Set by `skip`: the next exit discards this frame unconditionally.
    pub skip: bool,
}

impl<T> Frame<T> {
    pub fn new(checkpoint: Checkpoint, label: String) -> Self {
        Self {
            checkpoint,
            tree: ParseTree::rule(label),
            skip: false,
        }
    }

    pub fn label(&self) -> &str {
        self.tree.symbol().as_rule().unwrap_or_default()
    }
}

#[derive(Debug)]
pub(crate) struct FrameStack<T> {
    frames: Vec<Frame<T>>,
}

impl<T> FrameStack<T> {
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }

    pub fn push(&mut self, frame: Frame<T>) {
        self.frames.push(frame);
    }

    pub fn pop(&mut self) -> Option<Frame<T>> {
        self.frames.pop()
    }

    pub fn top(&self) -> Option<&Frame<T>> {
        self.frames.last()
    }

    pub fn top_mut(&mut self) -> Option<&mut Frame<T>> {
        self.frames.last_mut()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
