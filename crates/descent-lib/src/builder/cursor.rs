//! Token cursor with lookahead and rollback.
//!
//! The cursor counts consumed tokens instead of storing a signed index, so
//! the "before the first token" state is just zero consumed. The current
//! position, as seen by callers, is the index of the last consumed token.

/// Saved cursor state, restored on backtrack or failed exit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Checkpoint(usize);

impl Checkpoint {
    /// Index of the last token consumed when the checkpoint was taken.
    pub fn position(self) -> Option<usize> {
        self.0.checked_sub(1)
    }
}

#[derive(Debug)]
pub(crate) struct Cursor<'t, T> {
    tokens: &'t [T],
    consumed: usize,
}

impl<'t, T> Cursor<'t, T> {
    pub fn new(tokens: &'t [T]) -> Self {
        Self {
            tokens,
            consumed: 0,
        }
    }

    /// Consumes and returns the next token. At the end of input this is a
    /// no-op returning `None`.
    pub fn advance(&mut self) -> Option<&'t T> {
        let token = self.tokens.get(self.consumed)?;
        self.consumed += 1;
        Some(token)
    }

    /// Token at `position + offset`. Offset 0 is the last consumed token,
    /// 1 the next one, negative values look further back.
    pub fn peek(&self, offset: isize) -> Option<&'t T> {
        let index = (self.consumed as isize - 1).checked_add(offset)?;
        let index = usize::try_from(index).ok()?;
        self.tokens.get(index)
    }

    /// Undoes the last `advance`.
    pub fn rewind_one(&mut self) {
        assert!(self.consumed > 0, "cannot rewind before the first token");
        self.consumed -= 1;
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.consumed)
    }

    pub fn reset(&mut self, checkpoint: Checkpoint) {
        self.consumed = checkpoint.0;
    }

    pub fn position(&self) -> Option<usize> {
        self.consumed.checked_sub(1)
    }

    pub fn remaining(&self) -> usize {
        self.tokens.len() - self.consumed
    }

    pub fn is_exhausted(&self) -> bool {
        self.consumed == self.tokens.len()
    }

    pub fn tokens(&self) -> &'t [T] {
        self.tokens
    }
}
