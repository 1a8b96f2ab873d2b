//! Guaranteed exit.
//!
//! Every `enter` needs exactly one `exit`, on every path out of the
//! production function. Two ways to get that without writing `exit` by
//! hand:
//! - `Builder::rule` runs a closure between `enter` and `exit`
//! - `Builder::scope` returns a guard that exits when finished or dropped

use std::ops::{Deref, DerefMut};

use super::Builder;

impl<'t, T> Builder<'t, T> {
    /// Runs `body` as the production `label` and exits with its result.
    pub fn rule<F>(&mut self, label: impl Into<String>, body: F) -> bool
    where
        F: FnOnce(&mut Self) -> bool,
    {
        self.enter(label);
        let result = body(self);
        self.exit(result);
        result
    }

    /// Enters `label` and returns a guard for it.
    ///
    /// The guard derefs to the builder. Finish it with [`Scope::finish`];
    /// a guard dropped unfinished (early return, `?`) exits with `false`.
    pub fn scope(&mut self, label: impl Into<String>) -> Scope<'_, 't, T> {
        self.enter(label);
        Scope {
            builder: self,
            finished: false,
        }
    }
}

/// RAII guard for one production. See [`Builder::scope`].
#[must_use = "dropping the scope immediately exits the production with false"]
pub struct Scope<'b, 't, T> {
    builder: &'b mut Builder<'t, T>,
    finished: bool,
}

impl<T> Scope<'_, '_, T> {
    /// Exits the production with `result` and returns it.
    pub fn finish(mut self, result: bool) -> bool {
        self.finished = true;
        self.builder.exit(result);
        result
    }
}

impl<'t, T> Deref for Scope<'_, 't, T> {
    type Target = Builder<'t, T>;

    fn deref(&self) -> &Self::Target {
        self.builder
    }
}

impl<T> DerefMut for Scope<'_, '_, T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.builder
    }
}

impl<T> Drop for Scope<'_, '_, T> {
    fn drop(&mut self) {
        // While unwinding the stacks are already inconsistent; leave them be.
        if !self.finished && !std::thread::panicking() {
            self.builder.exit(false);
        }
    }
}
