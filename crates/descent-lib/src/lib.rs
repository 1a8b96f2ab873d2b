//! Descent: a runtime for hand-written backtracking recursive-descent parsers.
//!
//! Grammar productions are ordinary functions over a [`Builder`]. The
//! builder handles cursor rollback, parse-tree assembly and a full trace of
//! every attempt, so a production only says what it matches.
//!
//! # Example
//!
//! ```
//! use descent_lib::{Builder, ParseError};
//!
//! // S := "a" S | ε
//! fn s(b: &mut Builder<'_, char>) -> bool {
//!     b.rule("S", |b| {
//!         if b.match_token(&'a') && s(b) {
//!             return true;
//!         }
//!         b.backtrack();
//!         b.skip();
//!         true
//!     })
//! }
//!
//! let tokens = ['a', 'a'];
//! let mut b = Builder::new(&tokens);
//! s(&mut b);
//! assert_eq!(b.parse_tree().unwrap().leaves(), [&'a', &'a']);
//!
//! let tokens = ['a', 'b'];
//! let mut b = Builder::new(&tokens);
//! s(&mut b);
//! assert_eq!(b.error(), Some(&ParseError::LeftoverTokens { remaining: 1 }));
//! eprintln!("{}", b.debug_tree().unwrap());
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod builder;
pub mod registry;
pub mod tracer;

#[cfg(test)]
mod tests;

pub use builder::{Builder, Checkpoint, Failed, ParseError, Parsed, Scope, Token};
pub use registry::{Production, Rules};
pub use tracer::{NoopTracer, PrintTracer, Tracer, Verbosity};

pub use descent_core::{
    Colors, DebugTree, ParseTree, Symbol, TreeNode, Visitor, WalkStatus, render, to_json, walk,
    walk_fn,
};

/// Errors from running a parse through [`Rules`].
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// The requested start production is not registered.
    #[error("no production named `{0}`")]
    RuleNotFound(String),

    /// The parse ran but did not produce a tree.
    #[error(transparent)]
    Parse(#[from] Failed),
}

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, Error>;
