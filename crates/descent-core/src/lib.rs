#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Tree data model for the descent parsing runtime.
//!
//! Two trees come out of every parse:
//! - **Parse tree** (`ParseTree`): the successful derivation; nodes are
//!   attached only when their production succeeds
//! - **Debug tree** (`DebugTree`): every attempt, successful or not, for
//!   diagnosing why a parse failed
//!
//! Both implement `TreeNode`, which the generic `walk` and `render` use.

mod colors;
mod render;
mod tree;
mod walk;


pub use colors::Colors;
pub use render::render;
pub use tree::{DebugTree, ParseTree, Symbol, TreeNode};
pub use walk::{Visitor, WalkStatus, walk, walk_fn};

/// Serializes a tree (or anything else `Serialize`) as pretty JSON.
pub fn to_json<S: serde::Serialize + ?Sized>(value: &S) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}
