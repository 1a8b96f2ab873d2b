//! Final results of a parse.

use descent_core::{DebugTree, ParseTree};
use serde::Serialize;

/// Why the outermost production did not produce a parse tree.
///
/// Failures inside nested productions are never reported here; they are
/// ordinary `false` results handled by the calling production.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParseError {
    /// The outermost production returned false (or was skipped).
    #[error("parsing error")]
    NoMatch,

    /// The outermost production succeeded but input remained.
    #[error("not all tokens consumed ({remaining} left)")]
    LeftoverTokens { remaining: usize },
}

/// Successful parse.
#[derive(Debug, Clone)]
pub struct Parsed<T> {
    pub tree: ParseTree<T>,
    pub debug: DebugTree,
}

/// Failed parse, with the trace that explains it.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{error}")]
pub struct Failed {
    #[source]
    pub error: ParseError,
    pub debug: DebugTree,
}
