//! The builder protocol.
//!
//! A production function is an ordinary function taking the builder by
//! exclusive reference and returning whether it matched:
//!
//! ```
//! use descent_lib::Builder;
//!
//! // E := "a" "b"
//! fn e(b: &mut Builder<'_, &str>) -> bool {
//!     b.rule("E", |b| b.match_token(&"a") && b.match_token(&"b"))
//! }
//!
//! let tokens = ["a", "b"];
//! let mut b = Builder::new(&tokens);
//! assert!(e(&mut b));
//! assert!(b.error().is_none());
//! assert_eq!(b.parse_tree().unwrap().leaves(), [&"a", &"b"]);
//! ```
//!
//! # State
//!
//! Three pieces of state move together:
//! - the token cursor
//! - the frame stack, one frame (checkpoint + parse subtree) per active
//!   production
//! - the trace stack, one debug node per active production
//!
//! `enter` pushes onto both stacks, `exit` pops both. On exit the parse
//! subtree is attached to the parent (success), dropped with the cursor
//! rolled back (failure), or dropped regardless (skip). The debug node is
//! always attached, annotated with the result.
//!
//! When the outermost production exits, the final parse tree, debug tree
//! and error are frozen and available through the accessors.

mod cursor;
mod frame;
mod invariants;
mod outcome;
mod scope;
mod trace;


use std::fmt;

use descent_core::{DebugTree, ParseTree};

pub use cursor::Checkpoint;
pub use outcome::{Failed, ParseError, Parsed};
pub use scope::Scope;

use crate::tracer::{NoopTracer, Tracer};
use cursor::Cursor;
use frame::{Frame, FrameStack};
use invariants::assert_balanced;
use trace::{NO_TOKENS_LEFT, SKIPPED_MARKER, TraceStack};

/// What a token type needs for terminal matching: equality to compare,
/// `Display` for trace labels, `Clone` to copy matched tokens into the tree.
pub trait Token: Clone + PartialEq + fmt::Display {}

impl<T: Clone + PartialEq + fmt::Display> Token for T {}

/// Parse state threaded through production functions.
pub struct Builder<'t, T> {
    cursor: Cursor<'t, T>,
    frames: FrameStack<T>,
    traces: TraceStack,
    tracer: Box<dyn Tracer + 't>,
    parse_tree: Option<ParseTree<T>>,
    debug_tree: Option<DebugTree>,
    error: Option<ParseError>,
}

impl<'t, T> Builder<'t, T> {
    pub fn new(tokens: &'t [T]) -> Self {
        Self {
            cursor: Cursor::new(tokens),
            frames: FrameStack::new(),
            traces: TraceStack::new(),
            tracer: Box::new(NoopTracer),
            parse_tree: None,
            debug_tree: None,
            error: None,
        }
    }

    /// Reports every protocol event to `tracer`.
    ///
    /// Pass `&mut tracer` to keep ownership and read it after the parse.
    pub fn with_tracer(mut self, tracer: impl Tracer + 't) -> Self {
        assert!(
            self.frames.is_empty(),
            "cannot attach a tracer while a production is active"
        );
        self.tracer = Box::new(tracer);
        self
    }

    /// Starts a production. Must come first in every production function and
    /// be paired with exactly one `exit`.
    pub fn enter(&mut self, label: impl Into<String>) {
        let label = label.into();
        if self.frames.is_empty() {
            // A new outermost production replaces the results of the last one.
            self.parse_tree = None;
            self.debug_tree = None;
            self.error = None;
        }

        self.tracer
            .trace_enter(&label, self.frames.len(), self.cursor.position());
        self.traces.push(&label);
        self.frames.push(Frame::new(self.cursor.checkpoint(), label));
        assert_balanced(&self.frames, &self.traces);
    }

    /// Ends the current production with its `result`.
    pub fn exit(&mut self, result: bool) {
        let Frame {
            checkpoint,
            tree,
            skip,
        } = self.frames.expect_pop("exit");
        let mut trace = self.traces.expect_pop("exit");
        let outermost = self.frames.is_empty();

        if skip {
            self.cursor.reset(checkpoint);
            if outermost {
                self.error = Some(ParseError::NoMatch);
            }
        } else if result {
            if let Some(parent) = self.frames.top_mut() {
                parent.tree.add(tree);
            } else if self.cursor.is_exhausted() {
                self.parse_tree = Some(tree);
            } else {
                self.error = Some(ParseError::LeftoverTokens {
                    remaining: self.cursor.remaining(),
                });
            }
        } else {
            self.cursor.reset(checkpoint);
            if outermost {
                self.error = Some(ParseError::NoMatch);
            }
        }

        self.tracer.trace_exit(
            trace.label(),
            result,
            skip,
            self.frames.len(),
            self.cursor.position(),
        );

        if skip {
            trace.annotate(SKIPPED_MARKER);
        }
        trace.annotate(&format!("({result})"));
        match self.traces.top_mut() {
            Some(parent) => parent.add(trace),
            None => {
                self.debug_tree = Some(trace);
                self.tracer.trace_finish(self.error.as_ref());
            }
        }
        assert_balanced(&self.frames, &self.traces);
    }

    /// Consumes the next token without recording anything. Pair with `add`
    /// when a terminal needs a custom check (a regex, a token class).
    pub fn next_token(&mut self) -> Option<&'t T> {
        self.cursor.advance()
    }

    /// Token at `offset` from the current position without consuming it.
    /// `peek(0)` is the last consumed token, `peek(1)` the next one.
    pub fn peek(&self, offset: isize) -> Option<&'t T> {
        self.cursor.peek(offset)
    }

    /// Appends a terminal leaf to the current production's subtree.
    pub fn add(&mut self, token: T) {
        self.frames
            .expect_top_mut("add")
            .tree
            .add(ParseTree::token(token));
    }

    /// Rewinds the cursor to the current production's checkpoint and drops
    /// every child it has built, so a sibling alternative can start over.
    pub fn backtrack(&mut self) {
        let depth = self.frames.len().saturating_sub(1);
        let frame = self.frames.expect_top_mut("backtrack");
        frame.tree.clear();
        self.cursor.reset(frame.checkpoint);
        self.tracer
            .trace_backtrack(frame.label(), depth, self.cursor.position());
    }

    /// Makes the upcoming `exit` discard the current production whatever its
    /// result. Used for ε-productions that should leave no node behind.
    pub fn skip(&mut self) {
        let depth = self.frames.len().saturating_sub(1);
        let frame = self.frames.expect_top_mut("skip");
        frame.skip = true;
        self.tracer.trace_skip(frame.label(), depth);
    }

    /// Final parse tree. Present only after a successful outermost exit
    /// that consumed every token.
    pub fn parse_tree(&self) -> Option<&ParseTree<T>> {
        self.parse_tree.as_ref()
    }

    /// Final debug tree. Present after any outermost exit.
    pub fn debug_tree(&self) -> Option<&DebugTree> {
        self.debug_tree.as_ref()
    }

    /// Final error. Present after an outermost exit that failed, was
    /// skipped, or left tokens unconsumed.
    pub fn error(&self) -> Option<&ParseError> {
        self.error.as_ref()
    }

    /// Whether the outermost production has exited.
    pub fn is_finished(&self) -> bool {
        self.frames.is_empty() && self.debug_tree.is_some()
    }

    /// Number of active productions.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Index of the last consumed token, `None` before the first.
    pub fn position(&self) -> Option<usize> {
        self.cursor.position()
    }

    /// Tokens not yet consumed.
    pub fn remaining(&self) -> usize {
        self.cursor.remaining()
    }

    pub fn tokens(&self) -> &'t [T] {
        self.cursor.tokens()
    }

    /// Checkpoint of the current production, if any.
    pub fn checkpoint(&self) -> Option<Checkpoint> {
        self.frames.top().map(|frame| frame.checkpoint)
    }

    /// Takes the results of a finished parse.
    ///
    /// Panics if the outermost production has not exited yet.
    pub fn finish(self) -> Result<Parsed<T>, Failed> {
        let finished = self.is_finished();
        let (true, Some(debug)) = (finished, self.debug_tree) else {
            panic!("cannot finish: the outermost production has not exited");
        };
        match (self.parse_tree, self.error) {
            (Some(tree), None) => Ok(Parsed { tree, debug }),
            (_, Some(error)) => Err(Failed { error, debug }),
            (None, None) => unreachable!("outermost exit always sets a tree or an error"),
        }
    }
}

impl<'t, T: Token> Builder<'t, T> {
    /// Consumes the next token if it equals `token`, adding it to the tree.
    ///
    /// Every attempt is recorded in the debug tree as `seen = expected`,
    /// `seen ≠ expected` or `<no tokens left> ≠ expected`. A mismatch leaves
    /// the cursor where it was.
    pub fn match_token(&mut self, token: &T) -> bool {
        self.frames.expect_top_mut("match");
        let depth = self.frames.len() - 1;
        let (attempt, matched) = match self.cursor.advance() {
            None => (format!("{NO_TOKENS_LEFT} ≠ {token}"), false),
            Some(seen) if seen != token => {
                self.cursor.rewind_one();
                (format!("{seen} ≠ {token}"), false)
            }
            Some(seen) => {
                self.add(seen.clone());
                (format!("{seen} = {token}"), true)
            }
        };
        self.tracer
            .trace_attempt(&attempt, matched, depth, self.cursor.position());
        self.traces.record(attempt);
        matched
    }
}

impl<'t, T: PartialEq> Builder<'t, T> {
    /// Whether the token at `offset` equals `token`.
    pub fn check(&self, token: &T, offset: isize) -> bool {
        self.peek(offset) == Some(token)
    }

    /// Like `check`, but running out of tokens also counts as a match. Handy
    /// when end of input is an acceptable terminator.
    pub fn check_or_end(&self, token: &T, offset: isize) -> bool {
        self.peek(offset).is_none_or(|seen| seen == token)
    }
}

impl<T: fmt::Debug> fmt::Debug for Builder<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builder")
            .field("cursor", &self.cursor)
            .field("frames", &self.frames)
            .field("traces", &self.traces)
            .field("parse_tree", &self.parse_tree)
            .field("debug_tree", &self.debug_tree)
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}
