//! Live tracing of builder events.
//!
//! The debug tree is the post-mortem record of a parse. A tracer sees the
//! same events as they happen, which helps when a grammar never returns
//! (runaway recursion) or when the order of attempts matters more than
//! their nesting.
//!
//! `NoopTracer` is the default and ignores everything. `PrintTracer`
//! collects formatted lines filtered by `Verbosity`.

use descent_core::Colors;

use crate::builder::ParseError;

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// Enter/exit of productions and the final outcome.
    #[default]
    Default,
    /// Also match attempts, backtracks and skips.
    Verbose,
    /// Also the cursor position on every line.
    VeryVerbose,
}

/// Receives builder events.
///
/// `depth` is the zero-based nesting level of the production concerned
/// (0 for the outermost). `position` is the cursor position after the
/// event, `None` before the first token.
pub trait Tracer {
    /// A production was entered.
    fn trace_enter(&mut self, label: &str, depth: usize, position: Option<usize>);

    /// A terminal match was attempted inside the production at `depth`.
    fn trace_attempt(&mut self, attempt: &str, matched: bool, depth: usize, position: Option<usize>);

    /// The production at `depth` rewound to its checkpoint.
    fn trace_backtrack(&mut self, label: &str, depth: usize, position: Option<usize>);

    /// The production at `depth` was marked to be discarded on exit.
    fn trace_skip(&mut self, label: &str, depth: usize);

    /// A production exited.
    fn trace_exit(
        &mut self,
        label: &str,
        result: bool,
        skipped: bool,
        depth: usize,
        position: Option<usize>,
    );

    /// The outermost production exited.
    fn trace_finish(&mut self, error: Option<&ParseError>);
}

impl<R: Tracer + ?Sized> Tracer for &mut R {
    fn trace_enter(&mut self, label: &str, depth: usize, position: Option<usize>) {
        (**self).trace_enter(label, depth, position);
    }

    fn trace_attempt(&mut self, attempt: &str, matched: bool, depth: usize, position: Option<usize>) {
        (**self).trace_attempt(attempt, matched, depth, position);
    }

    fn trace_backtrack(&mut self, label: &str, depth: usize, position: Option<usize>) {
        (**self).trace_backtrack(label, depth, position);
    }

    fn trace_skip(&mut self, label: &str, depth: usize) {
        (**self).trace_skip(label, depth);
    }

    fn trace_exit(
        &mut self,
        label: &str,
        result: bool,
        skipped: bool,
        depth: usize,
        position: Option<usize>,
    ) {
        (**self).trace_exit(label, result, skipped, depth, position);
    }

    fn trace_finish(&mut self, error: Option<&ParseError>) {
        (**self).trace_finish(error);
    }
}

/// Tracer that does nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_enter(&mut self, _label: &str, _depth: usize, _position: Option<usize>) {}

    #[inline(always)]
    fn trace_attempt(&mut self, _attempt: &str, _matched: bool, _depth: usize, _position: Option<usize>) {}

    #[inline(always)]
    fn trace_backtrack(&mut self, _label: &str, _depth: usize, _position: Option<usize>) {}

    #[inline(always)]
    fn trace_skip(&mut self, _label: &str, _depth: usize) {}

    #[inline(always)]
    fn trace_exit(
        &mut self,
        _label: &str,
        _result: bool,
        _skipped: bool,
        _depth: usize,
        _position: Option<usize>,
    ) {
    }

    #[inline(always)]
    fn trace_finish(&mut self, _error: Option<&ParseError>) {}
}

/// Tracer that collects one formatted line per event.
///
/// ```text
/// ▶ Expr
///   ▶ Term
///     · 2.8 ≠ (
///   ◀ Term ✓
/// ◀ Expr ✓
/// ✓ parsed
/// ```
#[derive(Debug, Default)]
pub struct PrintTracer {
    verbosity: Verbosity,
    colors: Colors,
    lines: Vec<String>,
}

impl PrintTracer {
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            colors: Colors::OFF,
            lines: Vec::new(),
        }
    }

    pub fn colors(mut self, colors: Colors) -> Self {
        self.colors = colors;
        self
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// All lines joined, each terminated by a newline.
    pub fn output(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    fn push(&mut self, depth: usize, text: String) {
        let mut line = "  ".repeat(depth);
        line.push_str(&text);
        self.lines.push(line);
    }

    fn push_at(&mut self, depth: usize, text: String, position: Option<usize>) {
        self.push(depth, text);
        if self.verbosity < Verbosity::VeryVerbose {
            return;
        }
        let at = match position {
            Some(p) => format!(" @{p}"),
            None => " @-".to_owned(),
        };
        let at = self.colors.paint(self.colors.dim, &at);
        if let Some(line) = self.lines.last_mut() {
            line.push_str(&at);
        }
    }

    fn verbose(&self) -> bool {
        self.verbosity >= Verbosity::Verbose
    }
}

impl Tracer for PrintTracer {
    fn trace_enter(&mut self, label: &str, depth: usize, position: Option<usize>) {
        let c = self.colors;
        self.push_at(depth, format!("▶ {}", c.paint(c.blue, label)), position);
    }

    fn trace_attempt(&mut self, attempt: &str, matched: bool, depth: usize, position: Option<usize>) {
        if !self.verbose() {
            return;
        }
        let c = self.colors;
        let color = if matched { c.green } else { c.red };
        self.push_at(depth + 1, format!("· {}", c.paint(color, attempt)), position);
    }

    fn trace_backtrack(&mut self, label: &str, depth: usize, position: Option<usize>) {
        if !self.verbose() {
            return;
        }
        let c = self.colors;
        self.push_at(depth, format!("↺ {}", c.paint(c.blue, label)), position);
    }

    fn trace_skip(&mut self, label: &str, depth: usize) {
        if !self.verbose() {
            return;
        }
        let c = self.colors;
        self.push(depth, format!("∅ {}", c.paint(c.blue, label)));
    }

    fn trace_exit(
        &mut self,
        label: &str,
        result: bool,
        skipped: bool,
        depth: usize,
        position: Option<usize>,
    ) {
        let c = self.colors;
        let status = if skipped {
            c.paint(c.dim, "skipped")
        } else if result {
            c.paint(c.green, "✓")
        } else {
            c.paint(c.red, "✗")
        };
        self.push_at(depth, format!("◀ {} {status}", c.paint(c.blue, label)), position);
    }

    fn trace_finish(&mut self, error: Option<&ParseError>) {
        let c = self.colors;
        let line = match error {
            None => c.paint(c.green, "✓ parsed"),
            Some(error) => c.paint(c.red, &format!("✗ {error}")),
        };
        self.lines.push(line);
    }
}
