//! Parse and debug trees.
//!
//! Both trees are plain owned structures: every node owns its children and
//! a subtree moves into its parent exactly once. The runtime builds them
//! bottom-up, but they are ordinary values and can be constructed by hand
//! (handy for expected-value assertions).

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

/// Label of a parse tree node.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Symbol<T> {
    /// Non-terminal, named by the production that built it.
    Rule(String),
    /// Terminal, carrying the matched token.
    Token(T),
}

impl<T> Symbol<T> {
    pub fn is_rule(&self) -> bool {
        matches!(self, Symbol::Rule(_))
    }

    pub fn is_token(&self) -> bool {
        matches!(self, Symbol::Token(_))
    }

    /// Rule name, if this is a non-terminal.
    pub fn as_rule(&self) -> Option<&str> {
        match self {
            Symbol::Rule(name) => Some(name),
            Symbol::Token(_) => None,
        }
    }

    /// Matched token, if this is a terminal.
    pub fn as_token(&self) -> Option<&T> {
        match self {
            Symbol::Rule(_) => None,
            Symbol::Token(token) => Some(token),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Symbol<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Rule(name) => f.write_str(name),
            Symbol::Token(token) => token.fmt(f),
        }
    }
}

/// Node of the derivation tree.
///
/// Non-terminal nodes carry [`Symbol::Rule`]; leaves added by matching or by
/// an explicit `add` carry [`Symbol::Token`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ParseTree<T> {
    symbol: Symbol<T>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<ParseTree<T>>,
}

impl<T> ParseTree<T> {
    pub fn new(symbol: Symbol<T>) -> Self {
        Self {
            symbol,
            children: Vec::new(),
        }
    }

    /// Non-terminal node without children.
    pub fn rule(name: impl Into<String>) -> Self {
        Self::new(Symbol::Rule(name.into()))
    }

    /// Terminal leaf.
    pub fn token(token: T) -> Self {
        Self::new(Symbol::Token(token))
    }

    /// Appends children, ignoring `None` entries.
    ///
    /// Lets callers assemble a tree from optional parts without filtering
    /// first:
    ///
    /// ```
    /// use descent_core::ParseTree;
    ///
    /// let tree = ParseTree::rule("E").with_children([
    ///     Some(ParseTree::token("a")),
    ///     None,
    ///     Some(ParseTree::token("b")),
    /// ]);
    /// assert_eq!(tree.children().len(), 2);
    /// ```
    pub fn with_children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Option<ParseTree<T>>>,
    {
        self.children
            .extend(children.into_iter().filter_map(Into::<Option<ParseTree<T>>>::into));
        self
    }

    pub fn symbol(&self) -> &Symbol<T> {
        &self.symbol
    }

    pub fn children(&self) -> &[ParseTree<T>] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Appends `child` as the last child.
    pub fn add(&mut self, child: ParseTree<T>) {
        self.children.push(child);
    }

    /// Removes and returns the child at `index`, keeping the order of the rest.
    pub fn detach(&mut self, index: usize) -> Option<ParseTree<T>> {
        (index < self.children.len()).then(|| self.children.remove(index))
    }

    /// Drops every child.
    pub fn clear(&mut self) {
        self.children.clear();
    }

    /// Terminal tokens in left-to-right order.
    pub fn leaves(&self) -> Vec<&T> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a T>) {
        if let Symbol::Token(token) = &self.symbol {
            out.push(token);
        }
        for child in &self.children {
            child.collect_leaves(out);
        }
    }

    pub fn into_parts(self) -> (Symbol<T>, Vec<ParseTree<T>>) {
        (self.symbol, self.children)
    }
}

/// Node of the trace tree.
///
/// Records every attempt, successful or not. Non-terminal labels are
/// annotated with the production's result once it exits, e.g. `Expr(true)`;
/// match attempts are leaves such as `+ = +` or `) ≠ *`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DebugTree {
    label: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<DebugTree>,
}

impl DebugTree {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            children: Vec::new(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn children(&self) -> &[DebugTree] {
        &self.children
    }

    pub fn add(&mut self, child: DebugTree) {
        self.children.push(child);
    }

    /// Appends `suffix` to the label.
    pub fn annotate(&mut self, suffix: &str) {
        self.label.push_str(suffix);
    }
}

/// Read-only view shared by both tree kinds, used by [`walk`](crate::walk)
/// and [`render`](crate::render).
pub trait TreeNode: Sized {
    fn label(&self) -> Cow<'_, str>;

    fn children(&self) -> &[Self];

    /// Whether the node stands for a terminal, used for coloring.
    fn is_terminal(&self) -> bool {
        self.children().is_empty()
    }

    /// Whether the node records a failed attempt, used for coloring.
    fn is_failure(&self) -> bool {
        false
    }
}

impl<T: fmt::Display> TreeNode for ParseTree<T> {
    fn label(&self) -> Cow<'_, str> {
        match &self.symbol {
            Symbol::Rule(name) => Cow::Borrowed(name),
            Symbol::Token(token) => Cow::Owned(token.to_string()),
        }
    }

    fn children(&self) -> &[Self] {
        &self.children
    }

    fn is_terminal(&self) -> bool {
        self.symbol.is_token()
    }
}

impl TreeNode for DebugTree {
    fn label(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.label)
    }

    fn children(&self) -> &[Self] {
        &self.children
    }

    fn is_failure(&self) -> bool {
        self.label.ends_with("(false)") || self.label.contains(" ≠ ")
    }
}

impl<T: fmt::Display> fmt::Display for ParseTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::render(self, crate::Colors::OFF))
    }
}

impl fmt::Display for DebugTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::render(self, crate::Colors::OFF))
    }
}
