//! Named productions.
//!
//! Hand-written grammars call production functions directly. A registry
//! is for grammars assembled at runtime, or when the start rule is chosen
//! by name. Registered productions are wrapped in `enter`/`exit` under
//! their registered name, so their bodies contain only the matching logic:
//!
//! ```
//! use descent_lib::Rules;
//!
//! // List := "x" ("," List)?
//! let rules = Rules::new().register("List", |r, b| {
//!     if !b.match_token(&"x") {
//!         return false;
//!     }
//!     if b.match_token(&",") {
//!         return r.call(b, "List");
//!     }
//!     true
//! });
//!
//! let parsed = rules.parse(&["x", ",", "x"], "List").unwrap();
//! assert_eq!(parsed.tree.leaves(), [&"x", &",", &"x"]);
//! ```

use std::fmt;

use indexmap::IndexMap;

use crate::builder::{Builder, Parsed};
use crate::tracer::Tracer;
use crate::{Error, Result};

/// Body of a registered production. Receives the registry for calling
/// other productions by name.
pub type Production<T> = Box<dyn Fn(&Rules<T>, &mut Builder<'_, T>) -> bool>;

/// Productions by name, in registration order.
pub struct Rules<T> {
    productions: IndexMap<String, Production<T>>,
}

impl<T> Default for Rules<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Rules<T> {
    pub fn new() -> Self {
        Self {
            productions: IndexMap::new(),
        }
    }

    /// Adds a production. Registering a name again replaces the earlier
    /// body and keeps its original position.
    pub fn register<F>(mut self, name: impl Into<String>, production: F) -> Self
    where
        F: Fn(&Rules<T>, &mut Builder<'_, T>) -> bool + 'static,
    {
        self.productions.insert(name.into(), Box::new(production));
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.productions.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.productions.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.productions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.productions.is_empty()
    }

    /// Runs the production `name` from inside another production.
    ///
    /// Panics on an unknown name: a grammar referring to a production it
    /// never registered is broken. Use [`run`](Self::run) for names that
    /// come from outside the grammar.
    pub fn call(&self, builder: &mut Builder<'_, T>, name: &str) -> bool {
        let Some(production) = self.productions.get(name) else {
            panic!("no production named `{name}`");
        };
        builder.rule(name, |b| production(self, b))
    }

    /// Runs the production `name`, reporting an unknown name as an error.
    pub fn run(&self, builder: &mut Builder<'_, T>, name: &str) -> Result<bool> {
        if !self.contains(name) {
            return Err(Error::RuleNotFound(name.to_owned()));
        }
        Ok(self.call(builder, name))
    }

    /// Parses `tokens` starting from `start`.
    pub fn parse(&self, tokens: &[T], start: &str) -> Result<Parsed<T>> {
        self.parse_with(tokens, start, crate::NoopTracer)
    }

    /// Like [`parse`](Self::parse), reporting events to `tracer`.
    pub fn parse_with<'t>(
        &self,
        tokens: &'t [T],
        start: &str,
        tracer: impl Tracer + 't,
    ) -> Result<Parsed<T>> {
        let mut builder = Builder::new(tokens).with_tracer(tracer);
        self.run(&mut builder, start)?;
        Ok(builder.finish()?)
    }
}

impl<T> fmt::Debug for Rules<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rules")
            .field("productions", &self.productions.keys().collect::<Vec<_>>())
            .finish()
    }
}
