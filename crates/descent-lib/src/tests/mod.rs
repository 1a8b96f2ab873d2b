//! End-to-end tests over complete grammars.
