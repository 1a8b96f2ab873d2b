//! Arithmetic with unfactored alternatives. Every alternative but the last
//! is tried, abandoned with `backtrack`, and retried from the start.
//!
//! ```text
//! Expr   = Term "+" Expr | Term "-" Expr | Term
//! Term   = Factor "*" Term | Factor "/" Term | Factor
//! Factor = "(" Expr ")" | "-" Factor | Number
//! ```

use crate::Builder;

use super::arithmetic::number;

pub fn expr(b: &mut Builder<'_, &str>) -> bool {
    b.rule("Expr", |b| {
        if term(b) && b.match_token(&"+") && expr(b) {
            return true;
        }
        b.backtrack();
        if term(b) && b.match_token(&"-") && expr(b) {
            return true;
        }
        b.backtrack();
        term(b)
    })
}

fn term(b: &mut Builder<'_, &str>) -> bool {
    b.rule("Term", |b| {
        if factor(b) && b.match_token(&"*") && term(b) {
            return true;
        }
        b.backtrack();
        if factor(b) && b.match_token(&"/") && term(b) {
            return true;
        }
        b.backtrack();
        factor(b)
    })
}

fn factor(b: &mut Builder<'_, &str>) -> bool {
    b.rule("Factor", |b| {
        if b.match_token(&"(") && expr(b) && b.match_token(&")") {
            return true;
        }
        b.backtrack();
        if b.match_token(&"-") && factor(b) {
            return true;
        }
        b.backtrack();
        number(b)
    })
}
