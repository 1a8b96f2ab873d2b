//! LL(1) arithmetic: one token of lookahead, no backtracking.
//!
//! ```text
//! Expr   = Term Expr'
//! Expr'  = "+" Expr | "-" Expr | ε
//! Term   = Factor Term'
//! Term'  = "*" Term | "/" Term | ε
//! Factor = "(" Expr ")" | "-" Factor | Number
//! ```

use std::sync::LazyLock;

use regex_automata::meta::Regex;

use crate::Builder;

pub const EPSILON: &str = "ε";

static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d*\.\d+|\d+)$").expect("valid number pattern"));

pub fn is_number(token: &str) -> bool {
    NUMBER.is_match(token)
}

pub fn expr(b: &mut Builder<'_, &str>) -> bool {
    b.rule("Expr", |b| term(b) && expr_prime(b))
}

fn expr_prime(b: &mut Builder<'_, &str>) -> bool {
    b.rule("Expr'", |b| {
        if b.match_token(&"+") {
            return expr(b);
        }
        if b.match_token(&"-") {
            return expr(b);
        }
        b.add(EPSILON);
        true
    })
}

fn term(b: &mut Builder<'_, &str>) -> bool {
    b.rule("Term", |b| factor(b) && term_prime(b))
}

fn term_prime(b: &mut Builder<'_, &str>) -> bool {
    b.rule("Term'", |b| {
        if b.match_token(&"*") {
            return term(b);
        }
        if b.match_token(&"/") {
            return term(b);
        }
        b.add(EPSILON);
        true
    })
}

fn factor(b: &mut Builder<'_, &str>) -> bool {
    b.rule("Factor", |b| {
        if b.match_token(&"(") {
            return expr(b) && b.match_token(&")");
        }
        if b.match_token(&"-") {
            return factor(b);
        }
        number(b)
    })
}

pub fn number(b: &mut Builder<'_, &str>) -> bool {
    b.rule("Number", |b| match b.next_token() {
        Some(&token) if is_number(token) => {
            b.add(token);
            true
        }
        _ => false,
    })
}
