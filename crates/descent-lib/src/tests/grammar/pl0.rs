//! PL/0 over a typed token enum.
//!
//! ```text
//! program   = block "." .
//! block     = ["const" ident "=" number {"," ident "=" number} ";"]
//!             ["var" ident {"," ident} ";"]
//!             {"procedure" ident ";" block ";"} statement .
//! statement = ident ":=" expression | "!" expression | "?" ident
//!           | "call" ident | "begin" statement {";" statement} "end"
//!           | "if" condition "then" statement
//!           | "while" condition "do" statement .
//! condition = "odd" expression
//!           | expression ("="|"#"|"<"|"<="|">"|">=") expression .
//! expression = ["+"|"-"] term {("+"|"-") term} .
//! term      = factor {("*"|"/") factor} .
//! factor    = ident | number | "(" expression ")" .
//! ```

use std::fmt;

use crate::Builder;

const KEYWORDS: &[&str] = &[
    "const",
    "var",
    "procedure",
    "call",
    "begin",
    "end",
    "if",
    "then",
    "while",
    "do",
    "odd",
];

const SYMBOLS: &[&str] = &[
    ":=", "<=", ">=", ".", ",", ";", "!", "?", "=", "#", "<", ">", "+", "-", "*", "/", "(", ")",
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tok {
    /// Keyword or punctuation, always lowercase.
    Fixed(&'static str),
    Ident(String),
    Number(u64),
}

impl fmt::Display for Tok {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tok::Fixed(text) => f.write_str(text),
            Tok::Ident(name) => f.write_str(name),
            Tok::Number(value) => value.fmt(f),
        }
    }
}

/// Keyword or symbol token. Panics on text the lexer never produces.
pub fn t(text: &str) -> Tok {
    KEYWORDS
        .iter()
        .chain(SYMBOLS)
        .copied()
        .find(|fixed| *fixed == text)
        .map(Tok::Fixed)
        .unwrap_or_else(|| panic!("not a PL/0 keyword or symbol: {text}"))
}

/// Splits PL/0 source into tokens. Keywords are case-insensitive.
pub fn lex(source: &str) -> Vec<Tok> {
    let mut tokens = Vec::new();
    let mut rest = source.trim_start();
    while let Some(c) = rest.chars().next() {
        let len = if c.is_ascii_alphabetic() {
            let len = rest
                .find(|c: char| !c.is_ascii_alphanumeric())
                .unwrap_or(rest.len());
            let word = &rest[..len];
            let lower = word.to_ascii_lowercase();
            match KEYWORDS.iter().copied().find(|kw| *kw == lower) {
                Some(kw) => tokens.push(Tok::Fixed(kw)),
                None => tokens.push(Tok::Ident(word.to_owned())),
            }
            len
        } else if c.is_ascii_digit() {
            let len = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
            tokens.push(Tok::Number(rest[..len].parse().expect("digits only")));
            len
        } else {
            let symbol = SYMBOLS
                .iter()
                .copied()
                .find(|symbol| rest.starts_with(symbol))
                .unwrap_or_else(|| panic!("unexpected character {c:?}"));
            tokens.push(Tok::Fixed(symbol));
            symbol.len()
        };
        rest = rest[len..].trim_start();
    }
    tokens
}

pub fn program(b: &mut Builder<'_, Tok>) -> bool {
    b.rule("Program", |b| block(b) && b.match_token(&t(".")))
}

fn block(b: &mut Builder<'_, Tok>) -> bool {
    b.rule("Block", |b| {
        if b.match_token(&t("const")) {
            loop {
                if !(ident(b) && b.match_token(&t("=")) && number(b)) {
                    return false;
                }
                if b.match_token(&t(",")) {
                    continue;
                }
                if b.match_token(&t(";")) {
                    break;
                }
                return false;
            }
        }
        if b.match_token(&t("var")) {
            loop {
                if !ident(b) {
                    return false;
                }
                if b.match_token(&t(",")) {
                    continue;
                }
                if b.match_token(&t(";")) {
                    break;
                }
                return false;
            }
        }
        while b.match_token(&t("procedure")) {
            if !(ident(b) && b.match_token(&t(";")) && block(b) && b.match_token(&t(";"))) {
                return false;
            }
        }
        statement(b)
    })
}

fn statement(b: &mut Builder<'_, Tok>) -> bool {
    b.rule("Statement", |b| {
        if ident(b) {
            return b.match_token(&t(":=")) && expression(b);
        }
        if b.match_token(&t("!")) {
            return expression(b);
        }
        if b.match_token(&t("?")) || b.match_token(&t("call")) {
            return ident(b);
        }
        if b.match_token(&t("begin")) {
            while statement(b) {
                if !b.match_token(&t(";")) {
                    return b.match_token(&t("end"));
                }
            }
            return false;
        }
        if b.match_token(&t("if")) {
            return condition(b) && b.match_token(&t("then")) && statement(b);
        }
        if b.match_token(&t("while")) {
            return condition(b) && b.match_token(&t("do")) && statement(b);
        }
        false
    })
}

fn condition(b: &mut Builder<'_, Tok>) -> bool {
    b.rule("Condition", |b| {
        if b.match_token(&t("odd")) {
            return expression(b);
        }
        if !expression(b) {
            return false;
        }
        let relation = ["=", "#", "<", "<=", ">", ">="]
            .into_iter()
            .any(|op| b.match_token(&t(op)));
        relation && expression(b)
    })
}

fn expression(b: &mut Builder<'_, Tok>) -> bool {
    b.rule("Expression", |b| {
        let _sign = b.match_token(&t("+")) || b.match_token(&t("-"));
        while term(b) {
            if !(b.match_token(&t("+")) || b.match_token(&t("-"))) {
                return true;
            }
        }
        false
    })
}

fn term(b: &mut Builder<'_, Tok>) -> bool {
    b.rule("Term", |b| {
        while factor(b) {
            if !(b.match_token(&t("*")) || b.match_token(&t("/"))) {
                return true;
            }
        }
        false
    })
}

fn factor(b: &mut Builder<'_, Tok>) -> bool {
    b.rule("Factor", |b| {
        if ident(b) || number(b) {
            return true;
        }
        b.match_token(&t("(")) && expression(b) && b.match_token(&t(")"))
    })
}

fn ident(b: &mut Builder<'_, Tok>) -> bool {
    b.rule("Ident", |b| match b.next_token() {
        Some(token @ Tok::Ident(_)) => {
            b.add(token.clone());
            true
        }
        _ => false,
    })
}

fn number(b: &mut Builder<'_, Tok>) -> bool {
    b.rule("Number", |b| match b.next_token() {
        Some(token @ Tok::Number(_)) => {
            b.add(token.clone());
            true
        }
        _ => false,
    })
}
