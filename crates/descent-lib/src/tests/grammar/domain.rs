//! Domain names (RFC 1034 §3.5) over single characters. Lookahead decides
//! how long a label is before committing to an alternative.
//!
//! ```text
//! domain      = subdomain | " "
//! subdomain   = label { "." label }
//! label       = letter [ [ ldh-str ] let-dig ]
//! ldh-str     = let-dig-hyp | let-dig-hyp ldh-str
//! let-dig-hyp = let-dig | "-"
//! let-dig     = letter | digit
//! ```

use crate::Builder;

pub fn domain(b: &mut Builder<'_, char>) -> bool {
    b.rule("domain", |b| subdomain(b) || b.match_token(&' '))
}

fn subdomain(b: &mut Builder<'_, char>) -> bool {
    b.rule("subdomain", |b| {
        while label(b) {
            if !b.match_token(&'.') {
                return true;
            }
        }
        false
    })
}

// label = letter | letter let-dig | letter ldh-str let-dig
fn label(b: &mut Builder<'_, char>) -> bool {
    b.rule("label", |b| {
        if b.check_or_end(&'.', 2) {
            return letter(b);
        }
        if b.check_or_end(&'.', 3) {
            return letter(b) && let_dig(b);
        }
        letter(b) && ldh_str(b) && let_dig(b)
    })
}

fn ldh_str(b: &mut Builder<'_, char>) -> bool {
    b.rule("ldh-str", |b| {
        if !let_dig_hyp(b) {
            return false;
        }
        if b.check_or_end(&'.', 2) {
            return true;
        }
        ldh_str(b)
    })
}

fn let_dig_hyp(b: &mut Builder<'_, char>) -> bool {
    b.rule("let-dig-hyp", |b| let_dig(b) || b.match_token(&'-'))
}

fn let_dig(b: &mut Builder<'_, char>) -> bool {
    b.rule("let-dig", |b| letter(b) || digit(b))
}

fn letter(b: &mut Builder<'_, char>) -> bool {
    b.rule("letter", |b| class(b, char::is_ascii_alphabetic))
}

fn digit(b: &mut Builder<'_, char>) -> bool {
    b.rule("digit", |b| class(b, char::is_ascii_digit))
}

fn class(b: &mut Builder<'_, char>, accepts: fn(&char) -> bool) -> bool {
    match b.next_token() {
        Some(&c) if accepts(&c) => {
            b.add(c);
            true
        }
        _ => false,
    }
}
