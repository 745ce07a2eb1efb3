use crate::prelude::*;
use std::fmt::Write;

pub fn parse_sentence(line: &str) -> String {
    let category = classify(line);
    let mut sentence = format!("{} is {}.", line, category);
    if category.is_binary() {
        if let Some(parts) = decompose(line) {
            let _ = write!(
                sentence,
                " Its left hand side is {}, its connective is {}, \
                 and its right hand side is {}.",
                parts.left,
                parts.connective.token(),
                parts.right
            );
        }
    }
    sentence
}

/// `verdict` is `None` when the line is not a formula.
pub fn sat_sentence(line: &str, verdict: Option<Satisfiability>) -> String {
    match verdict {
        Some(verdict) => format!("{} {}.", line, verdict),
        None => format!("{} is not a formula.", line),
    }
}
