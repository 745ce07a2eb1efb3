use crate::prelude::*;

/// The three parts of a fully-parenthesised binary formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decomposition<'text> {
    pub left: &'text str,
    pub connective: Connective,
    pub right: &'text str,
}

/// Split `(L c R)` at the first connective token outside nested brackets.
///
/// Operands are trimmed but not checked: the recognizer decides whether
/// they are formulas.
pub fn decompose(text: &str) -> Option<Decomposition> {
    if text.len() < 2 || !text.starts_with('(') || !text.ends_with(')') {
        return None;
    }
    let inner = &text[1..text.len() - 1];
    let mut depth = 0i32;
    for (index, byte) in inner.bytes().enumerate() {
        match byte {
            b'(' => depth += 1,
            b')' => depth -= 1,
            _ if depth == 0 => {
                let connective = inner
                    .get(index..index + 2)
                    .and_then(Connective::from_token);
                if let Some(connective) = connective {
                    let left = inner[..index].trim();
                    let right = inner[index + 2..].trim();
                    return Some(Decomposition {
                        left,
                        connective,
                        right,
                    });
                }
            }
            _ => {}
        }
    }
    None
}

pub fn left_operand(text: &str) -> &str {
    decompose(text).map_or("", |parts| parts.left)
}

pub fn connective_symbol(text: &str) -> &'static str {
    decompose(text).map_or("", |parts| parts.connective.token())
}

pub fn right_operand(text: &str) -> &str {
    decompose(text).map_or("", |parts| parts.right)
}
