use crate::prelude::*;
use std::fmt;

/// Syntactic category of a line of text.
///
/// Discriminants are the indices used by the report sentences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Invalid = 0,
    Atom = 1,
    FirstOrderNegation = 2,
    Universal = 3,
    Existential = 4,
    FirstOrderBinary = 5,
    Proposition = 6,
    PropositionalNegation = 7,
    PropositionalBinary = 8,
}

const DESCRIPTIONS: [&str; 9] = [
    "not a formula",
    "an atom",
    "a negation of a first order logic formula",
    "a universally quantified formula",
    "an existentially quantified formula",
    "a binary connective first order formula",
    "a proposition",
    "a negation of a propositional formula",
    "a binary connective propositional formula",
];

impl Category {
    pub fn code(self) -> usize {
        self as usize
    }

    pub fn description(self) -> &'static str {
        DESCRIPTIONS[self.code()]
    }

    pub fn family(self) -> Option<Family> {
        match self {
            Category::Invalid => None,
            Category::Atom
            | Category::FirstOrderNegation
            | Category::Universal
            | Category::Existential
            | Category::FirstOrderBinary => Some(Family::FirstOrder),
            Category::Proposition
            | Category::PropositionalNegation
            | Category::PropositionalBinary => Some(Family::Propositional),
        }
    }

    pub fn is_binary(self) -> bool {
        matches!(
            self,
            Category::FirstOrderBinary | Category::PropositionalBinary
        )
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptions_follow_codes() {
        assert_eq!(Category::Invalid.description(), "not a formula");
        assert_eq!(Category::Universal.code(), 3);
        assert_eq!(
            Category::PropositionalBinary.to_string(),
            "a binary connective propositional formula"
        );
    }

    #[test]
    fn families_partition_valid_categories() {
        assert_eq!(Category::Invalid.family(), None);
        assert_eq!(Category::Existential.family(), Some(Family::FirstOrder));
        assert_eq!(
            Category::PropositionalNegation.family(),
            Some(Family::Propositional)
        );
        assert!(Category::FirstOrderBinary.is_binary());
        assert!(!Category::Atom.is_binary());
    }
}
