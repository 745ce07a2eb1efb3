use crate::prelude::*;

/// One tableau step for a single formula.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expansion {
    Alpha(Vec<Formula>),
    Beta(Formula, Formula),
    Delta(Variable, Formula),
    Irreducible,
}

/// The rule for everything except literals and universals.
///
/// Universals are instantiated separately since they stay on the branch.
pub fn expansion(formula: &Formula) -> Expansion {
    use Connective::*;
    use Formula::*;
    match formula {
        Binary(And, a, b) => {
            Expansion::Alpha(vec![(**a).clone(), (**b).clone()])
        }
        Binary(Or, a, b) => Expansion::Beta((**a).clone(), (**b).clone()),
        Binary(Implies, a, b) => Expansion::Beta(a.negate(), (**b).clone()),
        Quantified(Quantifier::Exists, x, a) => {
            Expansion::Delta(*x, (**a).clone())
        }
        Negation(sub) => match &**sub {
            Negation(a) => Expansion::Alpha(vec![(**a).clone()]),
            Binary(And, a, b) => Expansion::Beta(a.negate(), b.negate()),
            Binary(Or, a, b) => {
                Expansion::Alpha(vec![a.negate(), b.negate()])
            }
            Binary(Implies, a, b) => {
                Expansion::Alpha(vec![(**a).clone(), b.negate()])
            }
            Quantified(quantifier, x, a) => Expansion::Alpha(vec![
                Formula::quantified(quantifier.dual(), *x, a.negate()),
            ]),
            Proposition(_) | Atom(_, _, _) => Expansion::Irreducible,
        },
        Quantified(Quantifier::Forall, _, _)
        | Proposition(_)
        | Atom(_, _, _) => Expansion::Irreducible,
    }
}
