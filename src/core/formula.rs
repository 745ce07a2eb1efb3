use crate::prelude::*;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantifier {
    Exists,
    Forall,
}

impl Quantifier {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'E' => Some(Self::Exists),
            'A' => Some(Self::Forall),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::Exists => 'E',
            Self::Forall => 'A',
        }
    }

    pub fn dual(self) -> Self {
        match self {
            Self::Exists => Self::Forall,
            Self::Forall => Self::Exists,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Connective {
    And,
    Or,
    Implies,
}

impl Connective {
    pub const ALL: [Connective; 3] = [Self::And, Self::Or, Self::Implies];

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "/\\" => Some(Self::And),
            "\\/" => Some(Self::Or),
            "=>" => Some(Self::Implies),
            _ => None,
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            Self::And => "/\\",
            Self::Or => "\\/",
            Self::Implies => "=>",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Propositional,
    FirstOrder,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Formula {
    Proposition(Proposition),
    Atom(Predicate, Term, Term),
    Negation(Box<Formula>),
    Quantified(Quantifier, Variable, Box<Formula>),
    Binary(Connective, Box<Formula>, Box<Formula>),
}

impl Formula {
    pub fn atom(predicate: Predicate, left: Variable, right: Variable) -> Self {
        Formula::Atom(predicate, Term::Variable(left), Term::Variable(right))
    }

    pub fn negation(sub: Formula) -> Self {
        Formula::Negation(Box::new(sub))
    }

    pub fn quantified(
        quantifier: Quantifier,
        variable: Variable,
        sub: Formula,
    ) -> Self {
        Formula::Quantified(quantifier, variable, Box::new(sub))
    }

    pub fn binary(
        connective: Connective,
        left: Formula,
        right: Formula,
    ) -> Self {
        Formula::Binary(connective, Box::new(left), Box::new(right))
    }

    pub fn negate(&self) -> Self {
        Formula::negation(self.clone())
    }

    pub fn family(&self) -> Family {
        match self {
            Formula::Proposition(_) => Family::Propositional,
            Formula::Atom(_, _, _) | Formula::Quantified(_, _, _) => {
                Family::FirstOrder
            }
            Formula::Negation(sub) => sub.family(),
            Formula::Binary(_, left, _) => left.family(),
        }
    }

    pub fn category(&self) -> Category {
        match (self, self.family()) {
            (Formula::Proposition(_), _) => Category::Proposition,
            (Formula::Atom(_, _, _), _) => Category::Atom,
            (Formula::Negation(_), Family::Propositional) => {
                Category::PropositionalNegation
            }
            (Formula::Negation(_), Family::FirstOrder) => {
                Category::FirstOrderNegation
            }
            (Formula::Quantified(Quantifier::Exists, _, _), _) => {
                Category::Existential
            }
            (Formula::Quantified(Quantifier::Forall, _, _), _) => {
                Category::Universal
            }
            (Formula::Binary(_, _, _), Family::Propositional) => {
                Category::PropositionalBinary
            }
            (Formula::Binary(_, _, _), Family::FirstOrder) => {
                Category::FirstOrderBinary
            }
        }
    }

    pub fn is_atomic(&self) -> bool {
        matches!(self, Formula::Proposition(_) | Formula::Atom(_, _, _))
    }

    /// A proposition, an atom, or the negation of either.
    pub fn is_literal(&self) -> bool {
        match self {
            Formula::Negation(sub) => sub.is_atomic(),
            other => other.is_atomic(),
        }
    }

    /// Turn free variables into rigid names.
    ///
    /// Afterwards no term that can be substituted for a bound variable
    /// is itself bindable, so instantiation cannot capture.
    pub fn ground(&self) -> Self {
        self.ground_under(&mut vec![])
    }

    fn ground_under(&self, bound: &mut Vec<Variable>) -> Self {
        match self {
            Formula::Proposition(_) => self.clone(),
            Formula::Atom(predicate, left, right) => {
                let name = |term: Term| match term {
                    Term::Variable(x) if !bound.contains(&x) => Term::Name(x),
                    other => other,
                };
                Formula::Atom(*predicate, name(*left), name(*right))
            }
            Formula::Negation(sub) => {
                Formula::negation(sub.ground_under(bound))
            }
            Formula::Quantified(quantifier, x, sub) => {
                bound.push(*x);
                let sub = sub.ground_under(bound);
                bound.pop();
                Formula::quantified(*quantifier, *x, sub)
            }
            Formula::Binary(connective, left, right) => Formula::binary(
                *connective,
                left.ground_under(bound),
                right.ground_under(bound),
            ),
        }
    }

    /// Replace free occurrences of `variable` by `term`.
    ///
    /// `term` must be a name or constant.
    pub fn substitute(&self, variable: Variable, term: Term) -> Self {
        debug_assert!(
            !matches!(term, Term::Variable(_)),
            "substituting a bindable variable"
        );
        let bound = Term::Variable(variable);
        let replace = |t: Term| if t == bound { term } else { t };
        match self {
            Formula::Proposition(_) => self.clone(),
            Formula::Atom(predicate, left, right) => {
                Formula::Atom(*predicate, replace(*left), replace(*right))
            }
            Formula::Negation(sub) => {
                Formula::negation(sub.substitute(variable, term))
            }
            Formula::Quantified(_, shadow, _) if *shadow == variable => {
                self.clone()
            }
            Formula::Quantified(quantifier, x, sub) => Formula::quantified(
                *quantifier,
                *x,
                sub.substitute(variable, term),
            ),
            Formula::Binary(connective, left, right) => Formula::binary(
                *connective,
                left.substitute(variable, term),
                right.substitute(variable, term),
            ),
        }
    }

    /// Free variables, names and constants, in order of first occurrence.
    pub fn free_terms(&self, terms: &mut Vec<Term>) {
        self.collect_terms(&mut vec![], terms)
    }

    fn collect_terms(&self, bound: &mut Vec<Variable>, terms: &mut Vec<Term>) {
        match self {
            Formula::Proposition(_) => {}
            Formula::Atom(_, left, right) => {
                for term in [*left, *right].iter() {
                    let is_bound = match term {
                        Term::Variable(x) => bound.contains(x),
                        Term::Name(_) | Term::Constant(_) => false,
                    };
                    if !is_bound && !terms.contains(term) {
                        terms.push(*term);
                    }
                }
            }
            Formula::Negation(sub) => sub.collect_terms(bound, terms),
            Formula::Quantified(_, x, sub) => {
                bound.push(*x);
                sub.collect_terms(bound, terms);
                bound.pop();
            }
            Formula::Binary(_, left, right) => {
                left.collect_terms(bound, terms);
                right.collect_terms(bound, terms);
            }
        }
    }

    /// Number of connectives, quantifiers and negations.
    pub fn weight(&self) -> usize {
        match self {
            Formula::Proposition(_) | Formula::Atom(_, _, _) => 0,
            Formula::Negation(sub) | Formula::Quantified(_, _, sub) => {
                1 + sub.weight()
            }
            Formula::Binary(_, left, right) => {
                1 + left.weight() + right.weight()
            }
        }
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Formula::Proposition(p) => write!(f, "{}", p),
            Formula::Atom(predicate, left, right) => {
                write!(f, "{}({},{})", predicate, left, right)
            }
            Formula::Negation(sub) => write!(f, "~{}", sub),
            Formula::Quantified(quantifier, x, sub) => {
                write!(f, "{}{}{}", quantifier.as_char(), x, sub)
            }
            Formula::Binary(connective, left, right) => {
                write!(f, "({}{}{})", left, connective.token(), right)
            }
        }
    }
}
