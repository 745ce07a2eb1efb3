use crate::prelude::*;
use fnv::FnvHashSet;
use std::fmt;

/// A conjunctive set of assumptions, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Branch {
    formulas: Vec<Formula>,
    instances: Vec<(Formula, Term)>,
    constants: u32,
}

/// What the tableau should do next with a branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Expand(Formula, Expansion),
    Instantiate(Formula, Option<Term>),
    Open,
}

impl Branch {
    /// Free variables in `formulas` become rigid names.
    pub fn new(formulas: Vec<Formula>) -> Self {
        let formulas = formulas.iter().map(Formula::ground).collect();
        let instances = vec![];
        let constants = 0;
        Self {
            formulas,
            instances,
            constants,
        }
    }

    pub fn formulas(&self) -> &[Formula] {
        &self.formulas
    }

    pub fn len(&self) -> usize {
        self.formulas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formulas.is_empty()
    }

    pub fn num_constants(&self) -> u32 {
        self.constants
    }

    pub fn push(&mut self, formula: Formula) {
        self.formulas.push(formula);
    }

    pub fn extend<T: IntoIterator<Item = Formula>>(&mut self, formulas: T) {
        self.formulas.extend(formulas);
    }

    /// Drop every copy of `formula`, not just the one that was expanded.
    pub fn remove_all(&mut self, formula: &Formula) {
        self.formulas.retain(|other| other != formula);
    }

    pub fn fresh_constant(&mut self) -> Term {
        self.constants += 1;
        Term::Constant(self.constants)
    }

    pub fn mark_instantiated(&mut self, universal: Formula, term: Term) {
        self.instances.push((universal, term));
    }

    fn is_instantiated(&self, universal: &Formula, term: Term) -> bool {
        self.instances
            .iter()
            .any(|(other, used)| *used == term && other == universal)
    }

    /// Some atomic formula occurs both plain and negated.
    pub fn is_closed(&self) -> bool {
        let mut positive: FnvHashSet<&Formula> = FnvHashSet::default();
        let mut negative: FnvHashSet<&Formula> = FnvHashSet::default();
        for formula in &self.formulas {
            match formula {
                Formula::Negation(sub) if sub.is_atomic() => {
                    if positive.contains(&**sub) {
                        return true;
                    }
                    negative.insert(&**sub);
                }
                atomic if atomic.is_atomic() => {
                    if negative.contains(atomic) {
                        return true;
                    }
                    positive.insert(atomic);
                }
                _ => {}
            }
        }
        false
    }

    /// Names and constants the branch talks about, plus any constant it
    /// has introduced.
    pub fn universe(&self) -> Vec<Term> {
        let mut terms = vec![];
        for formula in &self.formulas {
            formula.free_terms(&mut terms);
        }
        for n in 1..=self.constants {
            let constant = Term::Constant(n);
            if !terms.contains(&constant) {
                terms.push(constant);
            }
        }
        terms
    }

    pub fn select(&self) -> Selection {
        for formula in &self.formulas {
            let expansion = expansion(formula);
            if expansion != Expansion::Irreducible {
                return Selection::Expand(formula.clone(), expansion);
            }
        }

        let universe = self.universe();
        let universals = self
            .formulas
            .iter()
            .filter(|formula| formula.category() == Category::Universal);
        for universal in universals {
            if universe.is_empty() {
                return Selection::Instantiate(universal.clone(), None);
            }
            let pending = universe
                .iter()
                .find(|term| !self.is_instantiated(universal, **term));
            if let Some(term) = pending {
                let term = Some(*term);
                return Selection::Instantiate(universal.clone(), term);
            }
        }
        Selection::Open
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{")?;
        let mut formulas = self.formulas.iter();
        if let Some(first) = formulas.next() {
            write!(f, "{}", first)?;
            for rest in formulas {
                write!(f, ", {}", rest)?;
            }
        }
        write!(f, "}}")
    }
}
