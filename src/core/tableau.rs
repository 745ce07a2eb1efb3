use crate::error::{Error, Result};
use crate::io::record::{Record, Silent};
use crate::prelude::*;
use crate::util::queue::Queue;
use std::fmt;

pub const MAX_CONSTANTS: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Satisfiability {
    Unsatisfiable = 0,
    Satisfiable = 1,
    Undetermined = 2,
}

const DESCRIPTIONS: [&str; 3] = [
    "is not satisfiable",
    "is satisfiable",
    "may or may not be satisfiable",
];

impl Satisfiability {
    pub fn code(self) -> usize {
        self as usize
    }

    pub fn description(self) -> &'static str {
        DESCRIPTIONS[self.code()]
    }
}

impl fmt::Display for Satisfiability {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableauConfig {
    /// Constants a single branch may introduce before it is given up on.
    pub max_constants: u32,
}

impl Default for TableauConfig {
    fn default() -> Self {
        let max_constants = MAX_CONSTANTS;
        Self { max_constants }
    }
}

/// Breadth-first search over branches, stopping at the first open one.
#[derive(Default)]
pub struct Tableau {
    config: TableauConfig,
    worklist: Queue<Branch>,
    undetermined: bool,
}

impl Tableau {
    pub fn new(config: TableauConfig) -> Self {
        let worklist = Queue::default();
        let undetermined = false;
        Self {
            config,
            worklist,
            undetermined,
        }
    }

    pub fn run<R: Record>(
        &mut self,
        start: Branch,
        record: &mut R,
    ) -> Satisfiability {
        self.worklist.clear();
        self.undetermined = false;
        self.enqueue(record, start);

        while let Some(branch) = self.worklist.dequeue() {
            if branch.is_closed() {
                record.closed(&branch);
                continue;
            }
            match branch.select() {
                Selection::Open => {
                    record.open(&branch);
                    return Satisfiability::Satisfiable;
                }
                Selection::Expand(formula, expansion) => {
                    self.expand(record, branch, formula, expansion)
                }
                Selection::Instantiate(universal, term) => {
                    self.instantiate(record, branch, universal, term)
                }
            }
        }

        if self.undetermined {
            Satisfiability::Undetermined
        } else {
            Satisfiability::Unsatisfiable
        }
    }

    fn enqueue<R: Record>(&mut self, record: &mut R, branch: Branch) {
        record.enqueued(&branch);
        self.worklist.enqueue(branch);
    }

    fn abandon<R: Record>(
        &mut self,
        record: &mut R,
        branch: &Branch,
        formula: &Formula,
    ) {
        record.abandoned(branch, formula);
        self.undetermined = true;
    }

    fn expand<R: Record>(
        &mut self,
        record: &mut R,
        mut branch: Branch,
        formula: Formula,
        expansion: Expansion,
    ) {
        match expansion {
            Expansion::Alpha(added) => {
                record.alpha(&formula, &added);
                branch.extend(added);
                branch.remove_all(&formula);
                self.enqueue(record, branch);
            }
            Expansion::Beta(left, right) => {
                record.beta(&formula, &left, &right);
                let mut other = branch.clone();
                branch.push(left);
                branch.remove_all(&formula);
                other.push(right);
                other.remove_all(&formula);
                self.enqueue(record, branch);
                self.enqueue(record, other);
            }
            Expansion::Delta(variable, body) => {
                if branch.num_constants() >= self.config.max_constants {
                    self.abandon(record, &branch, &formula);
                    return;
                }
                let constant = branch.fresh_constant();
                let instance = body.substitute(variable, constant);
                record.delta(&formula, &instance, constant);
                branch.push(instance);
                branch.remove_all(&formula);
                self.enqueue(record, branch);
            }
            Expansion::Irreducible => {
                self.abandon(record, &branch, &formula);
            }
        }
    }

    fn instantiate<R: Record>(
        &mut self,
        record: &mut R,
        mut branch: Branch,
        universal: Formula,
        term: Option<Term>,
    ) {
        let (variable, body) = match &universal {
            Formula::Quantified(Quantifier::Forall, variable, body) => {
                (*variable, body)
            }
            _ => {
                self.abandon(record, &branch, &universal);
                return;
            }
        };
        let term = match term {
            Some(term) => term,
            None if branch.num_constants() < self.config.max_constants => {
                branch.fresh_constant()
            }
            None => {
                self.abandon(record, &branch, &universal);
                return;
            }
        };
        let instance = body.substitute(variable, term);
        record.gamma(&universal, &instance, term);
        branch.push(instance);
        branch.mark_instantiated(universal, term);
        self.enqueue(record, branch);
    }
}

pub fn starting_branch(formula: Formula) -> Branch {
    Branch::new(vec![formula])
}

/// Like `starting_branch`, but for unchecked text.
pub fn starting_branch_from_text(text: &str) -> Result<Branch> {
    let formula =
        parse(text).ok_or_else(|| Error::NotAFormula(text.to_string()))?;
    Ok(starting_branch(formula))
}

pub fn is_satisfiable(branch: Branch) -> Satisfiability {
    Tableau::default().run(branch, &mut Silent)
}
