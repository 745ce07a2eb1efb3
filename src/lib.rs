//! Recognizer and semantic tableau for a small logical language.
//!
//! Lines of text are classified into one of nine syntactic categories,
//! split into operands when they are binary, and checked for
//! satisfiability by a breadth-first tableau search.

pub mod core;
pub mod error;
pub mod io;
mod prelude;
pub mod statistics;
pub mod util;

pub use crate::core::branch::Branch;
pub use crate::core::category::Category;
pub use crate::core::decompose::{
    connective_symbol, decompose, left_operand, right_operand, Decomposition,
};
pub use crate::core::formula::{Connective, Family, Formula, Quantifier};
pub use crate::core::parser::{classify, parse};
pub use crate::core::symbol::{Predicate, Proposition, Term, Variable};
pub use crate::core::tableau::{
    is_satisfiable, starting_branch, starting_branch_from_text,
    Satisfiability, Tableau, TableauConfig, MAX_CONSTANTS,
};
pub use crate::error::{Error, Result};
