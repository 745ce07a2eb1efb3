pub(crate) use crate::core::branch::{Branch, Selection};
pub(crate) use crate::core::category::Category;
pub(crate) use crate::core::decompose::decompose;
pub(crate) use crate::core::formula::{
    Connective, Family, Formula, Quantifier,
};
pub(crate) use crate::core::parser::{classify, parse};
pub(crate) use crate::core::rule::{expansion, Expansion};
pub(crate) use crate::core::symbol::{Predicate, Proposition, Term, Variable};
pub(crate) use crate::core::tableau::Satisfiability;
