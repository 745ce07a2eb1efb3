pub mod branch;
pub mod category;
pub mod decompose;
pub mod formula;
pub mod parser;
pub mod rule;
pub mod symbol;
pub mod tableau;
