use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("not a formula: {0:?}")]
    NotAFormula(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
