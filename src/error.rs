use crate::{eval::EvalError, parse::ParseError};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("{0}")]
    ParseError(#[from] ParseError),
    #[error("{0}")]
    EvalError(#[from] EvalError),
}
