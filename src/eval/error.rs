use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    /// An empty variable name was given; the payload names the operation that rejected it.
    #[error("the variable's name is empty in {0}")]
    EmptyName(&'static str),
    #[error("the variable '{0}' is not bound to a value")]
    NotBound(String),
    #[error("cannot divide by zero")]
    DivisionByZero,
}
