mod ctx;
mod error;
mod term;

pub type EResult<T> = Result<T, EvalError>;

pub use ctx::Context;
pub use error::EvalError;
pub use term::{Name, Term};
