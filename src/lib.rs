//! Parsing and evaluation of fully parenthesized arithmetic expressions.
//!
//! ```
//! use termcalc::{Context, Term};
//!
//! let term = termcalc::parse("((2+3)*4)").unwrap();
//! assert_eq!(term.eval(&Context::new()), Ok(20.0));
//!
//! let mut ctx = Context::new();
//! ctx.bind("x", -3.0).unwrap();
//! let abs = Term::unary(termcalc::ops::Abs, Term::variable("x").unwrap());
//! assert_eq!(abs.eval(&ctx), Ok(3.0));
//! ```

pub mod common;
mod error;
pub mod eval;
pub mod ops;
pub mod parse;

pub use error::Error;
pub use eval::{Context, EvalError, Name, Term};
pub use parse::{ParseError, ParserConfig};

/// Parses `s` into a [`Term`], rejecting trailing input.
pub fn parse(s: &str) -> Result<Term, ParseError> {
    parse::parse(s, ParserConfig::default())
}

/// Parses `s` without building a tree and returns the surface form of every
/// consumed token in order.
pub fn trace(s: &str) -> Result<Vec<String>, ParseError> {
    parse::trace(s, ParserConfig::default())
}

/// Parses `s` and evaluates it against `ctx`.
pub fn eval(s: &str, ctx: &Context) -> Result<common::Float, Error> {
    let term = parse(s)?;
    Ok(term.eval(ctx)?)
}
