mod error;
mod lexer;
mod parser;
mod sink;

pub use error::{Expected, ParseError, ParseErrorKind};
pub use lexer::{Token, Tokenizer};
pub use parser::{Parser, ParserConfig, DEFAULT_MAX_DEPTH};
pub use sink::{Sink, TermBuilder, TokenTrace};

use crate::eval::Term;

pub(crate) fn parse(s: &str, config: ParserConfig) -> Result<Term, ParseError> {
    Parser::with_config(s, config).parse(&mut TermBuilder)
}

pub(crate) fn trace(s: &str, config: ParserConfig) -> Result<Vec<String>, ParseError> {
    let mut trace = TokenTrace::new();
    Parser::with_config(s, config).parse(&mut trace)?;
    Ok(trace.into_tokens())
}
