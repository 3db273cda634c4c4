use super::lexer::Token;
use crate::common::NonEmpty;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
#[error("error at position {position} ({found}): {kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub position: usize,
    pub found: Token,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    #[error("{} expected", .expected.fmt_expected())]
    UnexpectedToken { expected: NonEmpty<Expected> },
    #[error("unrecognized character {found:?}; {} expected", .expected.fmt_expected())]
    InvalidCharacter {
        found: char,
        expected: NonEmpty<Expected>,
    },
    /// An unrecognized character after a complete expression.
    #[error("unrecognized character {0:?} after expression")]
    TrailingCharacter(char),
    #[error("parenthesis not balanced")]
    Unbalanced,
    #[error("expression nested more than {limit} levels deep")]
    TooDeep { limit: usize },
}

/// What the parser was ready to accept when it gave up.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Expected {
    LeftParen,
    Constant,
    Operator,
    RightParen,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::LeftParen => "left parenthesis",
            Self::Constant => "constant",
            Self::Operator => "operator",
            Self::RightParen => "right parenthesis",
        })
    }
}

trait FormatExpected {
    fn fmt_expected(&self) -> String;
}

impl FormatExpected for [Expected] {
    fn fmt_expected(&self) -> String {
        match self {
            [] => unreachable!("NonEmpty cannot be empty"),
            [a] => a.to_string(),
            [a, b] => format!("{} or {}", a, b),
            s => {
                let init: Vec<_> = s[..s.len() - 1].iter().map(ToString::to_string).collect();
                format!("{}, or {}", init.join(", "), &s[s.len() - 1])
            }
        }
    }
}
