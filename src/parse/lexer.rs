use crate::common::Digit;
use crate::ops::{self, BinaryOperator};
use log::trace;
use logos::Logos;
use std::fmt;
use std::ops::Range;

#[derive(Logos, Debug, Copy, Clone, Eq, PartialEq)]
enum Lexeme {
    #[regex(r"[0-9]", |lex| lex.slice().as_bytes()[0] - b'0')]
    Digit(Digit),

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,

    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,

    #[error]
    Error,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Token {
    Constant(Digit),
    Add,
    Sub,
    Mul,
    Div,
    LeftParen,
    RightParen,
    Error,
    End,
}

impl Token {
    fn from_lexeme(lexeme: Lexeme) -> Self {
        match lexeme {
            Lexeme::Digit(d) => Self::Constant(d),
            Lexeme::Plus => Self::Add,
            Lexeme::Minus => Self::Sub,
            Lexeme::Star => Self::Mul,
            Lexeme::Slash => Self::Div,
            Lexeme::LeftParen => Self::LeftParen,
            Lexeme::RightParen => Self::RightParen,
            Lexeme::Error => Self::Error,
        }
    }

    pub fn as_binary_op(&self) -> Option<BinaryOperator> {
        Some(match self {
            Self::Add => ops::Add.into(),
            Self::Sub => ops::Sub.into(),
            Self::Mul => ops::Mul.into(),
            Self::Div => ops::Div.into(),
            _ => return None,
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Constant(_) => "<constant>",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::LeftParen => "(",
            Self::RightParen => ")",
            Self::Error => "<error>",
            Self::End => "<end>",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(d) => fmt::Display::fmt(d, f),
            _ => f.write_str(self.as_str()),
        }
    }
}

/// Pull-based scanner producing one [`Token`] per call.
///
/// [`Token::End`] and [`Token::Error`] are terminal: once either has been
/// returned, every later call returns it again without scanning further.
pub struct Tokenizer<'a> {
    lexer: logos::Lexer<'a, Lexeme>,
    halted: Option<Token>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            lexer: Lexeme::lexer(source),
            halted: None,
        }
    }

    pub fn next_token(&mut self) -> Token {
        if let Some(token) = self.halted {
            return token;
        }

        let token = self.lexer.next().map_or(Token::End, Token::from_lexeme);
        trace!("token {:?} at {:?}", token, self.span());
        if matches!(token, Token::End | Token::Error) {
            self.halted = Some(token);
        }
        token
    }

    /// Byte range of the most recently scanned token.
    pub fn span(&self) -> Range<usize> {
        self.lexer.span()
    }

    /// Byte offset of the most recently scanned token.
    pub fn position(&self) -> usize {
        self.span().start
    }

    /// Source text of the most recently scanned token; empty at the end.
    pub fn slice(&self) -> &'a str {
        self.lexer.slice()
    }
}

/// Yields tokens up to and including the first error; the end marker is not yielded.
impl Iterator for Tokenizer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if self.halted.is_some() {
            return None;
        }
        match self.next_token() {
            Token::End => None,
            token => Some(token),
        }
    }
}
