use super::error::{Expected, ParseError, ParseErrorKind};
use super::lexer::{Token, Tokenizer};
use super::sink::Sink;
use crate::common::{vec1, NonEmpty};
use log::{debug, trace};

type PResult<T> = Result<T, ParseError>;

/// Nesting bound used by [`Parser::new`].
pub const DEFAULT_MAX_DEPTH: usize = 256;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ParserConfig {
    /// Maximum number of open parentheses at any point; `None` for no limit.
    pub max_depth: Option<usize>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: Some(DEFAULT_MAX_DEPTH),
        }
    }
}

/// Recursive-descent parser for fully parenthesized expressions:
///
/// ```text
/// expression := constant
///             | '(' expression ')'
///             | '(' expression operator expression ')'
///   operator := '+' | '-' | '*' | '/'
///   constant := '0' | '1' | ... | '9'
/// ```
///
/// The grammar is LL(1); the parser holds exactly one token of lookahead.
pub struct Parser<'a> {
    tokenizer: Tokenizer<'a>,
    current: Token,
    depth: usize,
    config: ParserConfig,
}

impl<'a> Parser<'a> {
    pub fn new(s: &'a str) -> Self {
        Self::with_config(s, ParserConfig::default())
    }

    pub fn new_bounded(s: &'a str, max_depth: usize) -> Self {
        Self::with_config(
            s,
            ParserConfig {
                max_depth: Some(max_depth),
            },
        )
    }

    pub fn new_unbounded(s: &'a str) -> Self {
        Self::with_config(s, ParserConfig { max_depth: None })
    }

    pub fn with_config(s: &'a str, config: ParserConfig) -> Self {
        let mut tokenizer = Tokenizer::new(s);
        let current = tokenizer.next_token();
        Self {
            tokenizer,
            current,
            depth: 0,
            config,
        }
    }

    /// The lookahead token.
    pub fn current(&self) -> Token {
        self.current
    }

    /// Parses one expression and then requires the input to be exhausted.
    pub fn parse<S: Sink>(mut self, sink: &mut S) -> PResult<S::Output> {
        let output = self.parse_expression(sink)?;
        self.finish()?;
        Ok(output)
    }

    /// Checks that nothing follows the expression parsed so far.
    pub fn finish(&self) -> PResult<()> {
        match self.current {
            Token::End => {
                debug!("parsed {} bytes", self.tokenizer.position());
                Ok(())
            }
            Token::Error => {
                let c = self.bad_character();
                self.error(ParseErrorKind::TrailingCharacter(c))
            }
            _ => self.error(ParseErrorKind::Unbalanced),
        }
    }

    /// Parses a single expression starting at the lookahead, leaving any
    /// remaining input unread.
    pub fn parse_expression<S: Sink>(&mut self, sink: &mut S) -> PResult<S::Output> {
        match self.current {
            Token::Constant(d) => {
                trace!("constant {}", d);
                self.advance();
                Ok(sink.constant(d))
            }
            Token::LeftParen => {
                self.enter()?;
                let ret = self.parse_parenthesized(sink);
                self.depth -= 1;
                ret
            }
            _ => self.unexpected(vec1![Expected::LeftParen, Expected::Constant]),
        }
    }

    fn parse_parenthesized<S: Sink>(&mut self, sink: &mut S) -> PResult<S::Output> {
        self.advance();
        sink.open();
        let left = self.parse_expression(sink)?;

        if self.current == Token::RightParen {
            self.advance();
            return Ok(sink.group(left));
        }

        let op = match self.current.as_binary_op() {
            Some(op) => op,
            None => return self.unexpected(vec1![Expected::Operator, Expected::RightParen]),
        };
        trace!("operator {}", op);
        self.advance();
        sink.operator(op);
        let right = self.parse_expression(sink)?;

        if self.current == Token::RightParen {
            self.advance();
            Ok(sink.binary(left, op, right))
        } else {
            self.unexpected(vec1![Expected::RightParen])
        }
    }

    fn advance(&mut self) {
        self.current = self.tokenizer.next_token();
    }

    fn enter(&mut self) -> PResult<()> {
        match self.config.max_depth {
            Some(limit) if self.depth >= limit => self.error(ParseErrorKind::TooDeep { limit }),
            _ => {
                self.depth += 1;
                Ok(())
            }
        }
    }

    fn error<T>(&self, kind: ParseErrorKind) -> PResult<T> {
        Err(ParseError {
            kind,
            position: self.tokenizer.position(),
            found: self.current,
        })
    }

    fn bad_character(&self) -> char {
        self.tokenizer
            .slice()
            .chars()
            .next()
            .unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    fn unexpected<T>(&self, expected: NonEmpty<Expected>) -> PResult<T> {
        if self.current == Token::Error {
            let found = self.bad_character();
            self.error(ParseErrorKind::InvalidCharacter { found, expected })
        } else {
            self.error(ParseErrorKind::UnexpectedToken { expected })
        }
    }
}
