use crate::common::{Digit, Float};
use crate::eval::Term;
use crate::ops::BinaryOperator;

/// Receives the grammar actions of a parse, in source order.
///
/// The parser calls [`open`](Sink::open) and [`operator`](Sink::operator) as it
/// consumes `(` and an operator, and combines finished operands through
/// [`group`](Sink::group) or [`binary`](Sink::binary) once the matching `)` is read.
pub trait Sink {
    type Output;

    fn constant(&mut self, value: Digit) -> Self::Output;

    fn open(&mut self) {}

    fn operator(&mut self, _op: BinaryOperator) {}

    fn group(&mut self, inner: Self::Output) -> Self::Output;

    fn binary(
        &mut self,
        left: Self::Output,
        op: BinaryOperator,
        right: Self::Output,
    ) -> Self::Output;
}

/// Builds a [`Term`] tree.
#[derive(Default, Debug, Copy, Clone)]
pub struct TermBuilder;

impl Sink for TermBuilder {
    type Output = Term;

    fn constant(&mut self, value: Digit) -> Self::Output {
        Term::constant(Float::from(value))
    }

    fn group(&mut self, inner: Self::Output) -> Self::Output {
        inner
    }

    fn binary(
        &mut self,
        left: Self::Output,
        op: BinaryOperator,
        right: Self::Output,
    ) -> Self::Output {
        Term::binary(left, op, right)
    }
}

/// Records the surface form of every consumed token.
#[derive(Default, Debug, Clone)]
pub struct TokenTrace {
    tokens: Vec<String>,
}

impl TokenTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<String> {
        self.tokens
    }
}

impl Sink for TokenTrace {
    type Output = ();

    fn constant(&mut self, value: Digit) {
        self.tokens.push(value.to_string());
    }

    fn open(&mut self) {
        self.tokens.push("(".to_string());
    }

    fn operator(&mut self, op: BinaryOperator) {
        self.tokens.push(op.to_string());
    }

    fn group(&mut self, _: ()) {
        self.tokens.push(")".to_string());
    }

    fn binary(&mut self, _: (), _: BinaryOperator, _: ()) {
        self.tokens.push(")".to_string());
    }
}
