use super::{ctx::Context, error::EvalError, EResult};
use crate::common::Float;
use crate::ops::{BinaryOperate, BinaryOperator, UnaryOperate, UnaryOperator};
use std::fmt;

/// A variable name; never empty.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Name(String);

impl Name {
    /// Fails with [`EvalError::EmptyName`] if `name` is empty.
    pub fn new(name: impl Into<String>) -> EResult<Self> {
        let name = name.into();
        if name.is_empty() {
            Err(EvalError::EmptyName("Variable"))
        } else {
            Ok(Self(name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A node of an expression tree.
///
/// Children are boxed and owned by their parent, so a tree never shares
/// subterms and dropping the root drops everything below it.
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    Constant(Float),
    Variable(Name),
    Binary {
        left: Box<Term>,
        op: BinaryOperator,
        right: Box<Term>,
    },
    Unary {
        op: UnaryOperator,
        term: Box<Term>,
    },
}

impl Term {
    pub fn constant(value: impl Into<Float>) -> Self {
        Self::Constant(value.into())
    }

    /// Fails with [`EvalError::EmptyName`] if `name` is empty.
    pub fn variable(name: impl Into<String>) -> EResult<Self> {
        Name::new(name).map(Self::Variable)
    }

    pub fn binary(left: Term, op: impl Into<BinaryOperator>, right: Term) -> Self {
        Self::Binary {
            left: Box::new(left),
            op: op.into(),
            right: Box::new(right),
        }
    }

    pub fn unary(op: impl Into<UnaryOperator>, term: Term) -> Self {
        Self::Unary {
            op: op.into(),
            term: Box::new(term),
        }
    }

    /// Evaluates the tree against `ctx`.
    ///
    /// Binary nodes evaluate the left operand before the right one, and the
    /// first failure is returned as is.
    pub fn eval(&self, ctx: &Context) -> EResult<Float> {
        match self {
            Self::Constant(x) => Ok(*x),
            Self::Variable(name) => ctx.get_value(name.as_str()),
            Self::Binary { left, op, right } => {
                let x = left.eval(ctx)?;
                let y = right.eval(ctx)?;
                op.compute(x, y)
            }
            Self::Unary { op, term } => {
                let x = term.eval(ctx)?;
                Ok(op.compute(x))
            }
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(x) => fmt::Display::fmt(x, f),
            Self::Variable(name) => fmt::Display::fmt(name, f),
            Self::Binary { left, op, right } => write!(f, "({}{}{})", left, op, right),
            Self::Unary { op, term } => write!(f, "{}({})", op, term),
        }
    }
}
