//! Arithmetic operators.
//!
//! Every operator is a stateless unit struct implementing [`BinaryOperate`] or
//! [`UnaryOperate`]. The [`BinaryOperator`] and [`UnaryOperator`] enums only
//! forward to those impls, so a new operator is one struct, one trait impl and
//! one variant line; no dispatch code changes.

use crate::common::Float;
use crate::eval::{EResult, EvalError};
use std::fmt;

macro_rules! unit_ops {
    ($($name:ident),+ $(,)?) => {
        $(
            #[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
            pub struct $name;
        )+
    };
}

unit_ops!(Add, Sub, Mul, Div, Neg, Abs);

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[enum_dispatch::enum_dispatch(BinaryOperate)]
pub enum BinaryOperator {
    Add(Add),
    Sub(Sub),
    Mul(Mul),
    Div(Div),
}

#[enum_dispatch::enum_dispatch]
pub trait BinaryOperate {
    fn symbol(&self) -> &'static str;

    fn compute(&self, x: Float, y: Float) -> EResult<Float>;
}

impl BinaryOperate for Add {
    fn symbol(&self) -> &'static str {
        "+"
    }

    fn compute(&self, x: Float, y: Float) -> EResult<Float> {
        Ok(x + y)
    }
}

impl BinaryOperate for Sub {
    fn symbol(&self) -> &'static str {
        "-"
    }

    fn compute(&self, x: Float, y: Float) -> EResult<Float> {
        Ok(x - y)
    }
}

impl BinaryOperate for Mul {
    fn symbol(&self) -> &'static str {
        "*"
    }

    fn compute(&self, x: Float, y: Float) -> EResult<Float> {
        Ok(x * y)
    }
}

impl BinaryOperate for Div {
    fn symbol(&self) -> &'static str {
        "/"
    }

    // A zero divisor is an error, never an infinity or NaN.
    fn compute(&self, x: Float, y: Float) -> EResult<Float> {
        if y == 0.0 {
            Err(EvalError::DivisionByZero)
        } else {
            Ok(x / y)
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[enum_dispatch::enum_dispatch(UnaryOperate)]
pub enum UnaryOperator {
    Neg(Neg),
    Abs(Abs),
}

#[enum_dispatch::enum_dispatch]
pub trait UnaryOperate {
    /// Prefix written before the parenthesized operand when displayed.
    fn prefix(&self) -> &'static str;

    fn compute(&self, x: Float) -> Float;
}

impl UnaryOperate for Neg {
    fn prefix(&self) -> &'static str {
        "-"
    }

    fn compute(&self, x: Float) -> Float {
        -x
    }
}

impl UnaryOperate for Abs {
    fn prefix(&self) -> &'static str {
        "abs"
    }

    fn compute(&self, x: Float) -> Float {
        if x < 0.0 {
            -x
        } else {
            x
        }
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_compute() {
        assert_eq!(BinaryOperator::from(Add).compute(5.0, 2.0), Ok(7.0));
        assert_eq!(BinaryOperator::from(Sub).compute(5.0, 2.0), Ok(3.0));
        assert_eq!(BinaryOperator::from(Mul).compute(5.0, 2.0), Ok(10.0));
        assert_eq!(BinaryOperator::from(Div).compute(5.0, 2.0), Ok(2.5));
    }

    #[test]
    fn test_div_by_zero() {
        assert_eq!(Div.compute(27.0, 0.0), Err(EvalError::DivisionByZero));
        assert_eq!(Div.compute(27.0, -0.0), Err(EvalError::DivisionByZero));
        assert_eq!(Div.compute(0.0, 4.0), Ok(0.0));
    }

    #[test]
    fn test_unary_compute() {
        assert_eq!(UnaryOperator::from(Neg).compute(5.0), -5.0);
        assert_eq!(UnaryOperator::from(Neg).compute(-5.0), 5.0);
        assert_eq!(UnaryOperator::from(Abs).compute(-15.0), 15.0);
        assert_eq!(UnaryOperator::from(Abs).compute(15.0), 15.0);
        assert_eq!(UnaryOperator::from(Abs).compute(0.0), 0.0);
    }

    #[test]
    fn test_display() {
        let ops: Vec<BinaryOperator> = vec![Add.into(), Sub.into(), Mul.into(), Div.into()];
        let shown: Vec<_> = ops.iter().map(ToString::to_string).collect();
        assert_eq!(shown, ["+", "-", "*", "/"]);
        assert_eq!(UnaryOperator::from(Abs).to_string(), "abs");
    }
}
