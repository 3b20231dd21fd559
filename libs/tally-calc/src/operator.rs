//! The four keypad operators
//!
//! Exactly `+`, `-`, `*` and `/` are operators anywhere in the engine. The
//! tokenizer, the validator's backward scans and the evaluator all go through
//! [`Operator::from_char`] so the set is defined once.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CalcError, Result};

/// Operator characters, in keypad order
pub const OPERATOR_CHARS: [char; 4] = ['+', '-', '*', '/'];

/// Binary operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Sub,
    #[serde(rename = "*")]
    Mul,
    #[serde(rename = "/")]
    Div,
}

impl Operator {
    /// Map a character to its operator, if it is one
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None,
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    /// Whether the operator needs a left operand already on the display
    pub const fn needs_left_operand(self) -> bool {
        matches!(self, Self::Mul | Self::Div)
    }

    /// Apply the operator to an accumulator and an operand
    ///
    /// Division fails when the operand is exactly zero (either sign).
    pub fn apply(self, a: f64, b: f64) -> Result<f64> {
        match self {
            Self::Add => Ok(add(a, b)),
            Self::Sub => Ok(sub(a, b)),
            Self::Mul => Ok(mul(a, b)),
            Self::Div => div(a, b),
        }
    }
}

impl TryFrom<char> for Operator {
    type Error = CalcError;

    fn try_from(c: char) -> Result<Self> {
        Self::from_char(c).ok_or(CalcError::InvalidOperator(c))
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Whether `c` belongs to the operator set
pub const fn is_operator(c: char) -> bool {
    Operator::from_char(c).is_some()
}

/// Apply an operator given as a raw character
///
/// Fails with [`CalcError::InvalidOperator`] for anything outside the set.
pub fn apply(a: f64, b: f64, op: char) -> Result<f64> {
    Operator::try_from(op)?.apply(a, b)
}

/// Sum of two values
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// Difference of two values
pub fn sub(a: f64, b: f64) -> f64 {
    a - b
}

/// Product of two values
pub fn mul(a: f64, b: f64) -> f64 {
    a * b
}

/// Quotient of two values
pub fn div(a: f64, b: f64) -> Result<f64> {
    if b == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    Ok(a / b)
}
