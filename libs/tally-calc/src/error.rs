//! Error types for tally-calc

use thiserror::Error;

/// Evaluation errors
///
/// None of these ever reach the display as-is: the evaluator converts every
/// failure into the single error marker and logs the cause.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("Invalid operator: {0:?}")]
    InvalidOperator(char),

    #[error("Invalid number: {0:?}")]
    InvalidNumber(String),
}

impl CalcError {
    pub fn invalid_number(token: impl Into<String>) -> Self {
        Self::InvalidNumber(token.into())
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
