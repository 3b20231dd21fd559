//! Left-to-right expression evaluator
//!
//! There is no operator precedence: `2+3*4` is `(2+3)*4 = 20`. The
//! accumulator starts at `0` with a pending `+`, every operator token replaces
//! the pending operator and every number token is folded into the
//! accumulator with it.
//!
//! ```rust
//! use tally_calc::{evaluate, Evaluation};
//!
//! assert_eq!(evaluate("2+3*4"), Evaluation::Value(20.0));
//! assert_eq!(evaluate("1/0"), Evaluation::Error);
//! assert_eq!(evaluate("").to_string(), "0");
//! ```

use std::fmt;

use serde::Serialize;
use tracing::{trace, warn};

use crate::error::{CalcError, Result};
use crate::operator::Operator;
use crate::token::{tokenize, Token};

/// Text written to the display when an evaluation fails
pub const ERROR_MARKER: &str = "Error";

/// Outcome of evaluating expression text
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Evaluation {
    Value(f64),
    /// The error marker; the cause has already been logged
    Error,
}

impl Evaluation {
    pub const fn value(&self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(*v),
            Self::Error => None,
        }
    }

    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}

impl From<Result<f64>> for Evaluation {
    fn from(result: Result<f64>) -> Self {
        match result {
            Ok(v) => Self::Value(v),
            Err(_) => Self::Error,
        }
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => f.write_str(&format_number(*v)),
            Self::Error => f.write_str(ERROR_MARKER),
        }
    }
}

/// Evaluate `text`, converting any failure into [`Evaluation::Error`]
pub fn evaluate(text: &str) -> Evaluation {
    match try_evaluate(text) {
        Ok(value) => Evaluation::Value(value),
        Err(e) => {
            warn!(text, error = %e, "Evaluation failed");
            Evaluation::Error
        },
    }
}

/// Evaluate `text`, keeping the failure cause
///
/// Fails on the first bad token; no partial result survives an error.
pub fn try_evaluate(text: &str) -> Result<f64> {
    let mut result = 0.0;
    let mut current = Operator::Add;

    for token in tokenize(text) {
        match token {
            Token::Operator(op) => current = op,
            Token::Number(raw) => {
                let operand = parse_operand(raw)?;
                let next = current.apply(result, operand)?;
                trace!(
                    accumulator = result,
                    op = %current,
                    operand,
                    result = next,
                    "fold"
                );
                result = next;
            },
        }
    }

    Ok(result)
}

fn parse_operand(raw: &str) -> Result<f64> {
    raw.parse::<f64>().map_err(|_| CalcError::invalid_number(raw))
}

/// Render a number the way it is written back to the display
///
/// Integral values have no fractional part and negative zero is `0`.
/// Non-finite values use names the tokenizer parses back.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}
