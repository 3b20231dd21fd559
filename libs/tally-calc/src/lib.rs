//! tally-calc - Keypad calculator engine
//!
//! Accumulates keystrokes into an expression and evaluates it strictly left
//! to right, with no operator precedence.
//!
//! # Features
//!
//! - **Input validation**: which keystrokes may change the expression, and how
//! - **Evaluation**: `+ - * /` folded left to right over IEEE-754 doubles
//! - **Keypad controller**: `Calculator` owns a `DisplaySurface` and handles
//!   characters, `=`, backspace and clear
//!
//! # Example
//!
//! ```rust
//! use tally_calc::{evaluate, submit_character, Calculator, Evaluation};
//!
//! // Validator: one keystroke at a time
//! assert_eq!(submit_character("3+", '*'), "3*");
//! assert_eq!(submit_character("3.", '+'), "3.");
//!
//! // Evaluator: no precedence
//! assert_eq!(evaluate("2+3*4"), Evaluation::Value(20.0));
//!
//! // Controller: a third operand is never left pending
//! let mut calc = Calculator::new();
//! assert_eq!(calc.feed("5+2*"), "7*");
//! assert_eq!(calc.feed("3="), "21");
//! ```
//!
//! # Keys
//!
//! | Key | Characters | Effect |
//! |-----|------------|--------|
//! | `Char` | `0-9 . + - * /` | Validated and appended |
//! | `Evaluate` | `=`, newline | Text replaced by its result |
//! | `ClearLast` | `<`, backspace | Last character removed |
//! | `ClearAll` | `C`, `c` | Text cleared |

pub mod display;
pub mod error;
pub mod evaluator;
pub mod keypad;
pub mod operator;
pub mod token;
pub mod validator;

// Re-exports for convenience
pub use display::{DisplaySurface, MemoryDisplay};
pub use error::{CalcError, Result};
pub use evaluator::{evaluate, format_number, try_evaluate, Evaluation, ERROR_MARKER};
pub use keypad::{Calculator, Key};
pub use operator::{is_operator, Operator, OPERATOR_CHARS};
pub use token::{operand_count, tokenize, Token, Tokens};
pub use validator::{has_decimal, submit_character};
