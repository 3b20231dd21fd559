//! Keypad controller
//!
//! Routes logical keystrokes to the validator and evaluator and writes the
//! result back to the display surface it owns.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::display::{DisplaySurface, MemoryDisplay};
use crate::evaluator::evaluate;
use crate::validator::{is_keypad_char, submit_character};

/// Logical keystroke delivered by an input source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "key", content = "char", rename_all = "snake_case")]
pub enum Key {
    /// Digit, decimal point or operator
    Char(char),
    /// `=`
    Evaluate,
    /// Backspace
    ClearLast,
    /// Clear the whole display
    ClearAll,
}

impl Key {
    /// Map a typed character to a key
    ///
    /// `=` and newline evaluate, `<` and backspace clear the last character,
    /// `C`/`c` clears everything. Anything else that is not on the keypad,
    /// whitespace included, maps to `None`.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '=' | '\n' => Some(Self::Evaluate),
            '<' | '\u{8}' => Some(Self::ClearLast),
            'C' | 'c' => Some(Self::ClearAll),
            c if is_keypad_char(c) => Some(Self::Char(c)),
            _ => None,
        }
    }

    /// Keys for every mappable character of `input`, in order
    pub fn parse_sequence(input: &str) -> impl Iterator<Item = Self> + '_ {
        input.chars().filter_map(Self::from_char)
    }
}

/// Calculator driving a display surface
///
/// ```rust
/// use tally_calc::Calculator;
///
/// let mut calc = Calculator::new();
/// for c in "5+2*".chars() {
///     calc.on_character(c);
/// }
/// assert_eq!(calc.text(), "7*");
/// ```
#[derive(Debug, Default, Clone)]
pub struct Calculator<D: DisplaySurface = MemoryDisplay> {
    display: D,
}

impl Calculator<MemoryDisplay> {
    /// Calculator with an empty in-memory display
    pub fn new() -> Self {
        Self::default()
    }
}

impl<D: DisplaySurface> Calculator<D> {
    /// Calculator driving an existing display
    pub fn with_display(display: D) -> Self {
        Self { display }
    }

    pub fn text(&self) -> &str {
        self.display.text()
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn into_display(self) -> D {
        self.display
    }

    /// Digit, decimal point or operator pressed
    pub fn on_character(&mut self, c: char) {
        let text = submit_character(self.display.text(), c);
        self.display.set_text(text);
    }

    /// Remove the last character, if any
    pub fn on_clear_last(&mut self) {
        let mut text = self.display.text().to_string();
        if text.pop().is_some() {
            debug!(text = %text, "cleared last character");
        }
        self.display.set_text(text);
    }

    pub fn on_clear_all(&mut self) {
        self.display.set_text(String::new());
    }

    /// `=` pressed: replace the text with its result or the error marker
    pub fn on_evaluate(&mut self) {
        let result = evaluate(self.display.text()).to_string();
        debug!(text = self.display.text(), %result, "evaluated");
        self.display.set_text(result);
    }

    pub fn on_key(&mut self, key: Key) {
        match key {
            Key::Char(c) => self.on_character(c),
            Key::Evaluate => self.on_evaluate(),
            Key::ClearLast => self.on_clear_last(),
            Key::ClearAll => self.on_clear_all(),
        }
    }

    /// Feed every key of `input` and return the final text
    pub fn feed(&mut self, input: &str) -> &str {
        for key in Key::parse_sequence(input) {
            self.on_key(key);
        }
        self.text()
    }
}
