//! Keystroke validation
//!
//! Decides what a new character does to the expression text. The rules run
//! in a fixed order and the first match wins:
//!
//! 1. `*` or `/` on an empty display is rejected.
//! 2. An operator after a trailing `.` is rejected.
//! 3. An operator after an operator replaces it.
//! 4. A `.` is appended when the current operand has none.
//! 5. Otherwise a second `.` in the operand is rejected; an operator arriving
//!    with two operands on the display collapses them to their result first;
//!    then the character is appended.
//!
//! Rule 2 has to run before rule 3: `3.` followed by `+` stays `3.`.
//! Rejections are silent, the text is returned unchanged.

use tracing::debug;

use crate::evaluator::evaluate;
use crate::operator::{is_operator, Operator};
use crate::token::operand_count;

/// Characters the keypad can deliver
pub fn is_keypad_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.' || is_operator(c)
}

/// Last character of `text`
pub fn last_char(text: &str) -> Option<char> {
    text.chars().next_back()
}

/// Whether the operand being typed already has a decimal point
///
/// Scans backward and stops at the first operator.
pub fn has_decimal(text: &str) -> bool {
    for c in text.chars().rev() {
        if is_operator(c) {
            return false;
        }
        if c == '.' {
            return true;
        }
    }
    false
}

/// Apply one keystroke to `current` and return the new display text
pub fn submit_character(current: &str, c: char) -> String {
    if !is_keypad_char(c) {
        debug!(char = ?c, "rejected: not a keypad character");
        return current.to_string();
    }

    let op = Operator::from_char(c);
    let last = last_char(current);

    if current.is_empty() && op.is_some_and(Operator::needs_left_operand) {
        debug!(char = ?c, "rejected: operator needs a left operand");
        return current.to_string();
    }

    if last == Some('.') && op.is_some() {
        debug!(char = ?c, "rejected: operand ends with a decimal point");
        return current.to_string();
    }

    if op.is_some() && last.is_some_and(is_operator) {
        let mut text = current.to_string();
        text.pop();
        text.push(c);
        debug!(from = ?last, to = ?c, "replaced trailing operator");
        return text;
    }

    let decimal = has_decimal(current);

    if c == '.' && !decimal {
        return appended(current, c);
    }

    if c == '.' {
        debug!("rejected: operand already has a decimal point");
        return current.to_string();
    }

    if op.is_some() && operand_count(current) == 2 {
        let result = evaluate(current).to_string();
        debug!(text = current, %result, "collapsed pending operands");
        return appended(&result, c);
    }

    appended(current, c)
}

fn appended(text: &str, c: char) -> String {
    let mut text = text.to_string();
    text.push(c);
    text
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)]
mod tests {
    use super::*;

    #[test]
    fn test_mul_div_rejected_on_empty() {
        assert_eq!(submit_character("", '*'), "");
        assert_eq!(submit_character("", '/'), "");
    }

    #[test]
    fn test_add_sub_allowed_on_empty() {
        assert_eq!(submit_character("", '+'), "+");
        assert_eq!(submit_character("", '-'), "-");
    }

    #[test]
    fn test_operator_after_decimal_rejected() {
        assert_eq!(submit_character("3.", '+'), "3.");
        assert_eq!(submit_character("3.", '*'), "3.");
        assert_eq!(submit_character("1+2.", '-'), "1+2.");
    }

    #[test]
    fn test_operator_replaces_operator() {
        assert_eq!(submit_character("3+", '*'), "3*");
        assert_eq!(submit_character("3*", '-'), "3-");
        assert_eq!(submit_character("-", '+'), "+");
    }

    #[test]
    fn test_leading_minus_replaced_by_mul() {
        // Rule 1 only looks at an empty display
        assert_eq!(submit_character("-", '*'), "*");
    }

    #[test]
    fn test_decimal_point() {
        assert_eq!(submit_character("", '.'), ".");
        assert_eq!(submit_character("3", '.'), "3.");
        assert_eq!(submit_character("3.5+2", '.'), "3.5+2.");
        assert_eq!(submit_character("3.5+", '.'), "3.5+.");
    }

    #[test]
    fn test_second_decimal_rejected() {
        assert_eq!(submit_character("3.5", '.'), "3.5");
        assert_eq!(submit_character("3.", '.'), "3.");
        assert_eq!(submit_character("1+2.5", '.'), "1+2.5");
    }

    #[test]
    fn test_digits_append() {
        assert_eq!(submit_character("", '5'), "5");
        assert_eq!(submit_character("5", '0'), "50");
        assert_eq!(submit_character("5+2", '3'), "5+23");
        assert_eq!(submit_character("3.", '5'), "3.5");
    }

    #[test]
    fn test_operator_collapses_two_operands() {
        assert_eq!(submit_character("5+2", '*'), "7*");
        assert_eq!(submit_character("2.5*4", '-'), "10-");
        assert_eq!(submit_character("-5+2", '+'), "-3+");
    }

    #[test]
    fn test_operator_with_one_operand_appends() {
        assert_eq!(submit_character("5", '+'), "5+");
        assert_eq!(submit_character("-5", '*'), "-5*");
    }

    #[test]
    fn test_collapse_to_error_marker() {
        assert_eq!(submit_character("5/0", '+'), "Error+");
    }

    #[test]
    fn test_non_keypad_char_rejected() {
        assert_eq!(submit_character("12", 'x'), "12");
        assert_eq!(submit_character("12", '='), "12");
        assert_eq!(submit_character("", ' '), "");
    }

    #[test]
    fn test_has_decimal() {
        assert!(!has_decimal(""));
        assert!(has_decimal("3.5"));
        assert!(has_decimal("."));
        assert!(!has_decimal("3.5+2"));
        assert!(has_decimal("3+2.1"));
        assert!(!has_decimal("3.5*"));
    }

    #[test]
    fn test_last_char() {
        assert_eq!(last_char(""), None);
        assert_eq!(last_char("12+"), Some('+'));
    }
}
