//! Whole keystroke sessions driven through the public API

#![allow(clippy::disallowed_methods)]

use tally_calc::{
    evaluate, has_decimal, is_operator, operand_count, Calculator, DisplaySurface, Evaluation,
    Key, MemoryDisplay,
};

/// Display that records every write, to check one write per keystroke
#[derive(Default)]
struct RecordingDisplay {
    text: String,
    writes: Vec<String>,
}

impl DisplaySurface for RecordingDisplay {
    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: String) {
        self.writes.push(text.clone());
        self.text = text;
    }
}

fn run(keys: &str) -> String {
    let mut calc = Calculator::new();
    calc.feed(keys).to_string()
}

#[test]
fn test_five_plus_two_times_collapses() {
    let mut calc = Calculator::new();
    for c in ['5', '+', '2', '*'] {
        calc.on_character(c);
    }
    assert_eq!(calc.text(), "7*");
}

#[test]
fn test_chained_operations_fold_left_to_right() {
    // ((1 + 2) * 3 - 4) / 5 = 1
    assert_eq!(run("1+2*3-4/5="), "1");
    assert_eq!(run("1+2*3-4/5"), "5/5");
}

#[test]
fn test_operator_corrections() {
    assert_eq!(run("8+-*2="), "16");
    assert_eq!(run("8+<*2="), "16");
}

#[test]
fn test_decimal_entry() {
    assert_eq!(run("1.5+.5="), "2");
    assert_eq!(run("1..5"), "1.5");
    assert_eq!(run("0.1+0.2="), "0.30000000000000004");
}

#[test]
fn test_dangling_decimal_blocks_operator() {
    assert_eq!(run("3.+"), "3.");
    assert_eq!(run("3.+5"), "3.5");
}

#[test]
fn test_leading_minus() {
    assert_eq!(run("-5*2="), "-10");
    assert_eq!(run("*/5"), "5");
}

#[test]
fn test_result_can_be_extended() {
    assert_eq!(run("6*7=+8="), "50");
    assert_eq!(run("1-3=.5"), "-2.5");
}

#[test]
fn test_division_by_zero_shows_marker() {
    assert_eq!(run("5/0="), "Error");
    assert_eq!(run("5/0+"), "Error+");
    // Marker is not a number, so anything built on it stays an error
    assert_eq!(run("5/0+1="), "Error");
    assert_eq!(run("5/0=C2+2="), "4");
}

#[test]
fn test_evaluate_empty_display() {
    assert_eq!(run("="), "0");
    assert_eq!(evaluate(""), Evaluation::Value(0.0));
}

#[test]
fn test_clear_last_then_clear_all() {
    let mut calc = Calculator::new();
    calc.feed("12+34");
    calc.on_key(Key::ClearLast);
    assert_eq!(calc.text(), "12+3");
    calc.on_key(Key::ClearAll);
    calc.on_key(Key::ClearAll);
    assert_eq!(calc.text(), "");
}

#[test]
fn test_one_write_per_keystroke() {
    let mut calc = Calculator::with_display(RecordingDisplay::default());
    calc.feed("5+2*<=");
    let display = calc.into_display();
    assert_eq!(display.writes, vec!["5", "5+", "5+2", "7*", "7", "7"]);
}

#[test]
fn test_rejected_keys_still_write_unchanged_text() {
    let mut calc = Calculator::with_display(RecordingDisplay::default());
    calc.on_character('*');
    calc.on_character('.');
    calc.on_character('.');
    let display = calc.into_display();
    assert_eq!(display.writes, vec!["", ".", "."]);
}

#[test]
fn test_display_invariants_hold_for_every_prefix() {
    let keys = "3..5+*2.2.*-7.=+1/4-.";
    let mut calc = Calculator::with_display(MemoryDisplay::new());

    for key in Key::parse_sequence(keys) {
        calc.on_key(key);
        let text = calc.text();

        let chars: Vec<char> = text.chars().collect();
        for pair in chars.windows(2) {
            assert!(
                !(is_operator(pair[0]) && is_operator(pair[1])),
                "two operators in {text:?}"
            );
        }
        for operand in text.split(is_operator) {
            assert!(
                operand.matches('.').count() <= 1,
                "two decimals in {text:?}"
            );
        }
        assert!(operand_count(text) <= 2, "three operands in {text:?}");
        if text.ends_with('.') {
            assert!(has_decimal(text));
        }
    }
}
