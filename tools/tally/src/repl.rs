//! Interactive keypad
//!
//! Every input line is fed to the calculator key by key and the display is
//! printed afterwards. The display survives between lines.

use anyhow::{Context, Result};
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tally_calc::{Calculator, Key};
use tracing::debug;

use crate::config::ReplConfig;
use crate::output::{step_line, styled_display, Step};

/// What the loop does after a line
#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    Continue,
    Quit,
}

/// Interactive REPL loop
pub fn run_repl(config: &ReplConfig) -> Result<()> {
    let rl_config = rustyline::Config::builder()
        .max_history_size(config.history_size)
        .context("Invalid history size")?
        .build();
    let mut rl = DefaultEditor::with_config(rl_config).context("Failed to initialize readline")?;
    let mut calc = Calculator::new();

    println!("{}", "Tally keypad calculator".bright_cyan().bold());
    println!(
        "Type keys and press Enter, '{}' for help, '{}' to leave\n",
        "help".bright_yellow(),
        "quit".bright_yellow()
    );

    loop {
        match rl.readline(&config.prompt) {
            Ok(line) => {
                let line = line.trim();
                if !line.is_empty() {
                    // Add to history (ignore errors)
                    let _ = rl.add_history_entry(line);
                }

                let (outcome, lines) = execute_line(&mut calc, line, config.trace);
                for l in lines {
                    println!("{}", l);
                }
                if outcome == Outcome::Quit {
                    break;
                }
            },
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C - ignore and continue
                println!("^C");
                continue;
            },
            Err(ReadlineError::Eof) => {
                // Ctrl+D - exit
                break;
            },
            Err(e) => {
                eprintln!("{} {}", "Readline error:".red(), e);
                break;
            },
        }
    }

    println!("Bye!");
    Ok(())
}

/// Run one REPL line against the calculator
///
/// Returns the outcome and the lines to print.
fn execute_line(calc: &mut Calculator, line: &str, trace: bool) -> (Outcome, Vec<String>) {
    match line.to_lowercase().as_str() {
        "quit" | "exit" | "q" => return (Outcome::Quit, Vec::new()),
        "help" | "?" => return (Outcome::Continue, help_lines()),
        _ => {},
    }

    let mut lines = Vec::new();
    for key in Key::parse_sequence(line) {
        calc.on_key(key);
        if trace {
            lines.push(step_line(&Step {
                key,
                display: calc.text().to_string(),
            }));
        }
    }
    debug!(line, display = calc.text(), "line fed");

    lines.push(styled_display(calc.text()));
    (Outcome::Continue, lines)
}

fn help_lines() -> Vec<String> {
    vec![
        format!("{}", "Keys:".bright_cyan().bold()),
        format!("  {}  digits and decimal point", "0-9 .".bright_yellow()),
        format!("  {}  operators, evaluated left to right", "+ - * /".bright_yellow()),
        format!("  {}        evaluate", "=".bright_yellow()),
        format!("  {}        delete last character", "<".bright_yellow()),
        format!("  {}        clear display", "C".bright_yellow()),
        format!("{}", "Commands:".bright_cyan().bold()),
        format!("  {}     this help", "help".bright_yellow()),
        format!("  {}     leave", "quit".bright_yellow()),
    ]
}
