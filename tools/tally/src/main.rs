//! Tally - keypad calculator
//!
//! Evaluates expressions left to right, replays keystroke sequences through
//! the same validation a keypad applies, or runs an interactive keypad.

mod config;
mod logging;
mod output;
mod repl;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tally_calc::{evaluate, Calculator, Key};

use crate::config::TallyConfig;
use crate::output::{EvalReport, KeysReport, OutputFormat, Step};

#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Tally - keypad calculator with left-to-right evaluation")]
#[command(long_about = "Tally - keypad calculator with left-to-right evaluation

There is no operator precedence: 2+3*4 is 20.

Keys:
  0-9 .       digits and decimal point
  + - * /     operators
  =           evaluate
  <           delete last character
  C           clear display

Examples:
  tally eval '2+3*4'              # 20
  tally keys '5+2*'               # 7*
  tally keys --trace '3..5+*2='   # show the display after every key
  tally repl                      # interactive keypad")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Configuration file (default: ./tally.yaml if present)
    #[arg(short = 'c', long = "config", global = true, env = "TALLY_CONFIG")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate an expression left to right
    Eval {
        /// Expression text, e.g. 1.5*4-2
        #[arg(allow_hyphen_values = true)]
        expression: String,
    },

    /// Replay a keystroke sequence and print the display
    Keys {
        /// Keys to press, e.g. '5+2*3='
        #[arg(allow_hyphen_values = true)]
        sequence: String,

        /// Print the display after every key
        #[arg(short, long)]
        trace: bool,
    },

    /// Interactive keypad
    Repl {
        /// Print the display after every key
        #[arg(short, long)]
        trace: bool,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = TallyConfig::load(cli.config.as_deref())?;
    let _log_guard = logging::init(&config.logging, cli.verbose, !cli.no_color)?;

    match cli.command {
        Commands::Eval { expression } => {
            let result = evaluate(&expression);
            let report = EvalReport {
                expression: &expression,
                result,
                display: result.to_string(),
            };
            output::print_eval(&report, cli.format)?;
            if result.is_error() {
                return Ok(ExitCode::FAILURE);
            }
        },
        Commands::Keys { sequence, trace } => {
            let report = replay(&sequence, trace);
            output::print_keys(&report, cli.format)?;
        },
        Commands::Repl { trace } => {
            let mut repl_config = config.repl;
            repl_config.trace |= trace;
            repl::run_repl(&repl_config)?;
        },
    }

    Ok(ExitCode::SUCCESS)
}

/// Press every key of `sequence` on a fresh calculator
fn replay(sequence: &str, trace: bool) -> KeysReport<'_> {
    let mut calc = Calculator::new();
    let mut steps = Vec::new();

    for key in Key::parse_sequence(sequence) {
        calc.on_key(key);
        if trace {
            steps.push(Step {
                key,
                display: calc.text().to_string(),
            });
        }
    }

    KeysReport {
        sequence,
        display: calc.text().to_string(),
        steps,
    }
}
