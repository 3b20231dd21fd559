//! Result reporting for the CLI

use anyhow::{Context, Result};
use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;
use tally_calc::{Evaluation, Key, ERROR_MARKER};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// `tally eval` result
#[derive(Debug, Serialize)]
pub struct EvalReport<'a> {
    pub expression: &'a str,
    pub result: Evaluation,
    pub display: String,
}

/// Display after one replayed key
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
    pub key: Key,
    pub display: String,
}

/// `tally keys` result
#[derive(Debug, Serialize)]
pub struct KeysReport<'a> {
    pub sequence: &'a str,
    pub display: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<Step>,
}

/// Display text, with the error marker highlighted
pub fn styled_display(text: &str) -> String {
    if text == ERROR_MARKER {
        text.red().bold().to_string()
    } else {
        text.bright_white().bold().to_string()
    }
}

fn describe_key(key: Key) -> String {
    match key {
        Key::Char(c) => c.to_string(),
        Key::Evaluate => "=".to_string(),
        Key::ClearLast => "<".to_string(),
        Key::ClearAll => "C".to_string(),
    }
}

/// One trace line: `  5   -> 5+2`
pub fn step_line(step: &Step) -> String {
    format!(
        "  {:<3} {} {}",
        describe_key(step.key).bright_yellow(),
        "->".bright_cyan(),
        styled_display(&step.display)
    )
}

pub fn print_eval(report: &EvalReport<'_>, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => println!("{}", styled_display(&report.display)),
        OutputFormat::Json => print_json(report)?,
    }
    Ok(())
}

pub fn print_keys(report: &KeysReport<'_>, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for step in &report.steps {
                println!("{}", step_line(step));
            }
            println!("{}", styled_display(&report.display));
        },
        OutputFormat::Json => print_json(report)?,
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_report_json() {
        let report = KeysReport {
            sequence: "1+",
            display: "1+".to_string(),
            steps: vec![
                Step {
                    key: Key::Char('1'),
                    display: "1".to_string(),
                },
                Step {
                    key: Key::Char('+'),
                    display: "1+".to_string(),
                },
            ],
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["display"], "1+");
        assert_eq!(json["steps"][1]["key"]["char"], "+");
    }

    #[test]
    fn test_empty_steps_are_omitted() {
        let report = KeysReport {
            sequence: "7",
            display: "7".to_string(),
            steps: Vec::new(),
        };
        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("steps").is_none());
    }

    #[test]
    fn test_eval_report_json() {
        let report = EvalReport {
            expression: "1/0",
            result: Evaluation::Error,
            display: ERROR_MARKER.to_string(),
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["result"]["status"], "error");
        assert_eq!(json["display"], "Error");
    }
}
