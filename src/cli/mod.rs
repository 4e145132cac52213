//! Command-line parsing for the workout statistics tool.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the formulas.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::OutputFormat;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "workout", version, about = "Workout statistics from sensor packages")]
pub struct Cli {
    /// Output format (overrides WORKOUT_FORMAT; default text).
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Summarize the built-in sample packages (the default when no command is given).
    Samples,
    /// Summarize a single package given on the command line.
    ///
    /// Example: `workout calc RUN 15000 1 75`
    Calc(CalcArgs),
    /// Summarize every package in a file.
    Batch(BatchArgs),
    /// List workout tags and the values each one expects.
    Kinds,
}

#[derive(Debug, Parser, Clone)]
pub struct CalcArgs {
    /// Workout tag (SWM, RUN, WLK).
    #[arg(value_name = "TAG")]
    pub tag: String,

    /// Positional values, in the order listed by `workout kinds`.
    #[arg(value_name = "VALUES", allow_negative_numbers = true)]
    pub values: Vec<f64>,
}

#[derive(Debug, Parser, Clone)]
pub struct BatchArgs {
    /// Package file: one `TAG v1 v2 ...` per line, or a `.json` array of
    /// `{"tag": .., "data": [..]}` objects.
    #[arg(value_name = "FILE")]
    pub input: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_calc_values() {
        let cli = Cli::parse_from(["workout", "calc", "WLK", "9000", "1", "75", "180"]);
        let Command::Calc(args) = cli.command else {
            panic!("expected calc");
        };
        assert_eq!(args.tag, "WLK");
        assert_eq!(args.values, vec![9000.0, 1.0, 75.0, 180.0]);
        assert_eq!(cli.format, None);
    }

    #[test]
    fn format_flag_is_global() {
        let cli = Cli::parse_from(["workout", "samples", "--format", "json"]);
        assert_eq!(cli.format, Some(OutputFormat::Json));
    }
}
