//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads configuration and installs logging
//! - parses CLI arguments
//! - runs packages through the pipeline
//! - prints summaries

use std::io::{self, Write};

use clap::Parser;

use crate::cli::{BatchArgs, CalcArgs, Cli, Command};
use crate::config::AppConfig;
use crate::domain::{OutputFormat, Package, Training};
use crate::error::AppError;
use crate::io::{load_packages, read_package};
use crate::report::{InfoMessage, format_kinds, format_summaries};

pub mod pipeline;

/// Entry point for the `workout` binary.
pub fn run() -> Result<(), AppError> {
    let config = AppConfig::from_env()?;
    crate::logging::init(&config.log_filter);

    // Bare `workout` behaves like `workout samples`.
    let argv = rewrite_args(std::env::args().collect());
    let cli = Cli::parse_from(argv);
    let format = cli.format.unwrap_or(config.format);

    let mut out = io::stdout().lock();
    match cli.command {
        Command::Samples => handle_packages(&mut out, &crate::data::sample_packages(), format)?,
        Command::Calc(args) => handle_calc(&mut out, args, format)?,
        Command::Batch(args) => handle_batch(&mut out, args, format)?,
        Command::Kinds => write_output(&mut out, format_kinds().trim_end())?,
    }
    out.flush().map_err(output_error)
}

/// Print the summary of one constructed workout.
pub fn print_training_info<W: Write>(out: &mut W, training: &Training) -> Result<(), AppError> {
    let info = training.show_training_info()?;
    write_output(out, &info.message())
}

fn write_output<W: Write>(out: &mut W, text: &str) -> Result<(), AppError> {
    writeln!(out, "{text}").map_err(output_error)
}

fn output_error(e: io::Error) -> AppError {
    AppError::new(4, format!("Failed to write output: {e}"))
}

fn handle_calc<W: Write>(out: &mut W, args: CalcArgs, format: OutputFormat) -> Result<(), AppError> {
    let training = read_package(&args.tag, &args.values)?;
    match format {
        OutputFormat::Text => print_training_info(out, &training),
        OutputFormat::Json => {
            let info = training.show_training_info()?;
            write_output(out, &format_summaries(&[info], format)?)
        }
    }
}

fn handle_batch<W: Write>(out: &mut W, args: BatchArgs, format: OutputFormat) -> Result<(), AppError> {
    let packages = load_packages(&args.input)?;
    tracing::debug!(path = %args.input.display(), count = packages.len(), "package file loaded");
    handle_packages(out, &packages, format)
}

fn handle_packages<W: Write>(out: &mut W, packages: &[Package], format: OutputFormat) -> Result<(), AppError> {
    match format {
        // Stream lines so summaries before a failing package are still printed.
        OutputFormat::Text => {
            pipeline::run_packages(packages, |info: &InfoMessage| write_output(out, &info.message()))?;
        }
        OutputFormat::Json => {
            let summaries = pipeline::summarize_all(packages)?;
            write_output(out, &format_summaries(&summaries, format)?)?;
        }
    }
    Ok(())
}

/// Rewrite argv so `workout` defaults to `workout samples`.
///
/// Rules:
/// - `workout`                        -> `workout samples`
/// - `workout --format json`          -> `workout samples --format json`
/// - `workout --help/--version/-h`    -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("samples".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    if arg1.starts_with('-') {
        argv.insert(1, "samples".to_string());
    }

    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    struct FullDevice;

    impl Write for FullDevice {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "no space left on device"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn failed_write_maps_to_output_exit_code() {
        let err = handle_packages(&mut FullDevice, &crate::data::sample_packages(), OutputFormat::Text)
            .unwrap_err();
        assert_eq!(err.exit_code(), 4);
        assert!(err.to_string().contains("no space left"));
    }

    #[test]
    fn text_packages_are_written_one_per_line() {
        let mut buf = Vec::new();
        handle_packages(&mut buf, &crate::data::sample_packages(), OutputFormat::Text).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 3);
        assert!(text.ends_with("348.945.\n"));
    }

    #[test]
    fn bare_invocation_runs_samples() {
        assert_eq!(rewrite_args(args(&["workout"])), args(&["workout", "samples"]));
    }

    #[test]
    fn leading_flags_run_samples() {
        assert_eq!(
            rewrite_args(args(&["workout", "--format", "json"])),
            args(&["workout", "samples", "--format", "json"])
        );
    }

    #[test]
    fn subcommands_and_help_are_untouched() {
        let calc = args(&["workout", "calc", "RUN", "15000", "1", "75"]);
        assert_eq!(rewrite_args(calc.clone()), calc);
        assert_eq!(rewrite_args(args(&["workout", "--help"])), args(&["workout", "--help"]));
    }
}
