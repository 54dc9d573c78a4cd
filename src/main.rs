//! yamllint-junit CLI
//!
//! Thin wrapper around the conversion pipeline: argument parsing, logger
//! setup, interrupt hook, exit codes.

use clap::Parser;
use colored::Colorize;
use log::warn;
use std::path::PathBuf;
use yamllint_junit::cancel::CancelToken;
use yamllint_junit::input::InputSource;
use yamllint_junit::pipeline::{self, Config, RunStatus};

#[derive(Parser)]
#[command(
    name = "yamllint-junit",
    version,
    about = "Convert yamllint output into a JUnit XML report",
    long_about = "Reads yamllint's line-oriented output from a file or piped stdin and \
                  writes a JUnit XML report that CI dashboards can render as test results."
)]
struct Cli {
    /// yamllint output file to read (defaults to stdin when piped)
    input: Option<PathBuf>,

    /// Output XML to file
    #[arg(short, long, default_value = "yamllint-junit.xml")]
    output: PathBuf,

    /// Print XML to console as command output
    #[arg(short, long)]
    verbose: bool,

    /// Testsuite name to report in the JUnit file
    #[arg(long, default_value = "yamllint")]
    test_name: String,

    /// Skip diagnostic lines that fail to parse instead of aborting
    #[arg(long)]
    skip_malformed: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // Handle --no-color
    if cli.no_color {
        colored::control::set_override(false);
    }

    let input = match cli.input {
        Some(path) => InputSource::File(path),
        None if atty::is(atty::Stream::Stdin) => {
            eprintln!(
                "{}: no input file given and nothing piped on stdin",
                "error".red().bold()
            );
            eprintln!("Pipe yamllint output in, or pass a file: yamllint-junit [options] <input>");
            std::process::exit(2);
        }
        None => InputSource::Stdin,
    };

    let config = Config {
        input,
        output: cli.output,
        verbose: cli.verbose,
        suite_name: cli.test_name,
        skip_malformed: cli.skip_malformed,
    };

    let cancel = CancelToken::new();
    {
        let handler = cancel.clone();
        if let Err(e) = ctrlc::set_handler(move || handler.cancel()) {
            warn!("could not install interrupt handler: {}", e);
        }
    }

    match pipeline::run(&config, &cancel) {
        Ok(RunStatus::Completed) => {}
        Ok(RunStatus::Interrupted) => {
            eprintln!("Interrupted, no report written");
            std::process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            std::process::exit(e.exit_code());
        }
    }
}
