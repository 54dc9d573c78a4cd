//! End-to-end conversion pipeline
//!
//! Acquire input, normalize, parse, build the report, write it. Strictly
//! sequential; the cancellation token is polled between phases and a
//! cancelled run returns through the normal path without touching the
//! destination.

use crate::cancel::CancelToken;
use crate::finding::{Finding, ParseError};
use crate::input::InputSource;
use crate::output;
use crate::report::SuiteReport;
use log::{debug, warn};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fully resolved run configuration, validated before the pipeline starts
#[derive(Debug, Clone)]
pub struct Config {
    /// Where the yamllint output comes from
    pub input: InputSource,
    /// Destination path for the XML report
    pub output: PathBuf,
    /// Echo the serialized document to stdout
    pub verbose: bool,
    /// Test-suite name reported in the document
    pub suite_name: String,
    /// Drop lines that fail to parse instead of aborting the run
    pub skip_malformed: bool,
}

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Report written to the destination
    Completed,
    /// Interrupted before the report was written
    Interrupted,
}

/// Fatal pipeline error
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("failed to read {path}: {source}")]
    Input {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("malformed diagnostic on line {number}: {source}")]
    Parse {
        number: usize,
        #[source]
        source: ParseError,
    },

    #[error("failed to write {path}: {source}")]
    Output {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl PipelineError {
    /// Process exit code for this error (1 = parse, 2 = I/O)
    pub fn exit_code(&self) -> i32 {
        match self {
            PipelineError::Parse { .. } => 1,
            PipelineError::Input { .. } | PipelineError::Output { .. } => 2,
        }
    }
}

/// Run the whole conversion.
///
/// Parse failures abort the run unless `skip_malformed` is set, in which
/// case each offending line is logged and counted rather than silently
/// dropped.
pub fn run(config: &Config, cancel: &CancelToken) -> Result<RunStatus, PipelineError> {
    let lines = config
        .input
        .read_lines()
        .map_err(|source| PipelineError::Input {
            path: config.input.to_string(),
            source,
        })?;
    if cancel.is_cancelled() {
        return Ok(RunStatus::Interrupted);
    }

    let findings = parse_lines(&lines, config.skip_malformed)?;
    if cancel.is_cancelled() {
        return Ok(RunStatus::Interrupted);
    }

    let report = SuiteReport::from_findings(&config.suite_name, &findings);
    debug!(
        "built report: {} cases, {} errors, {} skipped",
        report.test_count, report.error_count, report.skipped_count
    );

    if cancel.is_cancelled() {
        return Ok(RunStatus::Interrupted);
    }
    output::write_report(&report, &config.output, config.verbose).map_err(|source| {
        PipelineError::Output {
            path: config.output.display().to_string(),
            source,
        }
    })?;
    Ok(RunStatus::Completed)
}

fn parse_lines(lines: &[String], skip_malformed: bool) -> Result<Vec<Finding>, PipelineError> {
    let mut findings = Vec::with_capacity(lines.len());
    let mut malformed = 0usize;

    for (idx, line) in lines.iter().enumerate() {
        match Finding::parse(line) {
            Ok(finding) => findings.push(finding),
            Err(source) if skip_malformed => {
                warn!("skipping line {}: {}: {:?}", idx + 1, source, line);
                malformed += 1;
            }
            Err(source) => {
                return Err(PipelineError::Parse {
                    number: idx + 1,
                    source,
                })
            }
        }
    }

    if malformed > 0 {
        warn!("{} malformed lines skipped", malformed);
    }
    Ok(findings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn config_for(input: &std::path::Path, output: PathBuf) -> Config {
        Config {
            input: InputSource::File(input.to_path_buf()),
            output,
            verbose: false,
            suite_name: "yamllint".to_string(),
            skip_malformed: false,
        }
    }

    #[test]
    fn test_run_writes_report() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("lint.txt");
        fs::write(&input, "foo.yaml:3:5: error   trailing spaces\n").unwrap();
        let output = dir.path().join("report.xml");

        let status = run(&config_for(&input, output.clone()), &CancelToken::new()).unwrap();

        assert_eq!(status, RunStatus::Completed);
        let xml = fs::read_to_string(&output).unwrap();
        assert!(xml.contains("errors=\"1\" skipped=\"0\" failures=\"0\" tests=\"1\""));
    }

    #[test]
    fn test_run_clean_input_writes_synthetic_case() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("lint.txt");
        fs::write(&input, "\n   \n").unwrap();
        let output = dir.path().join("report.xml");

        run(&config_for(&input, output.clone()), &CancelToken::new()).unwrap();

        let xml = fs::read_to_string(&output).unwrap();
        assert!(xml.contains("<testcase name=\"no_yamllint_errors\"/>"));
        assert!(xml.contains("tests=\"1\""));
    }

    #[test]
    fn test_run_parse_failure_leaves_no_output() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("lint.txt");
        fs::write(&input, "badline-no-colons-here\n").unwrap();
        let output = dir.path().join("report.xml");

        let err = run(&config_for(&input, output.clone()), &CancelToken::new()).unwrap_err();

        assert!(matches!(err, PipelineError::Parse { number: 1, .. }));
        assert_eq!(err.exit_code(), 1);
        assert!(!output.exists());
    }

    #[test]
    fn test_run_skip_malformed_keeps_valid_lines() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("lint.txt");
        fs::write(
            &input,
            "badline-no-colons-here\nfoo.yaml:3:5: trailing spaces\n",
        )
        .unwrap();
        let output = dir.path().join("report.xml");
        let mut config = config_for(&input, output.clone());
        config.skip_malformed = true;

        let status = run(&config, &CancelToken::new()).unwrap();

        assert_eq!(status, RunStatus::Completed);
        let xml = fs::read_to_string(&output).unwrap();
        assert!(xml.contains("tests=\"1\""));
        assert!(xml.contains("foo.yaml"));
    }

    #[test]
    fn test_blank_lines_do_not_change_report() {
        let dir = tempdir().unwrap();
        let plain = dir.path().join("plain.txt");
        let padded = dir.path().join("padded.txt");
        fs::write(
            &plain,
            "foo.yaml:3:5: trailing spaces\nbar.yaml:10:1: [warning] line too long\n",
        )
        .unwrap();
        fs::write(
            &padded,
            "\n  \nfoo.yaml:3:5: trailing spaces\n\t\n\nbar.yaml:10:1: [warning] line too long\n   \n",
        )
        .unwrap();
        let out_plain = dir.path().join("plain.xml");
        let out_padded = dir.path().join("padded.xml");

        run(&config_for(&plain, out_plain.clone()), &CancelToken::new()).unwrap();
        run(&config_for(&padded, out_padded.clone()), &CancelToken::new()).unwrap();

        assert_eq!(
            fs::read_to_string(&out_plain).unwrap(),
            fs::read_to_string(&out_padded).unwrap()
        );
    }

    #[test]
    fn test_run_missing_input_is_io_error() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("missing.txt");
        let output = dir.path().join("report.xml");

        let err = run(&config_for(&input, output), &CancelToken::new()).unwrap_err();

        assert!(matches!(err, PipelineError::Input { .. }));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_cancelled_run_writes_nothing() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("lint.txt");
        fs::write(&input, "foo.yaml:3:5: trailing spaces\n").unwrap();
        let output = dir.path().join("report.xml");

        let cancel = CancelToken::new();
        cancel.cancel();
        let status = run(&config_for(&input, output.clone()), &cancel).unwrap();

        assert_eq!(status, RunStatus::Interrupted);
        assert!(!output.exists());
    }
}
