//! yamllint-junit - yamllint output to JUnit XML converter
//!
//! Converts the line-oriented diagnostic output of yamllint into a
//! JUnit-compatible XML test report, so CI dashboards that understand
//! JUnit XML can display lint results as pass/fail/skip test cases.
//!
//! # Architecture
//!
//! ```text
//! CLI -> InputSource -> Finding::parse (per line) -> SuiteReport -> JUnit XML
//! ```
//!
//! The pipeline is a single linear pass: acquire input, normalize lines,
//! parse findings, fold them into a report, serialize. Warnings become
//! skipped test cases, everything else becomes failures, and a clean run
//! emits one synthetic passing case so dashboards never see "no tests".
//! A cancellation token threaded through [`pipeline::run`] aborts the run
//! before the destination is written.

pub mod cancel;
pub mod finding;
pub mod input;
pub mod output;
pub mod pipeline;
pub mod report;

// Re-export main types
pub use cancel::CancelToken;
pub use finding::{Finding, ParseError, Severity};
pub use input::InputSource;
pub use output::JUnitFormatter;
pub use pipeline::{Config, PipelineError, RunStatus};
pub use report::{CaseStatus, StatusKind, SuiteReport, TestCase};
