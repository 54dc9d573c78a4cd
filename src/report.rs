//! JUnit report model built from findings

use crate::finding::{Finding, Severity};

/// Name of the synthetic case emitted when lint found nothing.
///
/// CI dashboards treat zero test cases as "no tests were executed"; the
/// synthetic passing case signals "lint ran clean" instead.
pub const CLEAN_CASE_NAME: &str = "no_yamllint_errors";

/// How a non-passing test case is rendered in the JUnit document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// Rendered as a `<failure>` child element
    Failure,
    /// Rendered as a `<skipped>` child element
    Skipped,
}

impl StatusKind {
    /// XML element name for this status
    pub fn element_name(&self) -> &'static str {
        match self {
            StatusKind::Failure => "failure",
            StatusKind::Skipped => "skipped",
        }
    }
}

/// Failure/skipped payload attached to a test case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseStatus {
    pub kind: StatusKind,
    pub file: String,
    pub line: u64,
    /// `[<line>:<column>] <message>`, used as both the message attribute
    /// and the element body
    pub text: String,
}

/// One JUnit test case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub name: String,
    /// `None` for the synthetic passing case
    pub status: Option<CaseStatus>,
}

impl TestCase {
    fn from_finding(finding: &Finding) -> Self {
        let kind = match finding.severity {
            Severity::Warning => StatusKind::Skipped,
            Severity::Error => StatusKind::Failure,
        };
        Self {
            name: finding.file.clone(),
            status: Some(CaseStatus {
                kind,
                file: finding.file.clone(),
                line: finding.line,
                text: finding.display_text(),
            }),
        }
    }
}

/// Aggregated report for one converter run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteReport {
    /// Configured test-suite name
    pub name: String,
    /// Test cases in input order
    pub cases: Vec<TestCase>,
    /// Total cases; forced to 1 in the zero-findings case
    pub test_count: usize,
    /// Cases with a failure status
    pub error_count: usize,
    /// Cases with a skipped status
    pub skipped_count: usize,
}

impl SuiteReport {
    /// Fold findings into a report, preserving input order.
    ///
    /// Every finding maps to exactly one failure or skipped case, so
    /// `error_count + skipped_count == test_count` whenever findings exist.
    pub fn from_findings(name: &str, findings: &[Finding]) -> Self {
        if findings.is_empty() {
            return Self {
                name: name.to_string(),
                cases: vec![TestCase {
                    name: CLEAN_CASE_NAME.to_string(),
                    status: None,
                }],
                test_count: 1,
                error_count: 0,
                skipped_count: 0,
            };
        }

        let cases: Vec<TestCase> = findings.iter().map(TestCase::from_finding).collect();
        let skipped_count = cases
            .iter()
            .filter(|c| matches!(&c.status, Some(s) if s.kind == StatusKind::Skipped))
            .count();
        Self {
            name: name.to_string(),
            test_count: cases.len(),
            error_count: cases.len() - skipped_count,
            skipped_count,
            cases,
        }
    }

    /// Check if any case carries a failure status
    pub fn has_failures(&self) -> bool {
        self.error_count > 0
    }
}
