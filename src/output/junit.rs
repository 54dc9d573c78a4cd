//! JUnit XML output formatter
//!
//! Serializes a `SuiteReport` into the JUnit XML shape CI dashboards
//! understand.

use crate::report::SuiteReport;

/// Formatter for JUnit XML output
#[derive(Debug, Default)]
pub struct JUnitFormatter;

impl JUnitFormatter {
    /// Create a new JUnit formatter
    pub fn new() -> Self {
        Self
    }

    fn escape_xml(s: &str) -> String {
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;")
    }

    /// Serialize the report to an XML document.
    ///
    /// Attribute and element order are fixed, so the same report always
    /// yields byte-identical output. `failures` and `time` are fixed at
    /// `"0"`; only `errors` and `skipped` vary.
    pub fn format(&self, report: &SuiteReport) -> String {
        let mut xml = String::new();
        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<testsuites>\n");
        xml.push_str(&format!(
            "  <testsuite name=\"{}\" errors=\"{}\" skipped=\"{}\" failures=\"0\" tests=\"{}\" time=\"0\">\n",
            Self::escape_xml(&report.name),
            report.error_count,
            report.skipped_count,
            report.test_count
        ));

        for case in &report.cases {
            match &case.status {
                None => {
                    xml.push_str(&format!(
                        "    <testcase name=\"{}\"/>\n",
                        Self::escape_xml(&case.name)
                    ));
                }
                Some(status) => {
                    let element = status.kind.element_name();
                    let text = Self::escape_xml(&status.text);
                    xml.push_str(&format!(
                        "    <testcase name=\"{}\">\n",
                        Self::escape_xml(&case.name)
                    ));
                    xml.push_str(&format!(
                        "      <{} file=\"{}\" line=\"{}\" message=\"{}\" type=\"YAML Lint\">{}</{}>\n",
                        element,
                        Self::escape_xml(&status.file),
                        status.line,
                        text,
                        text,
                        element
                    ));
                    xml.push_str("    </testcase>\n");
                }
            }
        }

        xml.push_str("  </testsuite>\n");
        xml.push_str("</testsuites>\n");
        xml
    }
}
