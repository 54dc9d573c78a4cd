//! Finding types parsed from yamllint diagnostic lines

use thiserror::Error;

/// Literal prefix marking a non-fatal lint observation.
///
/// yamllint emits it verbatim at the start of the message segment; the
/// comparison is case-sensitive.
pub const WARNING_MARKER: &str = "[warning]";

/// Error for a diagnostic line that does not match the
/// `<file>:<line>:<column>: <message>` grammar
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected at least 4 colon-delimited fields, found {found}")]
    TooFewFields { found: usize },

    #[error("line number is not an integer: '{segment}'")]
    InvalidLineNumber { segment: String },

    #[error("column is not an integer: '{segment}'")]
    InvalidColumn { segment: String },
}

/// Severity level for findings
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Non-fatal observation, reported as a skipped test case
    Warning,
    /// Definite problem, reported as a failed test case
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// One parsed yamllint diagnostic line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// File the diagnostic points at
    pub file: String,
    /// Line number (1-based)
    pub line: u64,
    /// Column number, kept only for message formatting
    pub column: u64,
    /// Severity derived from the message marker
    pub severity: Severity,
    /// Message text after the third colon, trimmed
    pub message: String,
}

impl Finding {
    /// Parse one normalized diagnostic line.
    ///
    /// The first three fields are positional; everything after the third
    /// colon is taken as the message, so a message containing `:` stays
    /// intact.
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let fields: Vec<&str> = line.splitn(4, ':').collect();
        if fields.len() < 4 {
            return Err(ParseError::TooFewFields {
                found: fields.len(),
            });
        }

        let line_number =
            fields[1]
                .trim()
                .parse::<u64>()
                .map_err(|_| ParseError::InvalidLineNumber {
                    segment: fields[1].trim().to_string(),
                })?;
        let column = fields[2]
            .trim()
            .parse::<u64>()
            .map_err(|_| ParseError::InvalidColumn {
                segment: fields[2].trim().to_string(),
            })?;

        let message = fields[3].trim().to_string();
        let severity = if message.starts_with(WARNING_MARKER) {
            Severity::Warning
        } else {
            Severity::Error
        };

        Ok(Self {
            file: fields[0].to_string(),
            line: line_number,
            column,
            severity,
            message,
        })
    }

    /// Display text used as both the XML message attribute and element body
    pub fn display_text(&self) -> String {
        format!("[{}:{}] {}", self.line, self.column, self.message)
    }

    /// Check if this finding is a warning
    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }
}
