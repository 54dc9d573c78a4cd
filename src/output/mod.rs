//! Report serialization and writing

mod junit;

pub use junit::JUnitFormatter;

use crate::report::SuiteReport;
use log::debug;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Serialize the report and write it to `path`, echoing the identical
/// bytes to stdout when `verbose` is set.
///
/// The whole document is built in memory before the destination is opened,
/// so a failed run never leaves a truncated report behind from this
/// process.
pub fn write_report(report: &SuiteReport, path: &Path, verbose: bool) -> io::Result<()> {
    let xml = JUnitFormatter::new().format(report);
    fs::write(path, xml.as_bytes())?;
    debug!("wrote {} bytes to {}", xml.len(), path.display());

    if verbose {
        io::stdout().write_all(xml.as_bytes())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_report_creates_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.xml");
        let report = SuiteReport::from_findings("yamllint", &[]);

        write_report(&report, &path, false).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, JUnitFormatter::new().format(&report));
    }

    #[test]
    fn test_write_report_bad_destination() {
        let report = SuiteReport::from_findings("yamllint", &[]);
        let result = write_report(&report, Path::new("no/such/dir/report.xml"), false);
        assert!(result.is_err());
    }
}
