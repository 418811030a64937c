//! The status line a plugin prints before exiting.
//!
//! `<SEVERITY> - <message>`, followed by ` | ` and the space-separated
//! performance data when there is any.

use std::io::Write;

use crate::perfdata::PerformanceData;
use crate::severity::Severity;

/// Render the status line without a trailing newline.
pub fn render_status(severity: Severity, message: &str, perfdata: &[PerformanceData]) -> String {
    if perfdata.is_empty() {
        return format!("{severity} - {message}");
    }

    let perfdata = perfdata
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    format!("{severity} - {message} | {perfdata}")
}

/// Print the status line to stdout and hand the severity back, so callers
/// can exit with it.
pub fn print_status(severity: Severity, message: &str, perfdata: &[PerformanceData]) -> Severity {
    print_line(&render_status(severity, message, perfdata));
    severity
}

/// Write `line` and a newline to stdout.
///
/// A closed or broken stdout is logged, never a panic: the plugin must still
/// exit with its verdict.
pub fn print_line(line: &str) {
    if let Err(e) = write_line(&mut std::io::stdout().lock(), line) {
        tracing::error!(error = %e, "Failed to write plugin output");
    }
}

fn write_line(out: &mut impl Write, line: &str) -> std::io::Result<()> {
    writeln!(out, "{line}")?;
    out.flush()
}

pub fn print_ok(message: &str) -> Severity {
    print_status(Severity::Ok, message, &[])
}

pub fn print_warning(message: &str) -> Severity {
    print_status(Severity::Warning, message, &[])
}

pub fn print_critical(message: &str) -> Severity {
    print_status(Severity::Critical, message, &[])
}

pub fn print_unknown(message: &str) -> Severity {
    print_status(Severity::Unknown, message, &[])
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_without_perfdata() {
        assert_eq!(render_status(Severity::Ok, "all good", &[]), "OK - all good");
        assert_eq!(
            render_status(Severity::Unknown, "empty range", &[]),
            "UNKNOWN - empty range"
        );
    }

    #[test]
    fn status_with_perfdata() {
        let perfdata = [
            PerformanceData::new("load1", 0.5, ""),
            PerformanceData::new("load5", 2.0, "").with_warning("~:4"),
        ];
        assert_eq!(
            render_status(Severity::Warning, "load high", &perfdata),
            "WARNING - load high | 'load1'=0.500000;;;; 'load5'=2;~:4;;;"
        );
    }

    /// Writer whose pipe has been closed by the reader.
    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }
    }

    #[test]
    fn write_line_appends_newline() {
        let mut out = Vec::new();
        write_line(&mut out, "OK - fine").expect("write to memory");
        assert_eq!(out, b"OK - fine\n");
    }

    #[test]
    fn write_line_reports_broken_pipe() {
        let err = write_line(&mut ClosedPipe, "OK - fine").unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn print_returns_severity() {
        assert_eq!(print_critical("test output"), Severity::Critical);
        assert_eq!(print_ok("test output"), Severity::Ok);
    }
}
