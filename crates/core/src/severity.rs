//! Plugin verdicts and their exit codes.

use serde::Serialize;

/// The verdict of a check, as understood by Nagios/Icinga.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    #[default]
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl Severity {
    /// Return the console label of a severity.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Warning => "WARNING",
            Self::Critical => "CRITICAL",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Process exit code expected by the monitoring system.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Ok => 0,
            Self::Warning => 1,
            Self::Critical => 2,
            Self::Unknown => 3,
        }
    }

    /// Fold two independent verdicts into one.
    ///
    /// `CRITICAL` dominates everything and `WARNING` dominates `UNKNOWN`;
    /// `UNKNOWN` only wins over `OK`.
    pub fn combine(self, other: Severity) -> Severity {
        match (self, other) {
            (Self::Ok, other) => other,
            (Self::Warning, Self::Critical) => Self::Critical,
            (Self::Warning, _) => Self::Warning,
            (Self::Critical, _) => Self::Critical,
            (Self::Unknown, Self::Warning | Self::Critical) => other,
            (Self::Unknown, _) => Self::Unknown,
        }
    }

    /// Combine any number of verdicts, starting from `OK`.
    pub fn fold<I>(severities: I) -> Severity
    where
        I: IntoIterator<Item = Severity>,
    {
        severities.into_iter().fold(Self::Ok, Self::combine)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
