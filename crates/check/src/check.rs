//! One run of the range check: evaluate every measurement, fold the
//! verdicts and build the status line.

use std::ffi::OsString;

use clap::error::ErrorKind;
use clap::Parser;

use pluginkit_core::output::render_status;
use pluginkit_core::thresholds::evaluate_perfdata;
use pluginkit_core::{PerformanceData, Severity};

use crate::cli::Cli;
use crate::config::CheckConfig;

/// Verdict and rendered status line of a check run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub severity: Severity,
    pub line: String,
}

impl CheckOutcome {
    /// `UNKNOWN - <message>`, the outcome of a check that could not run.
    pub fn unknown(message: &str) -> Self {
        Self {
            severity: Severity::Unknown,
            line: render_status(Severity::Unknown, message, &[]),
        }
    }
}

/// Parse `args` (program name first) and run the check.
///
/// Every failure, bad arguments included, becomes an `UNKNOWN` outcome so the
/// plugin exits 3. Only help and version requests come back as `Err`, for the
/// caller to print and exit with clap's own code.
pub fn execute<I, T>(args: I) -> Result<CheckOutcome, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            return Err(e)
        }
        Err(e) => {
            let message = e.to_string();
            let first_line = message.lines().next().unwrap_or_default();
            return Ok(CheckOutcome::unknown(first_line.trim_start_matches("error: ")));
        }
    };

    Ok(try_execute(cli).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "Check aborted");
        CheckOutcome::unknown(&e.to_string())
    }))
}

fn try_execute(cli: Cli) -> anyhow::Result<CheckOutcome> {
    let config = CheckConfig::from_cli(cli)?;

    if config.json {
        return Ok(CheckOutcome {
            severity: Severity::Ok,
            line: thresholds_json(&config)?,
        });
    }

    let outcome = run(&config);
    tracing::debug!(severity = %outcome.severity, "Check complete");
    Ok(outcome)
}

/// Evaluate all measurements of `config`.
pub fn run(config: &CheckConfig) -> CheckOutcome {
    let mut severity = Severity::Ok;
    let mut perfdata = Vec::with_capacity(config.measurements.len());

    for measurement in &config.measurements {
        let mut pd = PerformanceData::new(&measurement.label, measurement.value, &config.uom);
        pd.minimum = config.minimum.clone();
        pd.maximum = config.maximum.clone();

        let (measured, pd) = evaluate_perfdata(&config.warning, &config.critical, pd);
        if measured != Severity::Ok {
            tracing::info!(label = %measurement.label, value = measurement.value, severity = %measured, "Threshold exceeded");
        }

        severity = severity.combine(measured);
        perfdata.push(pd);
    }

    CheckOutcome {
        severity,
        line: render_status(severity, &config.message, &perfdata),
    }
}

/// The parsed warning and critical lists as pretty JSON.
pub fn thresholds_json(config: &CheckConfig) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&serde_json::json!({
        "warning": config.warning,
        "critical": config.critical,
    }))
}
