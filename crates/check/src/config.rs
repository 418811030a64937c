use pluginkit_core::thresholds::parse_threshold_list;
use pluginkit_core::ThresholdList;

use crate::cli::Cli;
use crate::error::CheckError;

/// A single labelled value given on the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    /// Metric name. Empty for an unlabelled value.
    pub label: String,
    pub value: f64,
}

impl Measurement {
    /// Parse `[<label>=]<value>`.
    pub fn parse(text: &str) -> Result<Self, CheckError> {
        let (label, value) = match text.rsplit_once('=') {
            Some((label, value)) => (label, value),
            None => ("", text),
        };

        let value = value
            .trim()
            .parse::<f64>()
            .map_err(|_| CheckError::InvalidMeasurement(text.to_string()))?;

        Ok(Self {
            label: label.trim().to_string(),
            value,
        })
    }
}

/// Resolved configuration of one check run.
///
/// Threshold options are parsed up front so a malformed range fails the run
/// before any value is looked at.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    pub warning: ThresholdList,
    pub critical: ThresholdList,
    pub measurements: Vec<Measurement>,
    pub uom: String,
    pub minimum: Option<String>,
    pub maximum: Option<String>,
    pub message: String,
    /// Dump the parsed thresholds instead of checking.
    pub json: bool,
}

impl CheckConfig {
    /// Build the configuration from parsed arguments.
    ///
    /// | Option          | Env Var                | Default       |
    /// |-----------------|------------------------|---------------|
    /// | `--warning`     | `CHECK_RANGE_WARNING`  | none          |
    /// | `--critical`    | `CHECK_RANGE_CRITICAL` | none          |
    /// | `--uom`         | `CHECK_RANGE_UOM`      | empty         |
    /// | `--message`     | --                     | `range check` |
    pub fn from_cli(cli: Cli) -> Result<Self, CheckError> {
        let warning = parse_threshold_list(&cli.warning)?;
        let critical = parse_threshold_list(&cli.critical)?;

        let measurements = cli
            .measurements
            .iter()
            .map(|m| Measurement::parse(m))
            .collect::<Result<Vec<_>, _>>()?;

        if measurements.is_empty() && !cli.json {
            return Err(CheckError::NoMeasurements);
        }

        tracing::debug!(
            warning = warning.len(),
            critical = critical.len(),
            measurements = measurements.len(),
            "Loaded check configuration",
        );

        Ok(Self {
            warning,
            critical,
            measurements,
            uom: cli.uom,
            minimum: cli.min,
            maximum: cli.max,
            message: cli.message,
            json: cli.json,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
