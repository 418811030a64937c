//! Command-line arguments of `check_range`.

use clap::Parser;

/// Evaluate measurements against Nagios-style warning and critical ranges.
///
/// Each MEASUREMENT is `[<label>=]<value>`. The label selects the range of
/// the same metric name; an unlabelled value uses the range without a
/// metric prefix.
#[derive(Debug, Clone, Parser)]
#[command(name = "check_range", version)]
pub struct Cli {
    /// Warning ranges, e.g. `10:20` or `load1,~:4;load5,~:3`.
    #[arg(short, long, env = "CHECK_RANGE_WARNING", default_value = "", allow_hyphen_values = true)]
    pub warning: String,

    /// Critical ranges, same syntax as `--warning`.
    #[arg(short, long, env = "CHECK_RANGE_CRITICAL", default_value = "", allow_hyphen_values = true)]
    pub critical: String,

    /// Unit of measure appended to every performance data value.
    #[arg(short, long, env = "CHECK_RANGE_UOM", default_value = "")]
    pub uom: String,

    /// Minimum value reported in the performance data.
    #[arg(long, allow_hyphen_values = true)]
    pub min: Option<String>,

    /// Maximum value reported in the performance data.
    #[arg(long, allow_hyphen_values = true)]
    pub max: Option<String>,

    /// Text shown after the severity on the status line.
    #[arg(short, long, default_value = "range check")]
    pub message: String,

    /// Print the parsed thresholds as JSON instead of checking.
    #[arg(long)]
    pub json: bool,

    /// Values to check, `[<label>=]<value>`.
    #[arg(value_name = "MEASUREMENT", allow_negative_numbers = true)]
    pub measurements: Vec<String>,
}
