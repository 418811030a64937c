//! The parsed form of a single range definition.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::parser::parse_definition;
use crate::error::ThresholdError;
use crate::perfdata::format_fixed;

/// Which side of `[start, end]` raises an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Sense {
    /// Alert when the value lies outside `[start, end]`. The usual case.
    #[default]
    Outside,
    /// Alert when the value lies inside `[start, end]` (`@` prefix).
    Inside,
}

/// One parsed threshold definition, e.g. `load1,@10:20`.
///
/// Ranges returned by the parser always satisfy `start <= end`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "RangeRecord", try_from = "RangeRecord")]
pub struct ThresholdRange {
    /// Bounds text without the metric prefix, `@` retained. Shown in
    /// performance data.
    pub definition: String,
    /// Measurement this range applies to. Empty for the default measurement.
    pub metric: String,
    pub sense: Sense,
    pub start: f64,
    pub end: f64,
}

impl ThresholdRange {
    /// Whether `value` falls in the alerting zone of this range.
    ///
    /// Both bounds belong to the range: `10:20` accepts 10 and 20, `@10:20`
    /// alerts on them.
    pub fn is_alert(&self, value: f64) -> bool {
        match self.sense {
            Sense::Outside => value < self.start || value > self.end,
            Sense::Inside => value >= self.start && value <= self.end,
        }
    }

    /// `true` for ranges without an `@` prefix.
    pub fn alerts_outside(&self) -> bool {
        self.sense == Sense::Outside
    }
}

impl FromStr for ThresholdRange {
    type Err = ThresholdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::parser::parse_threshold(s)
    }
}

impl fmt::Display for ThresholdRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.metric.is_empty() {
            f.write_str(&self.definition)
        } else {
            write!(f, "{},{}", self.metric, self.definition)
        }
    }
}

// ---------------------------------------------------------------------------
// Serialization
// ---------------------------------------------------------------------------

/// Wire shape of a [`ThresholdRange`].
///
/// Bounds travel as strings because JSON has no representation for the
/// infinities of open-ended ranges. `inside` keeps the legacy field name: it
/// is `true` when the value is expected inside the range, i.e. for
/// [`Sense::Outside`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RangeRecord {
    definition: String,
    metric: String,
    inside: bool,
    start: String,
    end: String,
}

impl From<ThresholdRange> for RangeRecord {
    fn from(range: ThresholdRange) -> Self {
        Self {
            inside: range.alerts_outside(),
            start: format_fixed(range.start),
            end: format_fixed(range.end),
            definition: range.definition,
            metric: range.metric,
        }
    }
}

impl TryFrom<RangeRecord> for ThresholdRange {
    type Error = String;

    /// The bounds are taken from `definition`, which carries them at full
    /// precision; the six-digit `start`/`end` strings must agree with it.
    fn try_from(record: RangeRecord) -> Result<Self, Self::Error> {
        let (sense, start, end) =
            parse_definition(&record.definition).map_err(|e| e.to_string())?;

        if record.inside != (sense == Sense::Outside) {
            return Err(format!(
                "inside flag does not match definition {:?}",
                record.definition
            ));
        }
        check_record_bound("start", &record.start, start, &record.definition)?;
        check_record_bound("end", &record.end, end, &record.definition)?;

        Ok(Self {
            definition: record.definition,
            metric: record.metric,
            sense,
            start,
            end,
        })
    }
}

fn check_record_bound(name: &str, text: &str, parsed: f64, definition: &str) -> Result<(), String> {
    let value = match text {
        "+Inf" => f64::INFINITY,
        "-Inf" => f64::NEG_INFINITY,
        other => other
            .parse::<f64>()
            .map_err(|_| ThresholdError::InvalidNumber { input: other.to_string() }.to_string())?,
    };

    if format_fixed(value) != format_fixed(parsed) {
        return Err(format!("{name} {text:?} does not match definition {definition:?}"));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
