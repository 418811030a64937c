//! Threshold evaluation -- pure logic, never fails.
//!
//! A metric without a configured range is simply not checked: missing
//! thresholds are not an error.

use serde::Serialize;

use super::parser::ThresholdList;
use crate::perfdata::PerformanceData;
use crate::severity::Severity;

/// Outcome of evaluating one value against the warning and critical lists.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Evaluation {
    pub severity: Severity,
    /// Definition of the warning range selected for the metric, if any.
    pub warning: Option<String>,
    /// Definition of the critical range selected for the metric, if any.
    pub critical: Option<String>,
}

impl Evaluation {
    /// Copy the selected range definitions into the threshold slots of
    /// `perfdata`. Slots without a selected range are left untouched.
    pub fn annotate(&self, mut perfdata: PerformanceData) -> PerformanceData {
        if let Some(critical) = &self.critical {
            perfdata.critical = Some(critical.clone());
        }
        if let Some(warning) = &self.warning {
            perfdata.warning = Some(warning.clone());
        }
        perfdata
    }
}

/// Evaluate `value` of `metric` against the warning and critical lists.
///
/// The critical range is checked first and wins; the warning range is only
/// consulted when the critical one does not alert. The definitions of both
/// selected ranges are reported whether or not they alerted.
pub fn evaluate(
    warning: &ThresholdList,
    critical: &ThresholdList,
    value: f64,
    metric: &str,
) -> Evaluation {
    let warning_range = warning.select(metric);
    let critical_range = critical.select(metric);

    let severity = if critical_range.is_some_and(|r| r.is_alert(value)) {
        Severity::Critical
    } else if warning_range.is_some_and(|r| r.is_alert(value)) {
        Severity::Warning
    } else {
        Severity::Ok
    };

    tracing::debug!(metric, value, %severity, "Evaluated value against thresholds");

    Evaluation {
        severity,
        warning: warning_range.map(|r| r.definition.clone()),
        critical: critical_range.map(|r| r.definition.clone()),
    }
}

/// Evaluate a performance data item, using its label as the metric name.
///
/// Returns the severity together with `perfdata` carrying the selected
/// threshold definitions.
pub fn evaluate_perfdata(
    warning: &ThresholdList,
    critical: &ThresholdList,
    perfdata: PerformanceData,
) -> (Severity, PerformanceData) {
    let evaluation = evaluate(warning, critical, perfdata.value, &perfdata.label);
    (evaluation.severity, evaluation.annotate(perfdata))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
