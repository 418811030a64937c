//! Performance data attached to a plugin's status line.
//!
//! Rendered as `'<label>'=<value><uom>;<warning>;<critical>;<minimum>;<maximum>`.
//! Slots that are not set render empty, so a bare value still carries all
//! four separators.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of fractional digits used for non-integral values.
const FRACTION_DIGITS: usize = 6;

/// A single performance data item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceData {
    pub label: String,
    pub value: f64,
    /// Unit of measure, e.g. `s`, `%`, `B`, `c`.
    pub uom: String,
    pub warning: Option<String>,
    pub critical: Option<String>,
    pub minimum: Option<String>,
    pub maximum: Option<String>,
}

impl PerformanceData {
    pub fn new(label: impl Into<String>, value: f64, uom: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value,
            uom: uom.into(),
            warning: None,
            critical: None,
            minimum: None,
            maximum: None,
        }
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warning = Some(warning.into());
        self
    }

    pub fn with_critical(mut self, critical: impl Into<String>) -> Self {
        self.critical = Some(critical.into());
        self
    }

    pub fn with_minimum(mut self, minimum: impl Into<String>) -> Self {
        self.minimum = Some(minimum.into());
        self
    }

    pub fn with_maximum(mut self, maximum: impl Into<String>) -> Self {
        self.maximum = Some(maximum.into());
        self
    }
}

impl fmt::Display for PerformanceData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}'={}{};{};{};{};{}",
            self.label,
            format_value(self.value),
            self.uom,
            self.warning.as_deref().unwrap_or_default(),
            self.critical.as_deref().unwrap_or_default(),
            self.minimum.as_deref().unwrap_or_default(),
            self.maximum.as_deref().unwrap_or_default(),
        )
    }
}

/// Format a measured value: integral values drop the fractional part,
/// everything else gets six fractional digits.
pub fn format_value(value: f64) -> String {
    if is_integral(value) {
        // Guarded by `is_integral`, the cast is exact.
        (value as i64).to_string()
    } else {
        format_fixed(value)
    }
}

/// Format a float with exactly six fractional digits.
///
/// Infinities render as `+Inf` / `-Inf` and NaN as `NaN` so the text can be
/// parsed back without loss.
pub fn format_fixed(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "+Inf".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Inf".to_string()
    } else {
        format!("{:.1$}", value, FRACTION_DIGITS)
    }
}

/// Whether `value` is a whole number representable as `i64`.
fn is_integral(value: f64) -> bool {
    // 2^63 as f64 is the first value past `i64::MAX`.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    value.is_finite() && value.fract() == 0.0 && (-LIMIT..LIMIT).contains(&value)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
