//! Parser for the range grammar.
//!
//! ```text
//! list       := definition (";" definition)*
//! definition := [metric ","] ["@"] range
//! range      := end | start ":" | ":" end | start ":" end
//! bound      := "~" | decimal
//! ```
//!
//! A bare `end` implies a start of `0`; an omitted bound is open (`-inf` for
//! the start, `+inf` for the end) and `~` spells `-inf` explicitly.

use std::str::FromStr;

use serde::Serialize;

use super::range::{Sense, ThresholdRange};
use crate::error::ThresholdError;

const LIST_SEPARATOR: char = ';';
const METRIC_SEPARATOR: char = ',';
const BOUND_SEPARATOR: char = ':';
const INSIDE_PREFIX: char = '@';
const NEG_INFINITY_TOKEN: &str = "~";

// ---------------------------------------------------------------------------
// Threshold list
// ---------------------------------------------------------------------------

/// An ordered list of ranges parsed from one `;`-separated definition.
///
/// When the list holds more than one range, every range names its metric.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ThresholdList {
    ranges: Vec<ThresholdRange>,
}

impl ThresholdList {
    /// First range configured for `metric`, or `None` if the metric has no
    /// threshold. An empty name selects the range without a metric.
    ///
    /// Duplicate metric names are not rejected; the first one wins.
    pub fn select(&self, metric: &str) -> Option<&ThresholdRange> {
        self.ranges.iter().find(|r| r.metric == metric)
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn as_slice(&self) -> &[ThresholdRange] {
        &self.ranges
    }
}

impl FromStr for ThresholdList {
    type Err = ThresholdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_threshold_list(s)
    }
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parse a `;`-separated list of range definitions.
///
/// Empty segments are skipped, so an empty string yields an empty list. The
/// first invalid segment aborts the whole parse. Ranges without a metric are
/// only allowed when the list holds a single range.
pub fn parse_threshold_list(text: &str) -> Result<ThresholdList, ThresholdError> {
    let ranges = text
        .split(LIST_SEPARATOR)
        .filter(|segment| !segment.is_empty())
        .map(parse_threshold)
        .collect::<Result<Vec<_>, _>>()?;

    if ranges.len() > 1 && ranges.iter().any(|r| r.metric.is_empty()) {
        return Err(ThresholdError::MissingMetric);
    }

    tracing::debug!(definition = text, count = ranges.len(), "Parsed threshold list");

    Ok(ThresholdList { ranges })
}

/// Parse a single `[metric,][@]range` definition.
pub fn parse_threshold(text: &str) -> Result<ThresholdRange, ThresholdError> {
    let (metric, definition) = split_metric(text)?;
    let (sense, start, end) = parse_definition(definition)?;

    Ok(ThresholdRange {
        definition: definition.to_string(),
        metric: metric.to_string(),
        sense,
        start,
        end,
    })
}

/// Parse the `[@]range` part of a definition into its sense and validated
/// bounds.
pub(crate) fn parse_definition(definition: &str) -> Result<(Sense, f64, f64), ThresholdError> {
    let (sense, bounds) = match definition.strip_prefix(INSIDE_PREFIX) {
        Some(rest) => (Sense::Inside, rest),
        None => (Sense::Outside, definition),
    };

    if bounds.is_empty() {
        return Err(ThresholdError::EmptyRange);
    }

    let (start, end) = parse_bounds(bounds)?;
    if start > end {
        return Err(ThresholdError::StartGreaterThanEnd);
    }

    Ok((sense, start, end))
}

/// Parse one bound: `~` is `-inf`, anything else must be a decimal number.
///
/// Literals too large for `f64` are rejected; only an explicit `inf` or
/// `infinity` spelling yields an infinite bound.
pub fn parse_bound(text: &str) -> Result<f64, ThresholdError> {
    if text.is_empty() {
        return Err(ThresholdError::EmptyValue);
    }
    if text == NEG_INFINITY_TOKEN {
        return Ok(f64::NEG_INFINITY);
    }

    let value = text.parse::<f64>().map_err(|_| ThresholdError::InvalidNumber {
        input: text.to_string(),
    })?;

    if value.is_infinite() && !is_infinity_literal(text) {
        return Err(ThresholdError::OutOfRange {
            input: text.to_string(),
        });
    }
    Ok(value)
}

fn is_infinity_literal(text: &str) -> bool {
    let unsigned = text.trim_start_matches(['+', '-']);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

/// Split off the optional `metric,` prefix.
fn split_metric(text: &str) -> Result<(&str, &str), ThresholdError> {
    if text.starts_with(METRIC_SEPARATOR) {
        return Err(ThresholdError::EmptyMetric);
    }

    match text.split_once(METRIC_SEPARATOR) {
        None => Ok(("", text)),
        Some((_, rest)) if rest.is_empty() || rest.contains(METRIC_SEPARATOR) => {
            Err(ThresholdError::InvalidMetric)
        }
        Some((metric, rest)) => Ok((metric, rest)),
    }
}

/// Parse the bounds portion (after `@` stripping) into `(start, end)`.
fn parse_bounds(bounds: &str) -> Result<(f64, f64), ThresholdError> {
    if !bounds.contains(BOUND_SEPARATOR) {
        return Ok((0.0, parse_bound(bounds)?));
    }

    let parts: Vec<&str> = bounds
        .split(BOUND_SEPARATOR)
        .filter(|part| !part.is_empty())
        .collect();

    match parts.as_slice() {
        [] => Err(ThresholdError::EmptyRange),
        [start] if bounds.ends_with(BOUND_SEPARATOR) => Ok((parse_bound(start)?, f64::INFINITY)),
        [end] => Ok((f64::NEG_INFINITY, parse_bound(end)?)),
        [start, end] => Ok((parse_bound(start)?, parse_bound(end)?)),
        _ => Err(ThresholdError::TooManyValues),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
