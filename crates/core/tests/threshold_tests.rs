//! Integration tests for threshold parsing and evaluation.
//!
//! Exercises the public API the way a check plugin uses it: parse the
//! warning/critical options once, evaluate each measurement, fold the
//! verdicts and render the status line.

use assert_matches::assert_matches;

use pluginkit_core::output::render_status;
use pluginkit_core::thresholds::{evaluate, evaluate_perfdata, parse_threshold, parse_threshold_list};
use pluginkit_core::{PerformanceData, Sense, Severity, ThresholdError, ThresholdList};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn list(text: &str) -> ThresholdList {
    parse_threshold_list(text).expect("valid threshold list")
}

// ---------------------------------------------------------------------------
// Test: parsed ranges keep their definition text
// ---------------------------------------------------------------------------

/// `start:end` parses to an outside range whose definition is the input.
#[test]
fn start_end_range_round_trips_definition() {
    for (start, end) in [(0.0, 1.0), (-5.5, 5.5), (10.0, 10.0), (-100.0, -1.0)] {
        let text = format!("{start}:{end}");
        let r = parse_threshold(&text).expect("valid range");
        assert_eq!(r.sense, Sense::Outside);
        assert_eq!((r.start, r.end), (start, end));
        assert_eq!(r.definition, text);
    }
}

/// `@` flips the sense and nothing else; the definition keeps the `@`.
#[test]
fn at_prefix_only_flips_sense() {
    for text in ["10", "10:20", "10:", ":20", "~:20"] {
        let plain = parse_threshold(text).expect("valid range");
        let inside = parse_threshold(&format!("@{text}")).expect("valid range");

        assert_eq!(inside.sense, Sense::Inside);
        assert_eq!((inside.start, inside.end), (plain.start, plain.end));
        assert_eq!(inside.definition, format!("@{text}"));
    }
}

/// A bare number is the same range as `0:<n>`.
#[test]
fn bare_number_starts_at_zero() {
    let bare = parse_threshold("42.5").expect("valid range");
    let explicit = parse_threshold("0:42.5").expect("valid range");
    assert_eq!((bare.start, bare.end), (explicit.start, explicit.end));
}

/// `~:n` and `:n` both leave the start open.
#[test]
fn tilde_and_missing_start_are_equivalent() {
    let tilde = parse_threshold("~:7").expect("valid range");
    let missing = parse_threshold(":7").expect("valid range");
    assert_eq!(tilde.start, f64::NEG_INFINITY);
    assert_eq!(missing.start, f64::NEG_INFINITY);
    assert_eq!(tilde.end, missing.end);
}

/// The metric prefix is stripped from the definition.
#[test]
fn metric_prefix_is_not_part_of_definition() {
    let r = parse_threshold("disk_root,@80:90").expect("valid range");
    assert_eq!(r.metric, "disk_root");
    assert_eq!(r.definition, "@80:90");
    assert_eq!(r.to_string(), "disk_root,@80:90");
}

// ---------------------------------------------------------------------------
// Test: list-level rules
// ---------------------------------------------------------------------------

#[test]
fn list_of_named_ranges() {
    let list = list("metric1,10:;metric2,@30:");
    let ranges = list.as_slice();

    assert_eq!(ranges.len(), 2);
    assert_eq!(ranges[0].metric, "metric1");
    assert_eq!(ranges[0].sense, Sense::Outside);
    assert_eq!((ranges[0].start, ranges[0].end), (10.0, f64::INFINITY));
    assert_eq!(ranges[1].metric, "metric2");
    assert_eq!(ranges[1].sense, Sense::Inside);
    assert_eq!((ranges[1].start, ranges[1].end), (30.0, f64::INFINITY));
}

#[test]
fn list_errors() {
    assert_matches!(parse_threshold_list("10:20;@30:40"), Err(ThresholdError::MissingMetric));
    assert_matches!(
        parse_threshold_list("metric1,10:20;,@30:40"),
        Err(ThresholdError::EmptyMetric)
    );
    assert_matches!(
        "metric1,10:20;metric2,abc".parse::<ThresholdList>(),
        Err(ThresholdError::InvalidNumber { input }) if input == "abc"
    );
}

// ---------------------------------------------------------------------------
// Test: evaluation
// ---------------------------------------------------------------------------

#[test]
fn outside_range_boundaries() {
    let r = parse_threshold("10:20").expect("valid range");
    assert!(!r.is_alert(10.0));
    assert!(!r.is_alert(20.0));
    assert!(r.is_alert(9.999));
    assert!(r.is_alert(20.001));
}

#[test]
fn inside_open_range_boundaries() {
    let r = parse_threshold("@~:20").expect("valid range");
    assert!(r.is_alert(20.0));
    assert!(r.is_alert(-20.0));
    assert!(!r.is_alert(40.0));
}

#[test]
fn unnamed_warning_range_warns() {
    let result = evaluate(&list("10:20"), &ThresholdList::default(), 25.0, "");
    assert_eq!(result.severity, Severity::Warning);
}

#[test]
fn unconfigured_metric_leaves_perfdata_alone() {
    let pd = PerformanceData::new("swap", 99.0, "%");
    let (severity, annotated) = evaluate_perfdata(&list("mem,80"), &list("mem,90"), pd.clone());
    assert_eq!(severity, Severity::Ok);
    assert_eq!(annotated, pd);
}

// ---------------------------------------------------------------------------
// Test: a full check run
// ---------------------------------------------------------------------------

#[test]
fn load_check_end_to_end() {
    let warning = list("load1,~:4;load5,~:3;load15,~:2");
    let critical = list("load1,~:8;load5,~:6;load15,~:4");

    let measurements = [("load1", 5.25), ("load5", 2.0), ("load15", 4.5)];

    let mut severities = Vec::new();
    let mut perfdata = Vec::new();
    for (label, value) in measurements {
        let (severity, pd) =
            evaluate_perfdata(&warning, &critical, PerformanceData::new(label, value, ""));
        severities.push(severity);
        perfdata.push(pd);
    }

    let severity = Severity::fold(severities);
    assert_eq!(severity, Severity::Critical);
    assert_eq!(severity.exit_code(), 2);
    assert_eq!(
        render_status(severity, "load average", &perfdata),
        "CRITICAL - load average | 'load1'=5.250000;~:4;~:8;; 'load5'=2;~:3;~:6;; 'load15'=4.500000;~:2;~:4;;"
    );
}

// ---------------------------------------------------------------------------
// Test: JSON form
// ---------------------------------------------------------------------------

#[test]
fn list_serializes_with_string_bounds() {
    let json = serde_json::to_value(list("a,10:;b,@~:5")).expect("serialization should succeed");

    assert_eq!(json[0]["metric"], "a");
    assert_eq!(json[0]["inside"], true);
    assert_eq!(json[0]["start"], "10.000000");
    assert_eq!(json[0]["end"], "+Inf");
    assert_eq!(json[1]["inside"], false);
    assert_eq!(json[1]["start"], "-Inf");
    assert_eq!(json[1]["end"], "5.000000");
}

#[test]
fn range_survives_json_round_trip() {
    let original = parse_threshold("m,@~:").expect("valid range");
    let json = serde_json::to_string(&original).expect("serialization should succeed");
    let restored: pluginkit_core::ThresholdRange =
        serde_json::from_str(&json).expect("deserialization should succeed");
    assert_eq!(restored, original);
}
