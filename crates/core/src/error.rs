/// Errors raised while parsing threshold range definitions.
///
/// The messages are part of the plugin's user-visible output: monitoring
/// systems show them verbatim on the `UNKNOWN` status line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThresholdError {
    #[error("empty metric")]
    EmptyMetric,

    #[error("invalid metric")]
    InvalidMetric,

    #[error("missing metric")]
    MissingMetric,

    #[error("empty range")]
    EmptyRange,

    #[error("invalid range: too many values")]
    TooManyValues,

    #[error("invalid range: start greater than end")]
    StartGreaterThanEnd,

    #[error("empty value")]
    EmptyValue,

    #[error("parsing {input:?}: invalid syntax")]
    InvalidNumber { input: String },

    #[error("parsing {input:?}: value out of range")]
    OutOfRange { input: String },
}
