use pluginkit_core::ThresholdError;

/// Errors that turn a check run into an `UNKNOWN` result.
///
/// Threshold errors are passed through unchanged; their text is what the
/// monitoring system shows.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error(transparent)]
    Threshold(#[from] ThresholdError),

    #[error("invalid measurement {0:?}: expected [<label>=]<value>")]
    InvalidMeasurement(String),

    #[error("no measurement given")]
    NoMeasurements,
}
