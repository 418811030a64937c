//! `pluginkit-core` -- building blocks for Nagios/Icinga style check plugins.
//!
//! * [`thresholds`] parses range definitions such as `load1,@10:20` and
//!   evaluates measured values against them.
//! * [`severity`] holds the plugin verdict and its exit code.
//! * [`perfdata`] formats performance data for graphing.
//! * [`output`] renders the single status line a plugin prints.
//!
//! Everything in this crate is pure and synchronous.

pub mod error;
pub mod output;
pub mod perfdata;
pub mod severity;
pub mod thresholds;

pub use error::ThresholdError;
pub use perfdata::PerformanceData;
pub use severity::Severity;
pub use thresholds::{evaluate, Evaluation, Sense, ThresholdList, ThresholdRange};
