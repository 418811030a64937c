//! Threshold range engine.
//!
//! Parses the Nagios/Icinga range grammar `[<metric>,][@]<range>` (several
//! definitions joined with `;`) into [`ThresholdRange`] records and evaluates
//! measured values against warning and critical lists.
//!
//! All logic in this module is pure. Callers decide what to do with the
//! resulting [`Evaluation`].

pub mod evaluator;
pub mod parser;
pub mod range;

pub use evaluator::{evaluate, evaluate_perfdata, Evaluation};
pub use parser::{parse_bound, parse_threshold, parse_threshold_list, ThresholdList};
pub use range::{Sense, ThresholdRange};
