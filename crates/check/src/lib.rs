//! `pluginkit-check` library crate.
//!
//! Holds the argument parsing, configuration and check logic of the
//! `check_range` plugin so it can be exercised from integration tests. The
//! binary entrypoint lives in `main.rs`.

pub mod check;
pub mod cli;
pub mod config;
pub mod error;
