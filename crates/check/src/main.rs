//! `check_range` -- generic Nagios/Icinga range check.
//!
//! Evaluates the measurements given on the command line against warning and
//! critical ranges, prints one status line with performance data and exits
//! with the plugin exit code (0 OK, 1 WARNING, 2 CRITICAL, 3 UNKNOWN).
//!
//! # Environment variables
//!
//! | Variable               | Required | Default | Description                      |
//! |------------------------|----------|---------|----------------------------------|
//! | `CHECK_RANGE_WARNING`  | no       | --      | Fallback for `--warning`         |
//! | `CHECK_RANGE_CRITICAL` | no       | --      | Fallback for `--critical`        |
//! | `CHECK_RANGE_UOM`      | no       | --      | Fallback for `--uom`             |
//! | `RUST_LOG`             | no       | `warn`  | Log filter; logs go to stderr    |

use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pluginkit_check::check;
use pluginkit_core::output::print_line;
use pluginkit_core::Severity;

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    // stdout is reserved for the status line.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "check_range=warn,pluginkit_check=warn,pluginkit_core=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match check::execute(std::env::args_os()) {
        Ok(outcome) => {
            print_line(&outcome.line);
            exit_with(outcome.severity)
        }
        Err(e) => e.exit(),
    }
}

fn exit_with(severity: Severity) -> ExitCode {
    ExitCode::from(severity.exit_code())
}
