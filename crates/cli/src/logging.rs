// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic logging to stderr

use ipx_core::root::DEBUG_OPTION;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global subscriber. `RUST_LOG` takes precedence over `debug`.
pub fn init(debug: bool) {
    let level = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

/// Whether `--debug`/`-D` appears on the command line.
///
/// Logging is installed before the trees exist, so this looks at the raw
/// tokens instead of a resolved option map. The last occurrence wins.
pub fn debug_requested(args: &[String]) -> bool {
    let long = format!("--{DEBUG_OPTION}");
    let mut debug = false;
    for arg in args {
        if arg == "--" {
            break;
        }
        let (key, value) = match arg.split_once('=') {
            Some((k, v)) => (k, Some(v)),
            None => (arg.as_str(), None),
        };
        if key != long && key != "-D" {
            continue;
        }
        debug = match value {
            None => true,
            Some(v) => matches!(v, "true" | "1"),
        };
    }
    debug
}
