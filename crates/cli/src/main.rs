// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! ipx - global p2p merkle-dag filesystem CLI

mod commands;
mod config;
mod error;
mod help;
mod logging;
mod output;

use std::process::ExitCode;

use anyhow::Result;
use ipx_core::root::{HELP_OPTION, SHORT_HELP_OPTION};
use ipx_core::{CommandTrees, Mode};
use tracing::debug;

use crate::error::IpxError;
use crate::help::HelpLevel;

#[tokio::main]
async fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    logging::init(logging::debug_requested(&args));

    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!("command failed: {:#}", err);
            match err.downcast_ref::<IpxError>() {
                Some(ipx_err) => eprint!("{}", ipx_err),
                None => eprintln!("error: {:#}", err),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &[String]) -> Result<()> {
    let registry = commands::registry().map_err(IpxError::startup)?;
    let trees = CommandTrees::init(registry).map_err(IpxError::startup)?;
    let tree = trees.select(Mode::Local);

    let resolved = tree.resolve(args).map_err(IpxError::invalid_arguments)?;
    debug!(command = %resolved.display_path(), "resolved");

    let level = if resolved.options.flag(HELP_OPTION) {
        Some(HelpLevel::Long)
    } else if resolved.options.flag(SHORT_HELP_OPTION) {
        Some(HelpLevel::Short)
    } else {
        None
    };
    if let Some(level) = level {
        print!("{}", help::render(&resolved.path, resolved.command, level));
        return Ok(());
    }

    if resolved.command.is_namespace() {
        return match resolved.arguments.first() {
            Some(name) => Err(IpxError::unknown_command(&resolved.display_path(), name).into()),
            None => {
                print!(
                    "{}",
                    help::render(&resolved.path, resolved.command, HelpLevel::Short)
                );
                Ok(())
            }
        };
    }

    let env = config::environment(&resolved.options).map_err(IpxError::config)?;
    let response = resolved
        .invoke(tree.root(), &env)
        .await
        .map_err(IpxError::command)?;

    let mut out = std::io::stdout();
    output::render(resolved.command, response, &mut out)
        .await
        .map_err(IpxError::command)?;
    Ok(())
}
