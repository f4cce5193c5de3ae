// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `ipx update`: forwards to an external binary

use std::io::ErrorKind;

use async_trait::async_trait;
use ipx_core::root::REPO_ENV;
use ipx_core::{Command, CommandError, Handler, Request, Response};
use tokio::process::Command as Process;
use tracing::debug;

/// Binary that implements `ipx update`
pub const UPDATE_BINARY: &str = "ipx-update";

/// Runs `program` with the command's arguments, inheriting stdio.
pub struct ExternalBinary {
    program: &'static str,
}

impl ExternalBinary {
    pub fn new(program: &'static str) -> Self {
        Self { program }
    }
}

#[async_trait]
impl Handler for ExternalBinary {
    async fn run(&self, req: &Request<'_>) -> Result<Response, CommandError> {
        debug!(program = self.program, args = ?req.arguments, "forwarding to external binary");
        let status = Process::new(self.program)
            .args(req.arguments)
            .env(REPO_ENV, &req.env.repo_path)
            .status()
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => CommandError::Failed(format!(
                    "'{}' is not installed; it must be on your $PATH",
                    self.program
                )),
                _ => CommandError::Io(e),
            })?;

        if !status.success() {
            return Err(CommandError::Failed(format!(
                "{} exited with {}",
                self.program, status
            )));
        }
        Ok(Response::empty())
    }
}

pub fn command() -> Command {
    Command::modern(
        "Download and apply ipx updates.",
        ExternalBinary::new(UPDATE_BINARY),
    )
    .synopsis("ipx update [--] <args>...")
    .description(
        "'ipx update' runs the ipx-update tool found on $PATH, passing it the \
remaining arguments. Separate options meant for ipx-update with '--'.",
    )
}
