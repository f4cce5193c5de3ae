// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command registrations
//!
//! Every top-level command is declared here with its help text and options.
//! Commands served by a subsystem outside this binary are backed by
//! [`Unavailable`].

mod content;
mod data;
mod naming;
mod network;
mod node;

pub mod listing;
pub mod tour;
pub mod update;
pub mod version;

use async_trait::async_trait;
use ipx_core::root::PROGRAM;
use ipx_core::{
    Command, CommandError, CommandKind, Handler, LegacyHandler, Registry, Request, Response,
    TreeError,
};

/// Collect every collaborator registration.
pub fn registry() -> Result<Registry, TreeError> {
    Ok(Registry::new()
        // modern
        .modern("add", content::add())
        .modern("block", data::block()?)
        .modern("cat", content::cat())
        .modern("commands", listing::command())
        .modern("get", content::get())
        .modern("filestore", data::filestore()?)
        .modern("update", update::command())
        // legacy
        .legacy("bitswap", network::bitswap()?)
        .legacy("bootstrap", network::bootstrap()?)
        .legacy("config", node::config()?)
        .legacy("dag", data::dag()?)
        .legacy("daemon", node::daemon())
        .legacy("dht", network::dht()?)
        .legacy("diag", node::diag()?)
        .legacy("dns", naming::dns())
        .legacy("file", content::file()?)
        .legacy("files", data::files()?)
        .legacy("id", network::id())
        .legacy("key", naming::key()?)
        .legacy("log", node::log()?)
        .legacy("ls", content::ls())
        .legacy("mount", node::mount())
        .legacy("name", naming::name()?)
        .legacy("object", data::object()?)
        .legacy("pin", node::pin()?)
        .legacy("ping", network::ping())
        .legacy("ptp", network::ptp()?)
        .legacy("pubsub", network::pubsub()?)
        .legacy("refs", content::refs()?)
        .legacy("repo", node::repo()?)
        .legacy("resolve", naming::resolve())
        .legacy("shutdown", node::shutdown())
        .legacy("stats", node::stats()?)
        .legacy("swarm", network::swarm()?)
        .legacy("tar", content::tar()?)
        .legacy("tour", tour::command())
        .legacy("version", version::command()))
}

/// Stand-in handler for a command whose subsystem is not part of this build.
#[derive(Debug, Clone)]
pub struct Unavailable {
    subsystem: &'static str,
}

impl Unavailable {
    pub fn new(subsystem: &'static str) -> Self {
        Self { subsystem }
    }

    fn error(&self, req: &Request<'_>) -> CommandError {
        let command = std::iter::once(PROGRAM)
            .chain(req.path.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ");
        tracing::debug!(%command, subsystem = self.subsystem, "subsystem unavailable");
        CommandError::Unavailable {
            command,
            subsystem: self.subsystem.to_string(),
        }
    }
}

#[async_trait]
impl Handler for Unavailable {
    async fn run(&self, req: &Request<'_>) -> Result<Response, CommandError> {
        Err(self.error(req))
    }
}

impl LegacyHandler for Unavailable {
    fn run(&self, req: &Request<'_>) -> Result<Response, CommandError> {
        Err(self.error(req))
    }
}

/// Modern leaf served by `subsystem`
fn modern(tagline: &str, subsystem: &'static str) -> Command {
    Command::modern(tagline, Unavailable::new(subsystem))
}

/// Legacy leaf served by `subsystem`
fn legacy(tagline: &str, subsystem: &'static str) -> Command {
    Command::legacy(tagline, Unavailable::new(subsystem))
}

/// Legacy handler-less group
fn group(tagline: &str) -> Command {
    Command::namespace(CommandKind::Legacy, tagline)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
