// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Handlers and fixtures shared by unit tests

use std::path::PathBuf;

use async_trait::async_trait;

use crate::command::{Command, CommandKind, Environment, Handler, LegacyHandler, Request};
use crate::error::CommandError;
use crate::response::{MessageOutput, Response};
use crate::root::Registry;

/// Modern handler answering with a fixed message
pub struct Reply(pub &'static str);

#[async_trait]
impl Handler for Reply {
    async fn run(&self, _req: &Request<'_>) -> Result<Response, CommandError> {
        Ok(Response::value(MessageOutput::new(self.0)))
    }
}

/// Legacy handler answering with a fixed message
pub struct LegacyReply(pub &'static str);

impl LegacyHandler for LegacyReply {
    fn run(&self, _req: &Request<'_>) -> Result<Response, CommandError> {
        Ok(Response::value(MessageOutput::new(self.0)))
    }
}

/// Legacy handler echoing the invoked path and arguments
pub struct Echo;

impl LegacyHandler for Echo {
    fn run(&self, req: &Request<'_>) -> Result<Response, CommandError> {
        let mut words: Vec<String> = req.path.to_vec();
        words.extend(req.arguments.iter().cloned());
        Ok(Response::value(MessageOutput::new(words.join(" "))))
    }
}

pub fn leaf(tagline: &'static str) -> Command {
    Command::legacy(tagline, LegacyReply(tagline))
}

pub fn modern_leaf(tagline: &'static str) -> Command {
    Command::modern(tagline, Reply(tagline))
}

pub fn namespace(tagline: &str) -> Command {
    Command::namespace(CommandKind::Legacy, tagline)
}

pub fn env() -> Environment {
    Environment {
        repo_path: PathBuf::from("/tmp/ipx-test/repo"),
        config_path: PathBuf::from("/tmp/ipx-test/repo/config.toml"),
        api_address: crate::root::DEFAULT_API_ADDR.to_string(),
        local: false,
    }
}

/// Registry shaped like the real command set, covering every name the
/// read-only allow-list refers to.
pub fn registry() -> Registry {
    let block = Command::namespace(CommandKind::Modern, "Interact with raw blocks in the datastore")
        .subcommands([
            ("stat", modern_leaf("Print information of a raw block")),
            ("get", modern_leaf("Get a raw block")),
            ("put", modern_leaf("Store input as a block")),
            ("rm", modern_leaf("Remove blocks")),
        ])
        .expect("block");

    let object_patch = namespace("Create a new object from an old one")
        .subcommands([
            ("add-link", leaf("Add a link to a given object")),
            ("rm-link", leaf("Remove a link from an object")),
        ])
        .expect("patch");

    Registry::new()
        .modern("add", modern_leaf("Add a file"))
        .modern("block", block)
        .modern("cat", modern_leaf("Show object data"))
        .modern("commands", modern_leaf("List all available commands"))
        .modern("get", modern_leaf("Download objects"))
        .legacy("dns", leaf("Resolve DNS links"))
        .legacy("ls", leaf("List links from an object"))
        .legacy(
            "name",
            namespace("Publish and resolve names")
                .subcommands([
                    ("publish", leaf("Publish a name")),
                    ("resolve", leaf("Resolve a name")),
                ])
                .expect("name"),
        )
        .legacy(
            "object",
            namespace("Interact with raw dag nodes")
                .subcommands([
                    ("data", leaf("Output the raw bytes of an object")),
                    ("links", leaf("Output the links of an object")),
                    ("get", leaf("Get an object")),
                    ("stat", leaf("Get stats for an object")),
                    ("put", leaf("Store input as an object")),
                    ("patch", object_patch),
                ])
                .expect("object"),
        )
        .legacy(
            "dag",
            namespace("Interact with IPLD documents")
                .subcommands([
                    ("get", leaf("Get a dag node")),
                    ("put", leaf("Add a dag node")),
                ])
                .expect("dag"),
        )
        .legacy(
            "refs",
            leaf("List hashes of links from an object")
                .subcommands([("local", leaf("List all local references"))])
                .expect("refs"),
        )
        .legacy("resolve", leaf("Resolve any type of name"))
        .legacy("version", leaf("Show version information"))
        .legacy(
            "pin",
            namespace("Pin objects to local storage")
                .subcommands([("add", leaf("Pin objects")), ("rm", leaf("Unpin objects"))])
                .expect("pin"),
        )
        .legacy("files", namespace("Interact with objects as if they were a unix filesystem"))
        .legacy("file", namespace("Interact with UnixFS objects"))
}
