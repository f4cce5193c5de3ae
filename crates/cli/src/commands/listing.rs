// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `ipx commands`: list the tree the request came through

use std::io::{Cursor, Read};

use async_trait::async_trait;
use ipx_core::root::PROGRAM;
use ipx_core::{
    unwrap_as, Command, CommandError, Encoding, Handler, OptionDef, Request, Response,
};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandListing {
    #[serde(rename = "Commands")]
    pub commands: Vec<String>,
}

struct ListCommands;

#[async_trait]
impl Handler for ListCommands {
    async fn run(&self, req: &Request<'_>) -> Result<Response, CommandError> {
        let flags = req.options.flag("flags");
        let mut commands = Vec::new();
        let mut prefix = vec![PROGRAM.to_string()];
        collect(req.root, &mut prefix, flags, &mut commands);
        Ok(Response::value(CommandListing { commands }))
    }
}

fn collect(node: &Command, prefix: &mut Vec<String>, flags: bool, out: &mut Vec<String>) {
    let line = prefix.join(" ");
    if flags {
        for opt in node.options() {
            let mut entry = if opt.name.chars().count() == 1 {
                format!("{} -{}", line, opt.name)
            } else {
                format!("{} --{}", line, opt.name)
            };
            if let Some(alias) = opt.alias {
                entry.push_str(&format!(" / -{}", alias));
            }
            out.push(entry);
        }
    }
    out.push(line);

    for (name, child) in node.children() {
        prefix.push(name.to_string());
        collect(child, prefix, flags, out);
        prefix.pop();
    }
}

pub fn encode(response: Response) -> Encoding {
    Box::pin(async move {
        let listing: CommandListing = unwrap_as(response).await?;
        let mut text = String::new();
        for line in listing.commands {
            text.push_str(&line);
            text.push('\n');
        }
        let text: Box<dyn Read + Send> = Box::new(Cursor::new(text.into_bytes()));
        Ok(text)
    })
}

pub fn command() -> Command {
    Command::modern("List all available commands.", ListCommands)
        .synopsis("ipx commands [--flags | -f]")
        .description("Lists all available commands (and subcommands) and exits.")
        .option(OptionDef::bool("flags", "Show command flags.").alias('f').default(false))
        .text_encoder(encode)
}
