// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `ipx version`

use std::io::{Cursor, Read};

use ipx_core::root::PROGRAM;
use ipx_core::{
    unwrap_as, Command, CommandError, Encoding, LegacyHandler, OptionDef, Request, Response,
};
use serde::Serialize;

/// How much of the version report to print
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Detail {
    /// Bare version number
    Number,
    #[default]
    Name,
    All,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct VersionOutput {
    pub version: String,
    pub repo: String,
    pub system: String,
    #[serde(skip)]
    pub detail: Detail,
}

impl VersionOutput {
    fn render(&self) -> String {
        match self.detail {
            Detail::Number => format!("{}\n", self.version),
            Detail::Name => format!("{} version {}\n", PROGRAM, self.version),
            Detail::All => format!(
                "{} version: {}\nRepo path: {}\nSystem: {}\n",
                PROGRAM, self.version, self.repo, self.system
            ),
        }
    }
}

struct Version;

impl LegacyHandler for Version {
    fn run(&self, req: &Request<'_>) -> Result<Response, CommandError> {
        let detail = if req.options.flag("all") {
            Detail::All
        } else if req.options.flag("number") {
            Detail::Number
        } else {
            Detail::Name
        };
        Ok(Response::value(VersionOutput {
            version: env!("CARGO_PKG_VERSION").to_string(),
            repo: req.env.repo_path.display().to_string(),
            system: format!("{}/{}", std::env::consts::ARCH, std::env::consts::OS),
            detail,
        }))
    }
}

pub fn encode(response: Response) -> Encoding {
    Box::pin(async move {
        let out: VersionOutput = unwrap_as(response).await?;
        let text: Box<dyn Read + Send> = Box::new(Cursor::new(out.render().into_bytes()));
        Ok(text)
    })
}

pub fn command() -> Command {
    Command::legacy("Show ipx version information.", Version)
        .synopsis("ipx version [--number | -n] [--all | -a]")
        .description("Returns the current version of ipx and exits.")
        .option(
            OptionDef::bool("number", "Only show the version number.").alias('n').default(false),
        )
        .option(OptionDef::bool("all", "Show all version information.").alias('a').default(false))
        .text_encoder(encode)
}
