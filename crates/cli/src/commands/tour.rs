// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `ipx tour`

use ipx_core::{
    message_text_encoder, Command, CommandError, LegacyHandler, MessageOutput, Request, Response,
};

const INTRO: &str = "Hello Mars

This is ipx, a content-addressed, peer-to-peer file system. Every file and
directory you add is identified by the hash of its content, so the same data
always has the same name wherever it is stored.

Try a few commands to get started:

  ipx add <file>      Add a file and print its hash
  ipx cat <hash>      Print the data behind a hash
  ipx ls <hash>       List the links of a directory object
  ipx commands        List every command
";

struct Tour;

impl LegacyHandler for Tour {
    fn run(&self, req: &Request<'_>) -> Result<Response, CommandError> {
        match req.arguments.first().map(String::as_str) {
            None | Some("0") | Some("intro") => Ok(Response::value(MessageOutput::new(INTRO))),
            Some(topic) => Err(CommandError::Failed(format!(
                "no tour topic '{}'; run 'ipx tour' for the introduction",
                topic
            ))),
        }
    }
}

pub fn command() -> Command {
    Command::legacy("An introduction to ipx.", Tour)
        .synopsis("ipx tour [<id>]")
        .description("'ipx tour' is a guide that walks through the basics of ipx.")
        .text_encoder(message_text_encoder)
}
