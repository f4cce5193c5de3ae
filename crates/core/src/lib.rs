// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! ipx-core: the command tree behind the ipx CLI
//!
//! This crate provides:
//! - Command nodes, options and help metadata
//! - Root assembly from modern and legacy registrations
//! - Derivation of the read-only tree from an allow-list
//! - Response unwrapping for text encoders
//! - Argument resolution and dispatch against either tree

pub mod command;
pub mod error;
pub mod option;
pub mod readonly;
pub mod resolve;
pub mod response;
pub mod root;
pub mod trees;

#[cfg(test)]
mod testing;

pub use command::{
    register_subtree, Command, CommandKind, Environment, Handler, HelpText, LegacyHandler,
    Request, Run,
};
pub use error::{CommandError, TreeError};
pub use option::{OptionDef, OptionMap, OptionType, OptionValue};
pub use readonly::{derive_readonly, readonly_allow_list, AllowList, Exposure};
pub use resolve::{resolve, ResolveError, Resolved};
pub use response::{
    message_text_encoder, unwrap_as, unwrap_output, Encoded, Encoding, MessageOutput, Output,
    Payload, Response, ResponseError, TextEncoder,
};
pub use root::{finalize_help, Registry, RootBuilder};
pub use trees::{CommandTree, CommandTrees, Mode};
