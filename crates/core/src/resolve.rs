// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resolving an argument vector against a command tree

use thiserror::Error;

use crate::command::{Command, Environment, Request};
use crate::error::CommandError;
use crate::option::{OptionDef, OptionMap, OptionType, OptionValue};
use crate::response::Response;
use crate::root::PROGRAM;

/// Errors that can occur while resolving arguments
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("unknown option `{0}`")]
    UnknownOption(String),
    #[error("option `{0}` requires a value")]
    MissingValue(String),
    #[error("invalid value `{value}` for option `{option}`: expected {expected}")]
    InvalidValue {
        option: String,
        value: String,
        expected: OptionType,
    },
}

/// A command located in a tree, with its options and arguments
#[derive(Debug)]
pub struct Resolved<'t> {
    /// Command names from the root to `command`
    pub path: Vec<String>,
    pub command: &'t Command,
    pub options: OptionMap,
    pub arguments: Vec<String>,
}

impl Resolved<'_> {
    /// Space-separated path including the program name
    pub fn display_path(&self) -> String {
        std::iter::once(PROGRAM)
            .chain(self.path.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Run the resolved command's handler.
    ///
    /// `root` is the tree the command was resolved through.
    pub async fn invoke(
        &self,
        root: &Command,
        env: &Environment,
    ) -> Result<Response, CommandError> {
        let run = self
            .command
            .run()
            .ok_or_else(|| CommandError::NotExecutable {
                path: self.display_path(),
            })?;
        let req = Request {
            path: &self.path,
            options: &self.options,
            arguments: &self.arguments,
            root,
            env,
        };
        run.call(&req).await
    }
}

/// Walk `args` through the tree rooted at `root`.
///
/// Options of every command along the path are accepted anywhere on the
/// line. Child names are followed until the first positional argument; the
/// rest become arguments. `--` ends option parsing.
pub fn resolve<'t>(root: &'t Command, args: &[String]) -> Result<Resolved<'t>, ResolveError> {
    let mut command = root;
    let mut path = Vec::new();
    let mut scopes: Vec<&'t [OptionDef]> = vec![root.options()];
    let mut options = OptionMap::new();
    options.add_defaults(root.options());
    let mut arguments: Vec<String> = Vec::new();
    let mut options_done = false;

    let mut iter = args.iter().map(String::as_str);
    while let Some(arg) = iter.next() {
        if !options_done && arg == "--" {
            options_done = true;
            continue;
        }

        if !options_done && arg.len() > 1 && arg.starts_with('-') {
            let (key, inline) = match arg.split_once('=') {
                Some((k, v)) => (k, Some(v)),
                None => (arg, None),
            };
            let def = find_option(&scopes, key)
                .ok_or_else(|| ResolveError::UnknownOption(key.to_string()))?;
            let value = match def.kind {
                OptionType::Bool => match inline {
                    None => OptionValue::Bool(true),
                    Some(raw) => OptionValue::Bool(parse_bool(raw).ok_or_else(|| {
                        ResolveError::InvalidValue {
                            option: key.to_string(),
                            value: raw.to_string(),
                            expected: OptionType::Bool,
                        }
                    })?),
                },
                OptionType::String => match inline {
                    Some(raw) => OptionValue::String(raw.to_string()),
                    None => OptionValue::String(
                        iter.next()
                            .ok_or_else(|| ResolveError::MissingValue(key.to_string()))?
                            .to_string(),
                    ),
                },
            };
            options.set(&def.name, value);
            continue;
        }

        if arguments.is_empty() {
            if let Some(child) = command.child(arg) {
                command = child.as_ref();
                path.push(arg.to_string());
                scopes.push(command.options());
                options.add_defaults(command.options());
                continue;
            }
        }
        arguments.push(arg.to_string());
    }

    Ok(Resolved {
        path,
        command,
        options,
        arguments,
    })
}

fn find_option<'t>(scopes: &[&'t [OptionDef]], key: &str) -> Option<&'t OptionDef> {
    enum Key<'k> {
        Long(&'k str),
        Short(char),
    }

    let key = match key.strip_prefix("--") {
        Some(long) => Key::Long(long),
        None => {
            let mut chars = key.chars().skip(1);
            match (chars.next(), chars.next()) {
                (Some(c), None) => Key::Short(c),
                _ => return None,
            }
        }
    };
    // Innermost command wins when a name is declared at several levels
    scopes
        .iter()
        .rev()
        .copied()
        .flat_map(|defs| defs.iter())
        .find(|def| match key {
            Key::Long(name) => def.name == name,
            Key::Short(c) => def.matches_short(c),
        })
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;
