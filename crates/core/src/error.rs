// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tree construction and command execution errors

use thiserror::Error;

use crate::command::CommandKind;
use crate::response::ResponseError;

/// Errors raised while assembling or deriving a command tree.
///
/// All of these are fatal at startup. Paths are space-separated command
/// names; errors raised below the root carry a relative path until a caller
/// anchors them with [`TreeError::under`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TreeError {
    #[error("duplicate registration: `{path}` is already registered")]
    DuplicateRegistration { path: String },

    #[error("missing help metadata: `{path}` has no tagline")]
    MissingHelpMetadata { path: String },

    #[error("read-only allow-list names `{path}`, which is not in the full command tree")]
    AllowListDrift { path: String },

    #[error("`{path}` registered as {expected} but is a {actual} command")]
    KindMismatch {
        path: String,
        expected: CommandKind,
        actual: CommandKind,
    },

    #[error("`{path}` declares option `--{name}` more than once")]
    DuplicateOption { path: String, name: String },

    #[error("`{path}` declares alias `-{alias}` more than once")]
    DuplicateAlias { path: String, alias: char },

    #[error("`{path}` option `--{name}` has a default of the wrong type")]
    DefaultTypeMismatch { path: String, name: String },
}

impl TreeError {
    /// Prefix the error's path with `prefix` (a parent command path).
    pub fn under(self, prefix: &str) -> Self {
        let join = |path: String| {
            if prefix.is_empty() {
                path
            } else if path.is_empty() {
                prefix.to_string()
            } else {
                format!("{prefix} {path}")
            }
        };
        match self {
            TreeError::DuplicateRegistration { path } => {
                TreeError::DuplicateRegistration { path: join(path) }
            }
            TreeError::MissingHelpMetadata { path } => {
                TreeError::MissingHelpMetadata { path: join(path) }
            }
            TreeError::AllowListDrift { path } => TreeError::AllowListDrift { path: join(path) },
            TreeError::KindMismatch {
                path,
                expected,
                actual,
            } => TreeError::KindMismatch {
                path: join(path),
                expected,
                actual,
            },
            TreeError::DuplicateOption { path, name } => TreeError::DuplicateOption {
                path: join(path),
                name,
            },
            TreeError::DuplicateAlias { path, alias } => TreeError::DuplicateAlias {
                path: join(path),
                alias,
            },
            TreeError::DefaultTypeMismatch { path, name } => TreeError::DefaultTypeMismatch {
                path: join(path),
                name,
            },
        }
    }

    /// Path of the command the error refers to
    pub fn path(&self) -> &str {
        match self {
            TreeError::DuplicateRegistration { path }
            | TreeError::MissingHelpMetadata { path }
            | TreeError::AllowListDrift { path }
            | TreeError::KindMismatch { path, .. }
            | TreeError::DuplicateOption { path, .. }
            | TreeError::DuplicateAlias { path, .. }
            | TreeError::DefaultTypeMismatch { path, .. } => path,
        }
    }
}

/// Errors surfaced by a command invocation.
///
/// These are per-request: they fail the invocation (exit status 1) and
/// never affect the trees or other requests.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("`{path}` is a namespace and cannot be called directly")]
    NotExecutable { path: String },

    #[error("`{command}` needs the {subsystem} subsystem, which this build does not include")]
    Unavailable { command: String, subsystem: String },

    #[error("{0}")]
    Failed(String),

    #[error(transparent)]
    Response(#[from] ResponseError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
