// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The full and read-only command trees

use std::sync::Arc;

use tracing::info;

use crate::command::Command;
use crate::error::TreeError;
use crate::readonly::{derive_readonly, readonly_allow_list};
use crate::resolve::{resolve, ResolveError, Resolved};
use crate::root::{finalize_help, Registry, RootBuilder};

/// Which tree serves a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Local CLI use: every command
    Local,
    /// Constrained exposure: the read-only subset
    ReadOnly,
}

/// An immutable command tree.
///
/// No mutating operation is reachable once constructed; clones share the
/// same nodes.
#[derive(Debug, Clone)]
pub struct CommandTree {
    root: Arc<Command>,
}

impl CommandTree {
    pub fn new(root: Command) -> Self {
        Self {
            root: Arc::new(root),
        }
    }

    pub fn root(&self) -> &Command {
        &self.root
    }

    /// Node at `path` (command names below the root)
    pub fn get<S: AsRef<str>>(&self, path: &[S]) -> Option<&Command> {
        let mut node: &Command = &self.root;
        for name in path {
            node = node.child(name.as_ref())?.as_ref();
        }
        Some(node)
    }

    /// Every reachable path below the root, depth first in name order
    pub fn paths(&self) -> Vec<Vec<String>> {
        let mut out = Vec::new();
        let mut prefix = Vec::new();
        collect_paths(&self.root, &mut prefix, &mut out);
        out
    }

    pub fn resolve(&self, args: &[String]) -> Result<Resolved<'_>, ResolveError> {
        resolve(&self.root, args)
    }
}

fn collect_paths(node: &Command, prefix: &mut Vec<String>, out: &mut Vec<Vec<String>>) {
    for (name, child) in node.children() {
        prefix.push(name.to_string());
        out.push(prefix.clone());
        collect_paths(child, prefix, out);
        prefix.pop();
    }
}

/// Both trees, built once at startup and passed to the dispatcher
#[derive(Debug, Clone)]
pub struct CommandTrees {
    pub full: CommandTree,
    pub readonly: CommandTree,
}

impl CommandTrees {
    /// Assemble the full tree from `registry`, then derive the read-only
    /// tree from it. Any error leaves no tree behind.
    pub fn init(registry: Registry) -> Result<Self, TreeError> {
        let full = RootBuilder::standard().registry(registry)?.finish()?;
        let readonly = derive_readonly(&full, &readonly_allow_list())?;
        finalize_help(&readonly)?;

        let trees = Self {
            full: CommandTree::new(full),
            readonly: CommandTree::new(readonly),
        };
        info!(
            full = trees.full.paths().len(),
            readonly = trees.readonly.paths().len(),
            "command trees ready"
        );
        Ok(trees)
    }

    pub fn select(&self, mode: Mode) -> &CommandTree {
        match mode {
            Mode::Local => &self.full,
            Mode::ReadOnly => &self.readonly,
        }
    }
}

#[cfg(test)]
#[path = "trees_tests.rs"]
mod tests;
