// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Read-only tree derivation.
//!
//! The restricted tree is built from scratch: a childless copy of the full
//! root, then one entry per allow-list item. Leaves are shared with the full
//! tree by reference, while every children map in the restricted tree is a
//! fresh allocation. Restriction only hides or prunes commands.

use std::sync::Arc;

use tracing::debug;

use crate::command::{register_subtree, Command};
use crate::error::TreeError;
use crate::root::PROGRAM;

/// How much of a command the restricted tree exposes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exposure {
    /// The command and all of its descendants, shared by reference
    Full,
    /// The command itself with an empty children map
    Pruned,
    /// A handler-less namespace holding only the listed children
    Only(AllowList),
}

/// Ordered list of command names exposed at one level
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowList {
    entries: Vec<(String, Exposure)>,
}

impl AllowList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn full(mut self, name: &str) -> Self {
        self.entries.push((name.to_string(), Exposure::Full));
        self
    }

    pub fn pruned(mut self, name: &str) -> Self {
        self.entries.push((name.to_string(), Exposure::Pruned));
        self
    }

    /// Expose `name` as a namespace holding just `children`, each in full.
    pub fn only<'a>(mut self, name: &str, children: impl IntoIterator<Item = &'a str>) -> Self {
        let nested = children
            .into_iter()
            .fold(AllowList::new(), |list, child| list.full(child));
        self.entries.push((name.to_string(), Exposure::Only(nested)));
        self
    }

    pub fn nested(mut self, name: &str, children: AllowList) -> Self {
        self.entries.push((name.to_string(), Exposure::Only(children)));
        self
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &Exposure)> {
        self.entries.iter().map(|(n, e)| (n.as_str(), e))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Commands exposed on the read-only API surface
pub fn readonly_allow_list() -> AllowList {
    AllowList::new()
        .full("commands")
        .full("cat")
        .only("block", ["stat", "get"])
        .full("get")
        .full("dns")
        .full("ls")
        .only("name", ["resolve"])
        .only("object", ["data", "links", "get", "stat"])
        .only("dag", ["get"])
        .pruned("refs")
        .full("resolve")
        .full("version")
}

/// Build the restricted tree for `full` according to `allow`.
pub fn derive_readonly(full: &Command, allow: &AllowList) -> Result<Command, TreeError> {
    let mut root = full.header();
    populate(&mut root, full, allow).map_err(|e| e.under(PROGRAM))?;
    debug!(commands = allow.len(), "derived read-only command tree");
    Ok(root)
}

fn populate(target: &mut Command, source: &Command, allow: &AllowList) -> Result<(), TreeError> {
    for (name, exposure) in allow.entries() {
        let original = source
            .child(name)
            .ok_or_else(|| TreeError::AllowListDrift {
                path: name.to_string(),
            })?;

        let node = match exposure {
            Exposure::Full => Arc::clone(original),
            Exposure::Pruned => Arc::new(original.header()),
            Exposure::Only(children) => {
                let mut namespace = Command::namespace(original.kind(), &original.help().tagline)
                    .with_help(original.help().clone())
                    .options_from(original.options().iter().cloned());
                populate(&mut namespace, original, children).map_err(|e| e.under(name))?;
                Arc::new(namespace)
            }
        };
        register_subtree(target, name, node)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "readonly_tests.rs"]
mod tests;
