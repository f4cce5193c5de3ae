// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command tree nodes

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use crate::error::{CommandError, TreeError};
use crate::option::{OptionDef, OptionMap};
use crate::response::{Response, TextEncoder};

/// Which of the two historical command shapes a node uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandKind {
    Modern,
    Legacy,
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandKind::Modern => f.write_str("modern"),
            CommandKind::Legacy => f.write_str("legacy"),
        }
    }
}

/// Help metadata rendered for a command
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HelpText {
    /// One-line summary, shown in parent listings
    pub tagline: String,
    /// Usage line
    pub synopsis: String,
    /// Grouped subcommand listing
    pub subcommands: String,
    /// Long-form description
    pub description: String,
}

impl HelpText {
    pub fn tagline(tagline: &str) -> Self {
        Self {
            tagline: tagline.to_string(),
            ..Self::default()
        }
    }
}

/// Process-level context handed to handlers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    /// On-disk repository location
    pub repo_path: PathBuf,
    /// Configuration file in effect
    pub config_path: PathBuf,
    /// API endpoint of the daemon
    pub api_address: String,
    /// Run locally instead of through the daemon
    pub local: bool,
}

/// One resolved invocation, as seen by a handler
pub struct Request<'a> {
    /// Command names from the root to the invoked node
    pub path: &'a [String],
    pub options: &'a OptionMap,
    /// Positional arguments after the command path
    pub arguments: &'a [String],
    /// Root of the tree the request was dispatched through
    pub root: &'a Command,
    pub env: &'a Environment,
}

/// Entry point of a modern command
#[async_trait]
pub trait Handler: Send + Sync {
    async fn run(&self, req: &Request<'_>) -> Result<Response, CommandError>;
}

/// Entry point of a legacy command (synchronous)
pub trait LegacyHandler: Send + Sync {
    fn run(&self, req: &Request<'_>) -> Result<Response, CommandError>;
}

/// A handler reference, tagged by command kind
#[derive(Clone)]
pub enum Run {
    Modern(Arc<dyn Handler>),
    Legacy(Arc<dyn LegacyHandler>),
}

impl Run {
    pub fn kind(&self) -> CommandKind {
        match self {
            Run::Modern(_) => CommandKind::Modern,
            Run::Legacy(_) => CommandKind::Legacy,
        }
    }

    pub async fn call(&self, req: &Request<'_>) -> Result<Response, CommandError> {
        match self {
            Run::Modern(handler) => handler.run(req).await,
            Run::Legacy(handler) => handler.run(req),
        }
    }

    /// Whether both references point at the same handler instance
    pub fn same_handler(&self, other: &Run) -> bool {
        match (self, other) {
            (Run::Modern(a), Run::Modern(b)) => Arc::ptr_eq(a, b),
            (Run::Legacy(a), Run::Legacy(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for Run {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Run::{}", self.kind())
    }
}

/// A node of the command tree.
///
/// Names live in the parent's children map, so one node may be shared by
/// several trees under the same name.
#[derive(Clone)]
pub struct Command {
    kind: CommandKind,
    help: HelpText,
    options: Vec<OptionDef>,
    children: BTreeMap<String, Arc<Command>>,
    run: Option<Run>,
    text_encoder: Option<TextEncoder>,
}

impl Command {
    fn with_run(tagline: &str, run: Run) -> Self {
        Self {
            kind: run.kind(),
            help: HelpText::tagline(tagline),
            options: Vec::new(),
            children: BTreeMap::new(),
            run: Some(run),
            text_encoder: None,
        }
    }

    /// A modern command backed by `handler`
    pub fn modern(tagline: &str, handler: impl Handler + 'static) -> Self {
        Self::with_run(tagline, Run::Modern(Arc::new(handler)))
    }

    /// A legacy command backed by `handler`
    pub fn legacy(tagline: &str, handler: impl LegacyHandler + 'static) -> Self {
        Self::with_run(tagline, Run::Legacy(Arc::new(handler)))
    }

    /// A handler-less node that only groups children
    pub fn namespace(kind: CommandKind, tagline: &str) -> Self {
        Self {
            kind,
            help: HelpText::tagline(tagline),
            options: Vec::new(),
            children: BTreeMap::new(),
            run: None,
            text_encoder: None,
        }
    }

    pub fn with_help(mut self, help: HelpText) -> Self {
        self.help = help;
        self
    }

    pub fn synopsis(mut self, synopsis: &str) -> Self {
        self.help.synopsis = synopsis.to_string();
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.help.description = description.to_string();
        self
    }

    pub fn option(mut self, option: OptionDef) -> Self {
        self.options.push(option);
        self
    }

    pub fn options_from(mut self, options: impl IntoIterator<Item = OptionDef>) -> Self {
        self.options.extend(options);
        self
    }

    pub fn text_encoder(mut self, encoder: TextEncoder) -> Self {
        self.text_encoder = Some(encoder);
        self
    }

    /// Attach `children` in order, failing on the first repeated name.
    pub fn subcommands<I, N, C>(mut self, children: I) -> Result<Self, TreeError>
    where
        I: IntoIterator<Item = (N, C)>,
        N: Into<String>,
        C: Into<Arc<Command>>,
    {
        for (name, node) in children {
            register_subtree(&mut self, name, node)?;
        }
        Ok(self)
    }

    /// Copy of this node with an empty children map
    pub fn header(&self) -> Command {
        Command {
            kind: self.kind,
            help: self.help.clone(),
            options: self.options.clone(),
            children: BTreeMap::new(),
            run: self.run.clone(),
            text_encoder: self.text_encoder,
        }
    }

    pub fn kind(&self) -> CommandKind {
        self.kind
    }

    pub fn help(&self) -> &HelpText {
        &self.help
    }

    pub fn options(&self) -> &[OptionDef] {
        &self.options
    }

    pub fn run(&self) -> Option<&Run> {
        self.run.as_ref()
    }

    pub fn encoder(&self) -> Option<TextEncoder> {
        self.text_encoder
    }

    pub fn is_namespace(&self) -> bool {
        self.run.is_none()
    }

    pub fn child(&self, name: &str) -> Option<&Arc<Command>> {
        self.children.get(name)
    }

    /// Children in name order
    pub fn children(&self) -> impl Iterator<Item = (&str, &Arc<Command>)> {
        self.children.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("kind", &self.kind)
            .field("tagline", &self.help.tagline)
            .field("run", &self.run)
            .field("children", &self.children.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Attach `node` under `parent` as `name`.
///
/// Fails with [`TreeError::DuplicateRegistration`] (path relative to
/// `parent`) if the name is taken.
pub fn register_subtree(
    parent: &mut Command,
    name: impl Into<String>,
    node: impl Into<Arc<Command>>,
) -> Result<(), TreeError> {
    let name = name.into();
    if parent.children.contains_key(&name) {
        return Err(TreeError::DuplicateRegistration { path: name });
    }
    tracing::trace!(command = %name, "registered");
    parent.children.insert(name, node.into());
    Ok(())
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
