// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Root command assembly

use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use crate::command::{register_subtree, Command, CommandKind, HelpText};
use crate::error::TreeError;
use crate::option::OptionDef;

/// Program name, used as the first word of every command path
pub const PROGRAM: &str = "ipx";

/// Environment variable overriding the repository location
pub const REPO_ENV: &str = "IPX_PATH";

/// API endpoint used when neither `--api` nor the config file names one
pub const DEFAULT_API_ADDR: &str = "/ip4/127.0.0.1/tcp/5001";

pub const CONFIG_OPTION: &str = "config";
pub const DEBUG_OPTION: &str = "debug";
pub const HELP_OPTION: &str = "help";
pub const SHORT_HELP_OPTION: &str = "h";
pub const LOCAL_OPTION: &str = "local";
pub const API_OPTION: &str = "api";

const ROOT_TAGLINE: &str = "Global p2p merkle-dag filesystem.";

const ROOT_SUBCOMMANDS: &str = "
BASIC COMMANDS
  init          Initialize ipx local configuration
  add <path>    Add a file to ipx
  cat <ref>     Show ipx object data
  get <ref>     Download ipx objects
  ls <ref>      List links from an object
  refs <ref>    List hashes of links from an object

DATA STRUCTURE COMMANDS
  block         Interact with raw blocks in the datastore
  object        Interact with raw dag nodes
  files         Interact with objects as if they were a unix filesystem
  dag           Interact with IPLD documents (experimental)

ADVANCED COMMANDS
  daemon        Start a long-running daemon process
  mount         Mount an ipx read-only mountpoint
  resolve       Resolve any type of name
  name          Publish and resolve IPNS names
  key           Create and list IPNS name keypairs
  dns           Resolve DNS links
  pin           Pin objects to local storage
  repo          Manipulate the ipx repository
  stats         Various operational stats
  ptp           Libp2p stream mounting
  filestore     Manage the filestore (experimental)

NETWORK COMMANDS
  id            Show info about ipx peers
  bootstrap     Add or remove bootstrap peers
  swarm         Manage connections to the p2p network
  dht           Query the DHT for values or peers
  ping          Measure the latency of a connection
  diag          Print diagnostics

TOOL COMMANDS
  config        Manage configuration
  version       Show ipx version information
  update        Download and apply ipx updates
  commands      List all available commands

Use 'ipx <command> --help' to learn more about each command.

ipx uses a repository in the local file system. By default, the repo is located
at ~/.ipx. To change the repo location, set the $IPX_PATH environment variable:

  export IPX_PATH=/path/to/ipxrepo

EXIT STATUS

The CLI will exit with one of the following values:

0     Successful execution.
1     Failed executions.
";

/// The process-wide options accepted before any command name
pub fn global_options() -> Vec<OptionDef> {
    vec![
        OptionDef::string(CONFIG_OPTION, "Path to the configuration file to use.").alias('c'),
        OptionDef::bool(DEBUG_OPTION, "Operate in debug mode.")
            .alias('D')
            .default(false),
        OptionDef::bool(HELP_OPTION, "Show the full command help text.").default(false),
        OptionDef::bool(SHORT_HELP_OPTION, "Show a short version of the command help text.")
            .default(false),
        OptionDef::bool(
            LOCAL_OPTION,
            "Run the command locally, instead of using the daemon.",
        )
        .alias('L')
        .default(false),
        OptionDef::string(
            API_OPTION,
            "Use a specific API instance (defaults to /ip4/127.0.0.1/tcp/5001)",
        )
        .default(DEFAULT_API_ADDR),
    ]
}

/// Usage line listing `options` the way the root synopsis shows them,
/// e.g. `[--debug=<debug> | -D]`.
pub fn synopsis_for(program: &str, options: &[OptionDef]) -> String {
    let mut parts = vec![program.to_string()];
    for opt in options {
        let single = opt.name.chars().count() == 1;
        let mut part = if single {
            format!("[-{0}=<{0}>", opt.name)
        } else {
            format!("[--{0}=<{0}>", opt.name)
        };
        if let Some(alias) = opt.alias {
            part.push_str(&format!(" | -{alias}"));
        }
        part.push(']');
        parts.push(part);
    }
    parts.push("<command> ...".to_string());
    parts.join(" ")
}

/// Help text of the root command
pub fn root_help() -> HelpText {
    HelpText {
        tagline: ROOT_TAGLINE.to_string(),
        synopsis: synopsis_for(PROGRAM, &global_options()),
        subcommands: ROOT_SUBCOMMANDS.to_string(),
        description: String::new(),
    }
}

/// Create the root node: a modern namespace carrying the global options.
pub fn define_root(help: HelpText, options: Vec<OptionDef>) -> Command {
    Command::namespace(CommandKind::Modern, &help.tagline)
        .with_help(help)
        .options_from(options)
}

/// Collaborator registrations, split by command kind
#[derive(Default)]
pub struct Registry {
    modern: Vec<(String, Command)>,
    legacy: Vec<(String, Command)>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn modern(mut self, name: &str, command: Command) -> Self {
        self.modern.push((name.to_string(), command));
        self
    }

    pub fn legacy(mut self, name: &str, command: Command) -> Self {
        self.legacy.push((name.to_string(), command));
        self
    }

    pub fn len(&self) -> usize {
        self.modern.len() + self.legacy.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Assembles the full command tree.
///
/// Both kinds of registration share one children map, so a name claimed by
/// a modern command cannot be reclaimed by a legacy one.
pub struct RootBuilder {
    root: Command,
}

impl RootBuilder {
    pub fn new(help: HelpText, options: Vec<OptionDef>) -> Self {
        Self {
            root: define_root(help, options),
        }
    }

    /// Root with the standard help text and global options
    pub fn standard() -> Self {
        Self::new(root_help(), global_options())
    }

    fn register(
        &mut self,
        expected: CommandKind,
        name: &str,
        node: Command,
    ) -> Result<(), TreeError> {
        if node.kind() != expected {
            return Err(TreeError::KindMismatch {
                path: format!("{PROGRAM} {name}"),
                expected,
                actual: node.kind(),
            });
        }
        register_subtree(&mut self.root, name, Arc::new(node)).map_err(|e| e.under(PROGRAM))
    }

    pub fn modern(
        mut self,
        commands: impl IntoIterator<Item = (String, Command)>,
    ) -> Result<Self, TreeError> {
        for (name, node) in commands {
            self.register(CommandKind::Modern, &name, node)?;
        }
        Ok(self)
    }

    pub fn legacy(
        mut self,
        commands: impl IntoIterator<Item = (String, Command)>,
    ) -> Result<Self, TreeError> {
        for (name, node) in commands {
            self.register(CommandKind::Legacy, &name, node)?;
        }
        Ok(self)
    }

    /// Register everything in `registry`, modern commands first.
    pub fn registry(self, registry: Registry) -> Result<Self, TreeError> {
        self.modern(registry.modern)?.legacy(registry.legacy)
    }

    /// Validate the assembled tree and hand it out.
    pub fn finish(self) -> Result<Command, TreeError> {
        finalize_help(&self.root)?;
        debug!(
            commands = self.root.children().count(),
            "assembled full command tree"
        );
        Ok(self.root)
    }
}

/// Check every reachable node has a tagline and a consistent option set.
pub fn finalize_help(root: &Command) -> Result<(), TreeError> {
    check_node(root).map_err(|e| e.under(PROGRAM))
}

fn check_node(node: &Command) -> Result<(), TreeError> {
    if node.help().tagline.trim().is_empty() {
        return Err(TreeError::MissingHelpMetadata {
            path: String::new(),
        });
    }
    check_options(node)?;
    for (name, child) in node.children() {
        check_node(child).map_err(|e| e.under(name))?;
    }
    Ok(())
}

fn check_options(node: &Command) -> Result<(), TreeError> {
    let mut names = HashSet::new();
    let mut aliases = HashSet::new();
    for opt in node.options() {
        if !names.insert(opt.name.as_str()) {
            return Err(TreeError::DuplicateOption {
                path: String::new(),
                name: opt.name.clone(),
            });
        }
        for alias in short_names(opt) {
            if !aliases.insert(alias) {
                return Err(TreeError::DuplicateAlias {
                    path: String::new(),
                    alias,
                });
            }
        }
        let default_ok = match &opt.default {
            Some(value) => value.kind() == opt.kind,
            None => true,
        };
        if !default_ok {
            return Err(TreeError::DefaultTypeMismatch {
                path: String::new(),
                name: opt.name.clone(),
            });
        }
    }
    Ok(())
}

/// Characters that select `opt` as `-c`: its alias and a one-character name.
fn short_names(opt: &OptionDef) -> impl Iterator<Item = char> {
    let alias = opt.alias;
    let mut chars = opt.name.chars();
    let single = match (chars.next(), chars.next()) {
        (Some(c), None) if alias != Some(c) => Some(c),
        _ => None,
    };
    alias.into_iter().chain(single)
}

#[cfg(test)]
#[path = "root_tests.rs"]
mod tests;
