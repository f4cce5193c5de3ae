// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-facing error display with context and suggestions.
//!
//! An [`IpxError`] carries:
//! - What went wrong (message)
//! - Why it might have happened (context)
//! - How to fix it (suggestions)

use std::fmt;

use ipx_core::root::PROGRAM;
use ipx_core::{CommandError, ResolveError, TreeError};

use crate::config::ConfigError;

/// Error with context and recovery suggestions for user-friendly display.
#[derive(Debug)]
pub struct IpxError {
    /// What went wrong
    pub message: String,
    /// Why it might have happened
    pub context: Vec<String>,
    /// How to fix it
    pub suggestions: Vec<String>,
    /// Original error if any
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl IpxError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
            source: None,
        }
    }

    /// Add context about why this error might have happened.
    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    /// Add a suggestion for how to fix this error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn with_source<E: std::error::Error + Send + Sync + 'static>(mut self, source: E) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for IpxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            for ctx in &self.context {
                writeln!(f, "  -> {}", ctx)?;
            }
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "suggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for IpxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Builders for the failure classes the entry point reports.
impl IpxError {
    /// A name under a namespace that matches no subcommand.
    pub fn unknown_command(parent: &str, name: &str) -> Self {
        IpxError::new(format!("Unknown command '{}'", name))
            .with_context(format!("'{}' has no subcommand named '{}'", parent, name))
            .with_suggestion(format!("List its subcommands: {} --help", parent))
            .with_suggestion(format!("List every command: {} commands", PROGRAM))
    }

    /// The command line could not be resolved against the tree.
    pub fn invalid_arguments(err: ResolveError) -> Self {
        IpxError::new(err.to_string())
            .with_suggestion(format!("See usage: {} --help", PROGRAM))
            .with_source(err)
    }

    /// A command whose subsystem is not part of this build.
    pub fn unavailable(command: &str, subsystem: &str) -> Self {
        IpxError::new(format!("'{}' is not available", command))
            .with_context(format!(
                "It is served by the {} subsystem, which this build does not include",
                subsystem
            ))
            .with_suggestion(format!("Show its usage: {} --help", command))
            .with_suggestion(format!("List every command: {} commands", PROGRAM))
    }

    /// The command trees could not be assembled.
    pub fn startup(err: TreeError) -> Self {
        IpxError::new("Failed to assemble the command tree")
            .with_context(err.to_string())
            .with_context(format!("Offending command: {}", err.path()))
            .with_suggestion("This is a bug in ipx; please report it")
            .with_source(err)
    }

    pub fn config(err: ConfigError) -> Self {
        let mut out = IpxError::new(err.to_string());
        if let ConfigError::NotFound(path) = &err {
            out = out
                .with_context(format!("--config named {}", path.display()))
                .with_suggestion("Check the path, or omit --config to use the repository default");
        }
        out.with_source(err)
    }

    /// Failure of the invoked command itself.
    pub fn command(err: CommandError) -> Self {
        match err {
            CommandError::Unavailable { command, subsystem } => {
                IpxError::unavailable(&command, &subsystem)
            }
            other => IpxError::new(other.to_string()).with_source(other),
        }
    }
}
