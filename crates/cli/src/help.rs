// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Help rendering for command tree nodes

use clap::{Arg, ArgAction};
use ipx_core::root::PROGRAM;
use ipx_core::{Command, OptionDef, OptionType, OptionValue};

/// Which help text was asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpLevel {
    /// `-h`: tagline, usage, options, listing
    Short,
    /// `--help`: everything, including the long description
    Long,
}

/// Render help for `node`, reached through `path` (names below the root).
pub fn render(path: &[String], node: &Command, level: HelpLevel) -> String {
    let mut cmd = to_clap(path, node);
    let text = match level {
        HelpLevel::Short => cmd.render_help(),
        HelpLevel::Long => cmd.render_long_help(),
    };
    text.to_string()
}

fn display_name(path: &[String]) -> String {
    std::iter::once(PROGRAM)
        .chain(path.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}

fn to_clap(path: &[String], node: &Command) -> clap::Command {
    let name = display_name(path);
    let help = node.help();

    let mut cmd = clap::Command::new(name.clone())
        .bin_name(name)
        .about(help.tagline.clone())
        .disable_help_flag(true)
        .disable_help_subcommand(true)
        .disable_version_flag(true)
        .term_width(0);

    if !help.synopsis.is_empty() {
        cmd = cmd.override_usage(help.synopsis.clone());
    }
    if !help.description.is_empty() {
        cmd = cmd.long_about(format!("{}\n\n{}", help.tagline, help.description));
    }

    for opt in node.options() {
        cmd = cmd.arg(to_arg(opt));
    }

    if !help.subcommands.is_empty() {
        cmd = cmd.after_help(help.subcommands.trim_end().to_string());
    } else {
        for (child_name, child) in node.children() {
            cmd = cmd.subcommand(
                clap::Command::new(child_name.to_string()).about(child.help().tagline.clone()),
            );
        }
    }
    cmd
}

fn to_arg(opt: &OptionDef) -> Arg {
    let mut arg = Arg::new(opt.name.clone());
    let mut short = opt.alias;
    let mut chars = opt.name.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => short = Some(c),
        _ => arg = arg.long(opt.name.clone()),
    }
    if let Some(c) = short {
        arg = arg.short(c);
    }

    let mut description = opt.description.clone();
    match opt.kind {
        OptionType::Bool => {
            arg = arg.action(ArgAction::SetTrue);
            if let Some(OptionValue::Bool(true)) = opt.default {
                description.push_str(" Default: true.");
            }
        }
        OptionType::String => {
            arg = arg.action(ArgAction::Set).value_name(opt.name.clone());
            if let Some(OptionValue::String(default)) = &opt.default {
                arg = arg.default_value(default.clone());
            }
        }
    }
    arg.help(description)
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
