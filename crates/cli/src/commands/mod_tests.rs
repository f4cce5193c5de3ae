// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::io::Read;
use std::path::PathBuf;

use ipx_core::root::DEFAULT_API_ADDR;
use ipx_core::{CommandTree, CommandTrees, Environment, Mode};

use super::listing::CommandListing;
use super::version::{Detail, VersionOutput};

fn trees() -> CommandTrees {
    CommandTrees::init(registry().unwrap()).unwrap()
}

fn env() -> Environment {
    Environment {
        repo_path: PathBuf::from("/tmp/ipx-test"),
        config_path: PathBuf::from("/tmp/ipx-test/config.toml"),
        api_address: DEFAULT_API_ADDR.to_string(),
        local: false,
    }
}

fn args(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

async fn invoke(tree: &CommandTree, words: &[&str]) -> Result<Response, CommandError> {
    let resolved = tree.resolve(&args(words)).unwrap();
    resolved.invoke(tree.root(), &env()).await
}

/// Run `words` and render the result with the command's text encoder
async fn text(tree: &CommandTree, words: &[&str]) -> String {
    let resolved = tree.resolve(&args(words)).unwrap();
    let response = resolved.invoke(tree.root(), &env()).await.unwrap();
    let encode = resolved.command.encoder().unwrap();
    let mut out = String::new();
    encode(response).await.unwrap().read_to_string(&mut out).unwrap();
    out
}

#[test]
fn registry_builds_both_trees() {
    let trees = trees();
    for name in ["add", "block", "files", "file", "update", "tour", "shutdown"] {
        assert!(trees.full.get(&[name]).is_some(), "{name}");
    }
    assert!(trees.readonly.get(&["add"]).is_none());
    assert!(trees.readonly.get(&["update"]).is_none());
}

#[test]
fn modern_and_legacy_kinds_are_kept() {
    let trees = trees();
    for name in ["add", "block", "cat", "commands", "get", "filestore", "update"] {
        assert_eq!(trees.full.get(&[name]).unwrap().kind(), CommandKind::Modern, "{name}");
    }
    for name in ["ls", "object", "version", "pin", "files"] {
        assert_eq!(trees.full.get(&[name]).unwrap().kind(), CommandKind::Legacy, "{name}");
    }
}

#[test]
fn files_and_file_are_independent() {
    let trees = trees();
    let files = trees.full.get(&["files"]).unwrap();
    let file = trees.full.get(&["file"]).unwrap();
    assert!(files.child("write").is_some());
    assert!(file.child("write").is_none());
    assert_ne!(files.help().tagline, file.help().tagline);
}

#[test]
fn readonly_object_hides_patch() {
    let trees = trees();
    assert!(trees.full.get(&["object", "patch", "add-link"]).is_some());
    assert!(trees.readonly.get(&["object", "patch"]).is_none());
    assert!(trees.readonly.get(&["object", "stat"]).is_some());
}

#[test]
fn namespace_options_apply_to_children() {
    let trees = trees();
    let resolved = trees.full.resolve(&args(&["files", "ls"])).unwrap();
    assert!(resolved.options.flag("flush"));

    let resolved = trees.full.resolve(&args(&["files", "--flush=false", "ls"])).unwrap();
    assert!(!resolved.options.flag("flush"));
}

#[tokio::test]
async fn stand_in_commands_are_unavailable() {
    let trees = trees();
    let err = invoke(&trees.full, &["add", "file.txt"]).await.unwrap_err();
    assert!(matches!(
        err,
        CommandError::Unavailable { ref command, ref subsystem }
            if command == "ipx add" && subsystem == "unixfs"
    ));

    let err = invoke(&trees.full, &["object", "patch", "add-link"]).await.unwrap_err();
    assert!(matches!(
        err,
        CommandError::Unavailable { ref command, .. } if command == "ipx object patch add-link"
    ));
}

#[tokio::test]
async fn version_reports_package_version() {
    let trees = trees();
    let response = invoke(&trees.full, &["version"]).await.unwrap();
    let out: VersionOutput = ipx_core::unwrap_as(response).await.unwrap();
    assert_eq!(out.version, env!("CARGO_PKG_VERSION"));
    assert_eq!(out.repo, "/tmp/ipx-test");
    assert_eq!(out.detail, Detail::Name);
}

#[tokio::test]
async fn version_text_forms() {
    let trees = trees();
    let version = env!("CARGO_PKG_VERSION");

    similar_asserts::assert_eq!(
        text(&trees.full, &["version"]).await,
        format!("ipx version {version}\n")
    );
    similar_asserts::assert_eq!(
        text(&trees.full, &["version", "-n"]).await,
        format!("{version}\n")
    );

    let all = text(&trees.full, &["version", "--all"]).await;
    assert!(all.contains("Repo path: /tmp/ipx-test"));
    assert!(all.contains("System: "));
}

#[tokio::test]
async fn version_is_served_by_readonly_tree() {
    let trees = trees();
    let version = env!("CARGO_PKG_VERSION");
    assert_eq!(
        text(trees.select(Mode::ReadOnly), &["version"]).await,
        format!("ipx version {version}\n")
    );
}

#[tokio::test]
async fn commands_lists_the_tree_it_ran_in() {
    let trees = trees();

    let response = invoke(&trees.full, &["commands"]).await.unwrap();
    let full: CommandListing = ipx_core::unwrap_as(response).await.unwrap();
    assert_eq!(full.commands[0], "ipx");
    assert!(full.commands.contains(&"ipx pin add".to_string()));
    assert!(full.commands.contains(&"ipx object patch add-link".to_string()));

    let response = invoke(&trees.readonly, &["commands"]).await.unwrap();
    let ro: CommandListing = ipx_core::unwrap_as(response).await.unwrap();
    assert!(ro.commands.contains(&"ipx object stat".to_string()));
    assert!(!ro.commands.contains(&"ipx pin add".to_string()));
    assert!(!ro.commands.contains(&"ipx refs local".to_string()));
    assert_eq!(ro.commands.len(), trees.readonly.paths().len() + 1);
}

#[tokio::test]
async fn commands_with_flags_lists_options() {
    let trees = trees();
    let listing = text(&trees.full, &["commands", "--flags"]).await;
    assert!(listing.contains("ipx --debug / -D\n"));
    assert!(listing.contains("ipx -h\n"));
    assert!(listing.contains("ipx add --recursive / -r\n"));
}

#[tokio::test]
async fn tour_prints_introduction() {
    let trees = trees();
    let intro = text(&trees.full, &["tour"]).await;
    assert!(intro.starts_with("Hello Mars"));
    assert!(intro.contains("ipx commands"));
}

#[tokio::test]
async fn tour_rejects_unknown_topic() {
    let trees = trees();
    let err = invoke(&trees.full, &["tour", "99"]).await.unwrap_err();
    assert!(err.to_string().contains("no tour topic '99'"));
}

#[tokio::test]
async fn update_without_binary_fails() {
    let handler = update::ExternalBinary::new("ipx-update-does-not-exist");
    let trees = trees();
    let options = ipx_core::OptionMap::new();
    let req = Request {
        path: &args(&["update"]),
        options: &options,
        arguments: &[],
        root: trees.full.root(),
        env: &env(),
    };
    let err = Handler::run(&handler, &req).await.unwrap_err();
    assert!(err.to_string().contains("is not installed"));
}
