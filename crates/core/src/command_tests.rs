// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::option::OptionDef;
use crate::response::{unwrap_as, MessageOutput};
use crate::testing::{env, leaf, modern_leaf, namespace, Echo};

#[test]
fn register_rejects_duplicate_name() {
    let mut parent = namespace("Interact with raw blocks");
    register_subtree(&mut parent, "stat", leaf("Print block info")).unwrap();

    let err = register_subtree(&mut parent, "stat", leaf("Another stat")).unwrap_err();
    assert_eq!(
        err,
        TreeError::DuplicateRegistration {
            path: "stat".to_string()
        }
    );
    // First registration stays in place
    assert_eq!(
        parent.child("stat").unwrap().help().tagline,
        "Print block info"
    );
}

#[test]
fn subcommands_builder_stops_at_duplicate() {
    let result = namespace("Interact with raw blocks").subcommands([
        ("get", leaf("Get a block")),
        ("get", leaf("Get it again")),
    ]);
    assert!(matches!(
        result,
        Err(TreeError::DuplicateRegistration { path }) if path == "get"
    ));
}

#[test]
fn header_copies_everything_but_children() {
    let refs = leaf("List links")
        .synopsis("ipx refs <ref>")
        .option(OptionDef::bool("unique", "Omit duplicates").alias('u'))
        .subcommands([("local", leaf("List all local references"))])
        .unwrap();

    let header = refs.header();
    assert_eq!(header.help(), refs.help());
    assert_eq!(header.options(), refs.options());
    assert!(header.run().unwrap().same_handler(refs.run().unwrap()));
    assert!(!header.has_children());
    assert!(refs.has_children());
}

#[test]
fn kind_follows_handler() {
    assert_eq!(leaf("x").kind(), CommandKind::Legacy);
    assert_eq!(modern_leaf("x").kind(), CommandKind::Modern);
    assert_eq!(
        Command::namespace(CommandKind::Modern, "ns").kind(),
        CommandKind::Modern
    );
    assert!(Command::namespace(CommandKind::Modern, "ns").is_namespace());
}

#[test]
fn same_handler_distinguishes_instances() {
    let a = leaf("a");
    let b = leaf("a");
    let a_run = a.run().unwrap();
    assert!(a_run.same_handler(a.clone().run().unwrap()));
    assert!(!a_run.same_handler(b.run().unwrap()));
}

#[test]
fn children_iterate_in_name_order() {
    let ns = namespace("ns")
        .subcommands([("b", leaf("b")), ("a", leaf("a")), ("c", leaf("c"))])
        .unwrap();
    let names: Vec<&str> = ns.children().map(|(n, _)| n).collect();
    assert_eq!(names, ["a", "b", "c"]);
}

#[tokio::test]
async fn run_calls_legacy_handler_with_request() {
    let cmd = Command::legacy("Echo", Echo);
    let root = namespace("root");
    let options = OptionMap::new();
    let path = vec!["echo".to_string()];
    let arguments = vec!["hello".to_string()];
    let env = env();
    let req = Request {
        path: &path,
        options: &options,
        arguments: &arguments,
        root: &root,
        env: &env,
    };

    let response = cmd.run().unwrap().call(&req).await.unwrap();
    let out: MessageOutput = unwrap_as(response).await.unwrap();
    assert_eq!(out.message, "echo hello");
}
