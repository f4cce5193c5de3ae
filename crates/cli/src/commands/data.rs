// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Data structure commands: blocks, objects, dags, mfs, filestore

use ipx_core::{Command, CommandKind, OptionDef, TreeError};

use super::{group, legacy, modern};

const BLOCKSTORE: &str = "blockstore";
const DAG: &str = "dag";
const MFS: &str = "mfs";
const FILESTORE: &str = "filestore";

/// Default `--format` of `ipx files stat`
const STAT_FORMAT: &str =
    "<hash>\nSize: <size>\nCumulativeSize: <cumulsize>\nChildBlocks: <childs>\nType: <type>";

pub fn block() -> Result<Command, TreeError> {
    Command::namespace(CommandKind::Modern, "Interact with raw blocks in the datastore.")
        .description(
            "'ipx block' is a plumbing command used to manipulate raw ipx blocks. \
Reads from stdin or writes to stdout, and <key> is a base58 encoded multihash.",
        )
        .subcommands([
            (
                "stat",
                modern("Print information of a raw block.", BLOCKSTORE)
                    .synopsis("ipx block stat <key>"),
            ),
            (
                "get",
                modern("Get a raw block.", BLOCKSTORE).synopsis("ipx block get <key>"),
            ),
            (
                "put",
                modern("Store input as a block.", BLOCKSTORE)
                    .synopsis("ipx block put [--format=<format> | -f] <data>")
                    .option(
                        OptionDef::string("format", "CID format for blocks to be created with.")
                            .alias('f')
                            .default("v0"),
                    )
                    .option(
                        OptionDef::string("mhtype", "Multihash hash function.").default("sha2-256"),
                    )
                    .option(OptionDef::string("mhlen", "Multihash hash length.")),
            ),
            (
                "rm",
                modern("Remove blocks from the local datastore.", BLOCKSTORE)
                    .synopsis("ipx block rm [--force | -f] [--quiet | -q] <hash>...")
                    .option(
                        OptionDef::bool("force", "Ignore nonexistent blocks.")
                            .alias('f')
                            .default(false),
                    )
                    .option(
                        OptionDef::bool("quiet", "Write minimal output.").alias('q').default(false),
                    ),
            ),
        ])
}

pub fn object() -> Result<Command, TreeError> {
    let patch = group("Create a new merkledag object based on an existing one.").subcommands([
        (
            "add-link",
            legacy("Add a link to a given object.", DAG).option(
                OptionDef::bool("create", "Create intermediary nodes.").alias('p').default(false),
            ),
        ),
        ("rm-link", legacy("Remove a link from an object.", DAG)),
        ("append-data", legacy("Append data to the data segment of a dag node.", DAG)),
        ("set-data", legacy("Set the data field of an ipx object.", DAG)),
    ])?;

    group("Interact with ipx objects.")
        .description(
            "'ipx object' is a plumbing command used to manipulate DAG objects directly.",
        )
        .subcommands([
            (
                "data",
                legacy("Output the raw bytes of an ipx object.", DAG),
            ),
            (
                "links",
                legacy("Output the links pointed to by the specified object.", DAG).option(
                    OptionDef::bool("headers", "Print table headers (Hash, Size, Name).")
                        .alias('v')
                        .default(false),
                ),
            ),
            ("get", legacy("Get and serialize the DAG node named by <key>.", DAG)),
            ("stat", legacy("Get stats for the DAG node named by <key>.", DAG)),
            ("new", legacy("Create a new object from an ipx template.", DAG)),
            (
                "put",
                legacy("Store input as a DAG object, print its key.", DAG)
                    .option(
                        OptionDef::string(
                            "inputenc",
                            "Encoding type of input data. One of: {\"protobuf\", \"json\"}.",
                        )
                        .default("json"),
                    )
                    .option(
                        OptionDef::string(
                            "datafieldenc",
                            "Encoding type of the data field, either \"text\" or \"base64\".",
                        )
                        .default("text"),
                    )
                    .option(OptionDef::bool("pin", "Pin this object when adding.").default(false)),
            ),
            (
                "diff",
                legacy("Display the diff between two ipx objects.", DAG).option(
                    OptionDef::bool("verbose", "Print extra information.").alias('v'),
                ),
            ),
            ("patch", patch),
        ])
}

pub fn dag() -> Result<Command, TreeError> {
    group("Interact with ipld dag objects.")
        .description(
            "'ipx dag' is used for creating and manipulating dag objects.

This subcommand is currently an experimental feature, but it is intended \
to deprecate and replace the existing 'ipx object' command moving forward.",
        )
        .subcommands([
            (
                "put",
                legacy("Add a dag node to ipx.", DAG)
                    .option(
                        OptionDef::string("format", "Format that the object will be added as.")
                            .alias('f')
                            .default("cbor"),
                    )
                    .option(
                        OptionDef::string("input-enc", "Format that the input object will be.")
                            .default("json"),
                    )
                    .option(OptionDef::bool("pin", "Pin this object when adding.").default(false)),
            ),
            ("get", legacy("Get a dag node from ipx.", DAG)),
            ("resolve", legacy("Resolve ipld block.", DAG)),
        ])
}

/// Mutable filesystem, with a `--flush` option shared by every subcommand
pub fn files() -> Result<Command, TreeError> {
    group("Interact with unixfs files.")
        .description(
            "Files is an API for manipulating ipx objects as if they were a unix \
filesystem.

NOTE: Most of the subcommands of 'ipx files' accept the '--flush' flag. It \
defaults to true.",
        )
        .option(
            OptionDef::bool("flush", "Flush target and ancestors after write.")
                .alias('f')
                .default(true),
        )
        .subcommands([
            (
                "read",
                legacy("Read a file in a given mfs.", MFS)
                    .option(
                        OptionDef::string("offset", "Byte offset to begin reading from.")
                            .alias('o'),
                    )
                    .option(
                        OptionDef::string("count", "Maximum number of bytes to read.").alias('n'),
                    ),
            ),
            (
                "write",
                legacy("Write to a mutable file in a given filesystem.", MFS)
                    .option(
                        OptionDef::string("offset", "Byte offset to begin writing at.").alias('o'),
                    )
                    .option(
                        OptionDef::bool("create", "Create the file if it does not exist.")
                            .alias('e'),
                    )
                    .option(
                        OptionDef::bool(
                            "truncate",
                            "Truncate the file to size zero before writing.",
                        )
                        .alias('t'),
                    )
                    .option(
                        OptionDef::string("count", "Maximum number of bytes to read.").alias('n'),
                    ),
            ),
            ("mv", legacy("Move files.", MFS)),
            ("cp", legacy("Copy files into mfs.", MFS)),
            (
                "ls",
                legacy("List directories in the local mutable namespace.", MFS)
                    .option(OptionDef::bool("l", "Use long listing format.")),
            ),
            (
                "mkdir",
                legacy("Make directories.", MFS)
                    .option(
                        OptionDef::bool(
                            "parents",
                            "No error if existing, make parent directories as needed.",
                        )
                        .alias('p'),
                    ),
            ),
            (
                "stat",
                legacy("Display file status.", MFS)
                    .option(
                        OptionDef::string("format", "Print statistics in given format.")
                            .default(STAT_FORMAT),
                    )
                    .option(OptionDef::bool("hash", "Print only hash. Implies '--format=<hash>'."))
                    .option(
                        OptionDef::bool("size", "Print only size. Implies '--format=<cumulsize>'."),
                    ),
            ),
            (
                "rm",
                legacy("Remove a file.", MFS)
                    .option(
                        OptionDef::bool("recursive", "Recursively remove directories.").alias('r'),
                    ),
            ),
            ("flush", legacy("Flush a given path's data to disk.", MFS)),
        ])
}

pub fn filestore() -> Result<Command, TreeError> {
    Command::namespace(CommandKind::Modern, "Interact with filestore objects.").subcommands([
        ("ls", modern("List objects in filestore.", FILESTORE)),
        ("verify", modern("Verify objects in filestore.", FILESTORE)),
        (
            "dups",
            modern(
                "List blocks that are both in the filestore and standard block storage.",
                FILESTORE,
            ),
        ),
    ])
}
