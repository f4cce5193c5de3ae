// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Adding, reading and listing file content

use ipx_core::{Command, OptionDef, TreeError};

use super::{group, legacy, modern};

const UNIXFS: &str = "unixfs";

pub fn add() -> Command {
    modern("Add a file or directory to ipx.", UNIXFS)
        .synopsis("ipx add [--recursive | -r] [--quiet | -q] [--pin=false] <path>...")
        .description(
            "Adds contents of <path> to ipx. Use -r to add directories. Note that \
directories are added recursively, to form the ipx MerkleDAG.

The wrap option, '-w', wraps the file (or files, if using the recursive option) \
in a directory. This directory contains only the files which have been added, and \
means that the file retains its filename.",
        )
        .option(
            OptionDef::bool("recursive", "Add directory paths recursively.")
                .alias('r')
                .default(false),
        )
        .option(OptionDef::bool("quiet", "Write minimal output.").alias('q'))
        .option(OptionDef::bool("silent", "Write no output."))
        .option(OptionDef::bool("progress", "Stream progress data.").alias('p'))
        .option(OptionDef::bool("trickle", "Use trickle-dag format for dag generation.").alias('t'))
        .option(
            OptionDef::bool("only-hash", "Only chunk and hash - do not write to disk.").alias('n'),
        )
        .option(
            OptionDef::bool("wrap-with-directory", "Wrap files with a directory object.")
                .alias('w'),
        )
        .option(OptionDef::bool("hidden", "Include files that are hidden.").alias('H'))
        .option(OptionDef::string("chunker", "Chunking algorithm to use.").alias('s'))
        .option(OptionDef::bool("pin", "Pin this object when adding.").default(true))
        .option(OptionDef::bool("raw-leaves", "Use raw blocks for leaf nodes."))
}

pub fn cat() -> Command {
    modern("Show ipx object data.", UNIXFS)
        .synopsis("ipx cat <ipx-path>...")
        .description("Displays the data contained by an ipx or ipns object(s) at the given path.")
        .option(OptionDef::string("offset", "Byte offset to begin reading from.").alias('o'))
        .option(OptionDef::string("length", "Maximum number of bytes to read.").alias('l'))
}

pub fn get() -> Command {
    modern("Download ipx objects.", UNIXFS)
        .synopsis("ipx get [--output=<output> | -o] [--archive | -a] <ipx-path>")
        .description(
            "Stores to disk the data contained an ipx or ipns object(s) at the given path.

By default, the output will be stored at './<ipx-path>', but an alternate path \
can be specified with '--output=<path>' or '-o=<path>'.",
        )
        .option(
            OptionDef::string("output", "The path where the output should be stored.").alias('o'),
        )
        .option(OptionDef::bool("archive", "Output a TAR archive.").alias('a').default(false))
        .option(
            OptionDef::bool("compress", "Compress the output with GZIP compression.")
                .alias('C')
                .default(false),
        )
        .option(
            OptionDef::string("compression-level", "The level of compression (1-9).").alias('l'),
        )
}

pub fn ls() -> Command {
    legacy("List directory contents for Unix filesystem objects.", UNIXFS)
        .synopsis("ipx ls [--headers | -v] <ipx-path>...")
        .option(
            OptionDef::bool("headers", "Print table headers (Hash, Size, Name).")
                .alias('v')
                .default(false),
        )
        .option(
            OptionDef::bool("resolve-type", "Resolve linked objects to find out their types.")
                .default(true),
        )
}

/// `refs`, with `refs local` below it
pub fn refs() -> Result<Command, TreeError> {
    legacy("List links (references) from an object.", "dag")
        .synopsis("ipx refs [--recursive | -r] [--unique | -u] <ipx-path>...")
        .description(
            "Lists the hashes of all the links an ipx or ipns object(s) contains, with \
the following format:

  <link base58 hash>

NOTE: List all references recursively by using the flag '-r'.",
        )
        .option(OptionDef::string("format", "Emit edges with given format.").default("<dst>"))
        .option(
            OptionDef::bool("edges", "Emit edge format: `<from> -> <to>`.")
                .alias('e')
                .default(false),
        )
        .option(
            OptionDef::bool("unique", "Omit duplicate refs from output.").alias('u').default(false),
        )
        .option(
            OptionDef::bool("recursive", "Recursively list links of child nodes.")
                .alias('r')
                .default(false),
        )
        .subcommands([(
            "local",
            legacy("List all local references.", "blockstore"),
        )])
}

pub fn tar() -> Result<Command, TreeError> {
    group("Utility functions for tar files in ipx.").subcommands([
        ("add", legacy("Import a tar file into ipx.", "tar")),
        ("cat", legacy("Export a tar file from ipx.", "tar")),
    ])
}

/// UnixFS object inspection
pub fn file() -> Result<Command, TreeError> {
    group("Interact with ipx objects representing Unix filesystems.")
        .description(
            "'ipx file' provides a familiar interface to file systems represented by \
ipx objects, which hides ipx implementation details like layout objects.",
        )
        .subcommands([(
            "ls",
            legacy("List directory contents for Unix filesystem objects.", UNIXFS),
        )])
}
