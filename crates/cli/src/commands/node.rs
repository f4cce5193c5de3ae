// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Local node administration

use ipx_core::{Command, OptionDef, TreeError};

use super::{group, legacy};

pub fn config() -> Result<Command, TreeError> {
    legacy("Get and set ipx config values.", "config")
        .synopsis("ipx config [--bool] [--json] <key> [<value>]")
        .description(
            "'ipx config' controls configuration variables. It works like 'git config'. \
The configuration values are stored in a config file inside your ipx repository.",
        )
        .option(OptionDef::bool("bool", "Set a boolean value.").default(false))
        .option(OptionDef::bool("json", "Parse stringified JSON.").default(false))
        .subcommands([
            ("show", legacy("Output config file contents.", "config")),
            ("edit", legacy("Open the config file for editing in $EDITOR.", "config")),
            ("replace", legacy("Replace the config with <file>.", "config")),
        ])
}

pub fn diag() -> Result<Command, TreeError> {
    group("Generate diagnostic reports.").subcommands([
        ("sys", legacy("Print system diagnostic information.", "diag")),
        (
            "cmds",
            legacy("List commands run on this ipx node.", "diag")
                .option(
                    OptionDef::bool("verbose", "Print extra information.")
                        .alias('v')
                        .default(false),
                ),
        ),
    ])
}

pub fn log() -> Result<Command, TreeError> {
    group("Interact with the daemon log output.")
        .description(
            "'ipx log' contains utility commands to affect or read the logging output \
of a running daemon.",
        )
        .subcommands([
            ("level", legacy("Change the logging level.", "log")),
            ("ls", legacy("List the logging subsystems.", "log")),
            ("tail", legacy("Read the event log.", "log")),
        ])
}

pub fn mount() -> Command {
    legacy("Mounts ipx to the filesystem (read-only).", "fuse")
        .synopsis("ipx mount [--ipx-path=<ipx-path> | -f] [--ipns-path=<ipns-path> | -n]")
        .description(
            "Mount ipx at a read-only mountpoint on the OS. All ipx objects will be \
accessible under that directory. Note that the root will not be listable, as it \
is virtual. Access known paths directly.",
        )
        .option(OptionDef::string("ipx-path", "The path where ipx should be mounted.").alias('f'))
        .option(OptionDef::string("ipns-path", "The path where IPNS should be mounted.").alias('n'))
}

pub fn pin() -> Result<Command, TreeError> {
    group("Pin (and unpin) objects to local storage.").subcommands([
        (
            "add",
            legacy("Pin objects to local storage.", "pinner")
                .option(
                    OptionDef::bool(
                        "recursive",
                        "Recursively pin the object linked to by the specified object(s).",
                    )
                    .alias('r')
                    .default(true),
                )
                .option(OptionDef::bool("progress", "Show progress.")),
        ),
        (
            "rm",
            legacy("Remove pinned objects from local storage.", "pinner")
                .option(
                    OptionDef::bool(
                        "recursive",
                        "Recursively unpin the object linked to by the specified object(s).",
                    )
                    .alias('r')
                    .default(true),
                ),
        ),
        (
            "ls",
            legacy("List objects pinned to local storage.", "pinner")
                .option(
                    OptionDef::string(
                        "type",
                        "The type of pinned keys to list. Can be \"direct\", \"indirect\", \"recursive\", or \"all\".",
                    )
                    .alias('t')
                    .default("all"),
                )
                .option(
                    OptionDef::bool("quiet", "Write just hashes of objects.")
                        .alias('q')
                        .default(false),
                ),
        ),
        (
            "verify",
            legacy("Verify that recursive pins are complete.", "pinner")
                .option(OptionDef::bool("verbose", "Also write the hashes of non-broken pins."))
                .option(OptionDef::bool("quiet", "Write just hashes of broken pins.").alias('q')),
        ),
    ])
}

pub fn repo() -> Result<Command, TreeError> {
    group("Manipulate the ipx repo.")
        .description("'ipx repo' is a plumbing command used to manipulate the repo.")
        .subcommands([
            (
                "gc",
                legacy("Perform a garbage collection sweep on the repo.", "repo")
                    .option(OptionDef::bool("stream-errors", "Stream errors.").default(false))
                    .option(
                        OptionDef::bool("quiet", "Write minimal output.").alias('q').default(false),
                    ),
            ),
            (
                "stat",
                legacy("Get stats for the currently used repo.", "repo")
                    .option(OptionDef::bool("human", "Output RepoSize in MiB.").default(false)),
            ),
            ("fsck", legacy("Remove repo lockfiles.", "repo")),
            (
                "version",
                legacy("Show the repo version.", "repo")
                    .option(OptionDef::bool("quiet", "Write minimal output.").alias('q')),
            ),
            ("verify", legacy("Verify all blocks in repo are not corrupted.", "repo")),
        ])
}

pub fn stats() -> Result<Command, TreeError> {
    group("Query ipx statistics.")
        .description(
            "'ipx stats' is a set of commands to help look at statistics for your \
ipx node.",
        )
        .subcommands([
            (
                "bw",
                legacy("Print ipx bandwidth information.", "stats")
                    .option(
                        OptionDef::string("peer", "Specify a peer to print bandwidth for.")
                            .alias('p'),
                    )
                    .option(
                        OptionDef::string("proto", "Specify a protocol to print bandwidth for.")
                            .alias('t'),
                    )
                    .option(
                        OptionDef::bool("poll", "Print bandwidth at an interval.").default(false),
                    )
                    .option(
                        OptionDef::string(
                            "interval",
                            "Time interval to wait between updating output, if 'poll' is true.",
                        )
                        .alias('i')
                        .default("1s"),
                    ),
            ),
            ("repo", legacy("Get stats for the currently used repo.", "stats")),
            ("bitswap", legacy("Show some diagnostic information on the bitswap agent.", "stats")),
        ])
}

pub fn shutdown() -> Command {
    legacy("Shut down the ipx daemon.", "daemon")
}

pub fn daemon() -> Command {
    legacy("Run a network-connected ipx node.", "daemon")
        .synopsis("ipx daemon [--init] [--routing=<routing>] [--mount] [--writable]")
        .description(
            "'ipx daemon' runs a persistent ipx daemon that can serve commands over \
the network. Most applications that use ipx will do so by communicating with a \
daemon over the HTTP API. While the daemon is running, calls to 'ipx' commands \
will be sent over the network to the daemon.",
        )
        .option(
            OptionDef::bool(
                "init",
                "Initialize ipx with default settings if not already initialized.",
            )
            .default(false),
        )
        .option(OptionDef::string("routing", "Overrides the routing option.").default("dht"))
        .option(OptionDef::bool("mount", "Mounts ipx to the filesystem.").default(false))
        .option(
            OptionDef::bool("writable", "Enable writing objects (with POST, PUT and DELETE).")
                .default(false),
        )
        .option(
            OptionDef::bool(
                "offline",
                "Run offline. Do not connect to the rest of the network but provide local API.",
            )
            .default(false),
        )
}
