// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Peer-to-peer network commands

use ipx_core::{Command, OptionDef, TreeError};

use super::{group, legacy};

const SWARM: &str = "swarm";
const DHT: &str = "dht";

pub fn id() -> Command {
    legacy("Show ipx node id info.", "identity")
        .synopsis("ipx id [--format=<format> | -f] [<peerid>]")
        .description(
            "Prints out information about the specified peer. If no peer is \
specified, prints out information about the local peer.",
        )
        .option(OptionDef::string("format", "Optional output format.").alias('f'))
}

/// `bootstrap` lists peers itself; its subcommands edit the list
pub fn bootstrap() -> Result<Command, TreeError> {
    legacy("Show or edit the list of bootstrap peers.", "config")
        .synopsis("ipx bootstrap")
        .description(
            "Running 'ipx bootstrap' with no arguments will run 'ipx bootstrap list'.",
        )
        .subcommands([
            (
                "add",
                legacy("Add peers to the bootstrap list.", "config")
                    .option(
                        OptionDef::bool("default", "Add default bootstrap nodes.").default(false),
                    ),
            ),
            ("list", legacy("Show peers in the bootstrap list.", "config")),
            (
                "rm",
                legacy("Remove peers from the bootstrap list.", "config")
                    .option(OptionDef::bool("all", "Remove all bootstrap peers.").default(false)),
            ),
        ])
}

pub fn swarm() -> Result<Command, TreeError> {
    let filters = group("Manipulate address filters.").subcommands([
        ("add", legacy("Add an address filter.", SWARM)),
        ("rm", legacy("Remove an address filter.", SWARM)),
    ])?;

    group("Interact with the swarm.")
        .description(
            "'ipx swarm' is a tool to manipulate the network swarm. The swarm is the \
component that opens, listens for, and maintains connections to other ipx peers \
in the internet.",
        )
        .subcommands([
            (
                "peers",
                legacy("List peers with open connections.", SWARM)
                    .option(OptionDef::bool("verbose", "Display all extra information.").alias('v'))
                    .option(
                        OptionDef::bool(
                            "streams",
                            "Also list information about open streams for each peer.",
                        ),
                    )
                    .option(
                        OptionDef::bool(
                            "latency",
                            "Also list information about latency to each peer.",
                        ),
                    ),
            ),
            ("addrs", legacy("List known addresses. Useful for debugging.", SWARM)),
            ("connect", legacy("Open connection to a given address.", SWARM)),
            ("disconnect", legacy("Close connection to a given address.", SWARM)),
            ("filters", filters),
        ])
}

pub fn dht() -> Result<Command, TreeError> {
    let verbose = || {
        OptionDef::bool("verbose", "Print extra information.")
            .alias('v')
            .default(false)
    };

    group("Issue commands directly through the DHT.").subcommands([
        (
            "query",
            legacy("Find the closest Peer IDs to a given Peer ID by querying the DHT.", DHT)
                .option(verbose()),
        ),
        (
            "findprovs",
            legacy("Find peers in the DHT that can provide a specific value, given a key.", DHT)
                .option(verbose())
                .option(
                    OptionDef::string("num-providers", "The number of providers to find.")
                        .alias('n')
                        .default("20"),
                ),
        ),
        (
            "findpeer",
            legacy(
                "Query the DHT for all of the multiaddresses associated with a Peer ID.",
                DHT,
            )
            .option(verbose()),
        ),
        ("get", legacy("Given a key, query the DHT for its best value.", DHT).option(verbose())),
        ("put", legacy("Write a key/value pair to the DHT.", DHT).option(verbose())),
        (
            "provide",
            legacy("Announce to the network that you are providing given values.", DHT)
                .option(verbose())
                .option(
                    OptionDef::bool("recursive", "Recursively provide entire graph.")
                        .alias('r')
                        .default(false),
                ),
        ),
    ])
}

pub fn ping() -> Command {
    legacy("Send echo request packets to ipx hosts.", SWARM)
        .synopsis("ipx ping [--count=<count> | -n] <peer ID>...")
        .description(
            "'ipx ping' is a tool to test sending data to other nodes. It finds nodes \
via the routing system, sends pings, waits for pongs, and prints out round-trip \
latency information.",
        )
        .option(
            OptionDef::string("count", "Number of ping messages to send.").alias('n').default("10"),
        )
}

pub fn ptp() -> Result<Command, TreeError> {
    let listener = group("P2P listener management.").subcommands([
        (
            "ls",
            legacy("List active p2p listeners.", "ptp")
                .option(
                    OptionDef::bool(
                        "headers",
                        "Print table headers (HandlerID, Protocol, Local, Remote).",
                    )
                    .alias('v')
                    .default(false),
                ),
        ),
        ("open", legacy("Forward p2p connections to a multiaddr.", "ptp")),
        (
            "close",
            legacy("Close active p2p listener.", "ptp")
                .option(OptionDef::bool("all", "Close all listeners.").alias('a').default(false)),
        ),
    ])?;
    let stream = group("P2P stream management.").subcommands([
        (
            "ls",
            legacy("List active p2p streams.", "ptp")
                .option(
                    OptionDef::bool(
                        "headers",
                        "Print table headers (HandlerID, Protocol, Local, Remote).",
                    )
                    .alias('v')
                    .default(false),
                ),
        ),
        ("dial", legacy("Dial to a p2p listener.", "ptp")),
        (
            "close",
            legacy("Close active p2p stream.", "ptp")
                .option(OptionDef::bool("all", "Close all streams.").alias('a').default(false)),
        ),
    ])?;

    group("Libp2p stream mounting.")
        .description("Create and use tunnels to remote peers over libp2p.")
        .subcommands([("listener", listener), ("stream", stream)])
}

pub fn pubsub() -> Result<Command, TreeError> {
    group("An experimental publish-subscribe system on ipx.")
        .description(
            "ipx pubsub allows you to publish messages to a given topic, and also to \
subscribe to new messages on a given topic.

This is an experimental feature. It is not intended in its current state to be \
used in a production environment.",
        )
        .subcommands([
            ("pub", legacy("Publish a message to a given pubsub topic.", "pubsub")),
            (
                "sub",
                legacy("Subscribe to messages on a given topic.", "pubsub")
                    .option(
                        OptionDef::bool(
                            "discover",
                            "Try to discover other peers subscribed to the same topic.",
                        ),
                    ),
            ),
            ("ls", legacy("List subscribed topics by name.", "pubsub")),
            ("peers", legacy("List peers we are currently pubsubbing with.", "pubsub")),
        ])
}

pub fn bitswap() -> Result<Command, TreeError> {
    group("Interact with the bitswap agent.").subcommands([
        (
            "wantlist",
            legacy("Show blocks currently on the wantlist.", "bitswap")
                .option(
                    OptionDef::string("peer", "Specify which peer to show wantlist for.")
                        .alias('p'),
                ),
        ),
        ("stat", legacy("Show some diagnostic information on the bitswap agent.", "bitswap")),
        ("unwant", legacy("Remove a given block from your wantlist.", "bitswap")),
        ("ledger", legacy("Show the current ledger for a peer.", "bitswap")),
        ("reprovide", legacy("Trigger reprovider.", "bitswap")),
    ])
}
