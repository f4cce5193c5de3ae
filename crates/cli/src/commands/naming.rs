// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Name resolution and IPNS

use ipx_core::{Command, OptionDef, TreeError};

use super::{group, legacy};

const NAMESYS: &str = "namesys";
const KEYSTORE: &str = "keystore";

pub fn resolve() -> Command {
    legacy("Resolve the value of names to ipx.", NAMESYS)
        .synopsis("ipx resolve [--recursive | -r] <name>")
        .description(
            "There are a number of mutable name protocols that can link among \
themselves and into ipns. This command accepts any of these identifiers and \
resolves them to the referenced item.",
        )
        .option(
            OptionDef::bool("recursive", "Resolve until the result is an ipx name.")
                .alias('r')
                .default(false),
        )
}

pub fn name() -> Result<Command, TreeError> {
    group("Publish and resolve IPNS names.")
        .description(
            "IPNS is a PKI namespace, where names are the hashes of public keys, and \
the private key enables publishing new (signed) values.",
        )
        .subcommands([
            (
                "publish",
                legacy("Publish IPNS names.", NAMESYS)
                    .synopsis(
                        "ipx name publish [--lifetime=<lifetime> | -t] [--key=<key> | -k] <ipx-path>",
                    )
                    .option(
                        OptionDef::bool("resolve", "Resolve given path before publishing.")
                            .default(true),
                    )
                    .option(
                        OptionDef::string(
                            "lifetime",
                            "Time duration that the record will be valid for.",
                        )
                        .alias('t')
                        .default("24h"),
                    )
                    .option(
                        OptionDef::string(
                            "ttl",
                            "Time duration this record should be cached for (caution: experimental).",
                        ),
                    )
                    .option(
                        OptionDef::string(
                            "key",
                            "Name of the key to be used, as listed by 'ipx key list'.",
                        )
                        .alias('k')
                        .default("self"),
                    ),
            ),
            (
                "resolve",
                legacy("Resolve IPNS names.", NAMESYS)
                    .synopsis("ipx name resolve [--recursive | -r] [<name>]")
                    .option(
                        OptionDef::bool(
                            "recursive",
                            "Resolve until the result is not an IPNS name.",
                        )
                        .alias('r')
                        .default(false),
                    )
                    .option(
                        OptionDef::bool("nocache", "Do not use cached entries.")
                            .alias('n')
                            .default(false),
                    ),
            ),
        ])
}

pub fn key() -> Result<Command, TreeError> {
    group("Create and list IPNS name keypairs.").subcommands([
        (
            "gen",
            legacy("Create a new keypair.", KEYSTORE)
                .option(
                    OptionDef::string("type", "Type of the key to create [rsa, ed25519].")
                        .alias('t'),
                )
                .option(OptionDef::string("size", "Size of the key to generate.").alias('s')),
        ),
        (
            "list",
            legacy("List all local keypairs.", KEYSTORE)
                .option(OptionDef::bool("l", "Show extra information about keys.")),
        ),
        (
            "rename",
            legacy("Rename a keypair.", KEYSTORE)
                .option(OptionDef::bool("force", "Allow to overwrite an existing key.").alias('f')),
        ),
        (
            "rm",
            legacy("Remove a keypair.", KEYSTORE)
                .option(OptionDef::bool("l", "Show extra information about keys.")),
        ),
    ])
}

pub fn dns() -> Command {
    legacy("Resolve DNS links.", NAMESYS)
        .synopsis("ipx dns [--recursive | -r] <domain-name>")
        .description(
            "Multihashes are hard to remember, but domain names are usually easy to \
remember. To create memorable aliases for multihashes, DNS TXT records can point \
to other DNS links, ipx objects, IPNS keys, etc.",
        )
        .option(
            OptionDef::bool("recursive", "Resolve until the result is not a DNS link.")
                .alias('r')
                .default(false),
        )
}
