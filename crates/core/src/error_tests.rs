// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn under_prefixes_relative_path() {
    let err = TreeError::DuplicateRegistration {
        path: "stat".to_string(),
    }
    .under("block")
    .under("ipx");

    assert_eq!(err.path(), "ipx block stat");
    assert_eq!(
        err.to_string(),
        "duplicate registration: `ipx block stat` is already registered"
    );
}

#[test]
fn under_with_empty_relative_path_names_the_parent() {
    let err = TreeError::MissingHelpMetadata {
        path: String::new(),
    }
    .under("ipx");

    assert_eq!(err.path(), "ipx");
}

#[test]
fn under_empty_prefix_is_identity() {
    let err = TreeError::AllowListDrift {
        path: "object get".to_string(),
    };
    assert_eq!(err.clone().under(""), err);
}

#[test]
fn kind_mismatch_names_both_kinds() {
    let err = TreeError::KindMismatch {
        path: "ipx ls".to_string(),
        expected: CommandKind::Modern,
        actual: CommandKind::Legacy,
    };
    let message = err.to_string();
    assert!(message.contains("modern"));
    assert!(message.contains("legacy"));
}
