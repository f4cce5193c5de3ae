// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Option definitions and resolved option values

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::Serialize;

/// Declared type of an option value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    String,
    Bool,
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::String => f.write_str("string"),
            OptionType::Bool => f.write_str("bool"),
        }
    }
}

/// A concrete option value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OptionValue {
    String(String),
    Bool(bool),
}

impl OptionValue {
    pub fn kind(&self) -> OptionType {
        match self {
            OptionValue::String(_) => OptionType::String,
            OptionValue::Bool(_) => OptionType::Bool,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            OptionValue::Bool(b) => Some(*b),
            OptionValue::String(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptionValue::String(s) => Some(s),
            OptionValue::Bool(_) => None,
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Bool(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::String(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::String(value)
    }
}

/// An option accepted by a command (`--name`, optionally `-a`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionDef {
    pub name: String,
    pub alias: Option<char>,
    pub kind: OptionType,
    pub default: Option<OptionValue>,
    pub description: String,
}

impl OptionDef {
    fn new(name: &str, kind: OptionType, description: &str) -> Self {
        Self {
            name: name.to_string(),
            alias: None,
            kind,
            default: None,
            description: description.to_string(),
        }
    }

    /// A string-valued option
    pub fn string(name: &str, description: &str) -> Self {
        Self::new(name, OptionType::String, description)
    }

    /// A boolean switch
    pub fn bool(name: &str, description: &str) -> Self {
        Self::new(name, OptionType::Bool, description)
    }

    /// Add a single-character alias (`-a`)
    pub fn alias(mut self, alias: char) -> Self {
        self.alias = Some(alias);
        self
    }

    /// Set the value used when the option is not given
    pub fn default(mut self, value: impl Into<OptionValue>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Whether `-c` selects this option, either by alias or by a
    /// single-character name such as `h`.
    pub fn matches_short(&self, c: char) -> bool {
        if self.alias == Some(c) {
            return true;
        }
        let mut chars = self.name.chars();
        chars.next() == Some(c) && chars.next().is_none()
    }
}

/// Option values resolved for one invocation.
///
/// Defaults of every command along the resolved path are present; values
/// given on the command line replace them and are tracked as explicit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OptionMap {
    values: BTreeMap<String, OptionValue>,
    explicit: BTreeSet<String>,
}

impl OptionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert defaults for `defs` without overriding anything already set.
    pub fn add_defaults(&mut self, defs: &[OptionDef]) {
        for def in defs {
            if let Some(default) = &def.default {
                self.values
                    .entry(def.name.clone())
                    .or_insert_with(|| default.clone());
            }
        }
    }

    /// Record an explicitly given value.
    pub fn set(&mut self, name: &str, value: OptionValue) {
        self.values.insert(name.to_string(), value);
        self.explicit.insert(name.to_string());
    }

    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.values.get(name)
    }

    /// Boolean value of `name`; absent or non-boolean options read as false.
    pub fn flag(&self, name: &str) -> bool {
        self.get(name).and_then(OptionValue::as_bool).unwrap_or(false)
    }

    pub fn string(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(OptionValue::as_str)
    }

    /// Whether `name` was given on the command line rather than defaulted.
    pub fn is_explicit(&self, name: &str) -> bool {
        self.explicit.contains(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
#[path = "option_tests.rs"]
mod tests;
