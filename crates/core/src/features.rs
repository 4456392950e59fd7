// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Node features an operator has switched off
//!
//! A job that needs a disabled engine, storage source, verifier or publisher
//! cannot run here, so the node refuses it outright. Requirements are read
//! from the job spec:
//!
//! ```json
//! { "engine": "wasm", "verifier": "noop", "publisher": "ipfs",
//!   "inputs": [{ "source": "inline" }] }
//! ```
//!
//! Names compare case-insensitively.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Which part of the node a feature belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureKind {
    Engine,
    Storage,
    Verifier,
    Publisher,
}

impl FeatureKind {
    pub fn name(&self) -> &'static str {
        match self {
            FeatureKind::Engine => "engine",
            FeatureKind::Storage => "storage",
            FeatureKind::Verifier => "verifier",
            FeatureKind::Publisher => "publisher",
        }
    }
}

impl std::fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A job requirement that hit a disabled feature
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisabledFeature {
    pub kind: FeatureKind,
    pub name: String,
}

impl std::fmt::Display for DisabledFeature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.kind, self.name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisabledFeatures {
    pub engines: Vec<String>,
    pub storages: Vec<String>,
    pub verifiers: Vec<String>,
    pub publishers: Vec<String>,
}

impl DisabledFeatures {
    pub fn is_empty(&self) -> bool {
        self.engines.is_empty()
            && self.storages.is_empty()
            && self.verifiers.is_empty()
            && self.publishers.is_empty()
    }

    pub fn disable(mut self, kind: FeatureKind, name: impl Into<String>) -> Self {
        let list = match kind {
            FeatureKind::Engine => &mut self.engines,
            FeatureKind::Storage => &mut self.storages,
            FeatureKind::Verifier => &mut self.verifiers,
            FeatureKind::Publisher => &mut self.publishers,
        };
        list.push(name.into());
        self
    }

    /// First requirement of `spec` that names a disabled feature
    ///
    /// A spec that names nothing requires nothing.
    pub fn first_blocked(&self, spec: &Value) -> Option<DisabledFeature> {
        required(spec).find(|(kind, name)| self.is_disabled(*kind, name)).map(
            |(kind, name)| DisabledFeature {
                kind,
                name: name.to_string(),
            },
        )
    }

    pub fn is_disabled(&self, kind: FeatureKind, name: &str) -> bool {
        let list = match kind {
            FeatureKind::Engine => &self.engines,
            FeatureKind::Storage => &self.storages,
            FeatureKind::Verifier => &self.verifiers,
            FeatureKind::Publisher => &self.publishers,
        };
        list.iter().any(|disabled| disabled.eq_ignore_ascii_case(name))
    }
}

/// Features a job spec asks for, in engine, storage, verifier, publisher order
fn required(spec: &Value) -> impl Iterator<Item = (FeatureKind, &str)> {
    let storages = spec
        .get("inputs")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(|input| input.get("source").and_then(Value::as_str))
        .map(|source| (FeatureKind::Storage, source));

    named(spec, "engine", FeatureKind::Engine)
        .into_iter()
        .chain(storages)
        .chain(named(spec, "verifier", FeatureKind::Verifier))
        .chain(named(spec, "publisher", FeatureKind::Publisher))
}

fn named<'a>(spec: &'a Value, key: &str, kind: FeatureKind) -> Option<(FeatureKind, &'a str)> {
    spec.get(key).and_then(Value::as_str).map(|name| (kind, name))
}

#[cfg(test)]
#[path = "features_tests.rs"]
mod tests;
