// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Node configuration
//!
//! Loaded from TOML. Missing sections fall back to defaults; values are
//! only checked for syntax and type here. Semantic problems such as a
//! malformed probe URL surface when a job is evaluated.

use crate::policy::JobSelectionPolicy;
use crate::retry::FailureKind;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("could not determine config directory")]
    NoConfigDir,
}

/// Retry settings used to assemble the requester's retry chain
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Stop retrying once this many attempts have been made
    pub max_attempts: Option<u32>,
    /// Only these failure kinds are retried
    pub kinds: Option<Vec<FailureKind>>,
}

impl RetryConfig {
    pub fn is_empty(&self) -> bool {
        self.max_attempts.is_none() && self.kinds.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeConfig {
    /// Identity reported to probes
    pub node_id: Option<String>,
    /// Root of the node's local content store
    pub content_dir: Option<PathBuf>,
    pub job_selection: JobSelectionPolicy,
    pub retry: RetryConfig,
}

impl NodeConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        contents.parse().map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Per-user config location (`<config dir>/bidgate/node.toml`)
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join("bidgate").join("node.toml"))
            .ok_or(ConfigError::NoConfigDir)
    }
}

impl std::str::FromStr for NodeConfig {
    type Err = toml::de::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
