// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Errors shared by the HTTP and exec probes
//!
//! A probe's "fail" verdict is `Ok(false)`. These errors mean the probe
//! could not render a verdict at all.

use bidgate_core::Interrupted;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("invalid probe url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("probe transport failed: {0}")]
    Transport(String),
    #[error("failed to spawn probe command: {0}")]
    Spawn(String),
    #[error("probe io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode probe data: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("probe interrupted: {0}")]
    Interrupted(#[from] Interrupted),
}

impl ProbeError {
    /// The interruption behind this error, if any
    pub fn interrupted(&self) -> Option<Interrupted> {
        match self {
            ProbeError::Interrupted(why) => Some(*why),
            _ => None,
        }
    }
}
