// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Probe data: the point-in-time view of a job offer
//!
//! One `ProbeData` is built per evaluation and shared read-only with every
//! criterion. The HTTP and exec probes receive its JSON serialization.

use crate::id::JobId;
use serde::{Deserialize, Serialize};

/// Environment variable carrying the probe JSON into exec probes
pub const PROBE_DATA_ENV: &str = "BIDGATE_JOB_SELECTION_PROBE_DATA";

/// One input volume declared by a job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageInput {
    /// Content identifier of the input
    pub cid: String,
    /// Mount path inside the job, if the job names one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl StorageInput {
    pub fn new(cid: impl Into<String>) -> Self {
        Self {
            cid: cid.into(),
            path: None,
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

/// Snapshot of a job offer handed to every admission criterion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbeData {
    #[serde(default = "JobId::generate")]
    pub job_id: JobId,
    /// Node evaluating the offer
    #[serde(default)]
    pub node_id: String,
    /// Declared input volumes; empty for stateless jobs
    #[serde(default)]
    pub inputs: Vec<StorageInput>,
    /// Opaque serialized job description
    #[serde(default)]
    pub spec: serde_json::Value,
}

impl ProbeData {
    pub fn new(job_id: impl Into<JobId>) -> Self {
        Self {
            job_id: job_id.into(),
            node_id: String::new(),
            inputs: Vec::new(),
            spec: serde_json::Value::Null,
        }
    }

    pub fn with_node_id(mut self, node_id: impl Into<String>) -> Self {
        self.node_id = node_id.into();
        self
    }

    pub fn with_input(mut self, input: StorageInput) -> Self {
        self.inputs.push(input);
        self
    }

    pub fn with_spec(mut self, spec: serde_json::Value) -> Self {
        self.spec = spec;
        self
    }

    /// A job is stateless when it declares no input volumes
    pub fn is_stateless(&self) -> bool {
        self.inputs.is_empty()
    }

    /// Content identifiers of all inputs, in declaration order
    pub fn cids(&self) -> impl Iterator<Item = &str> {
        self.inputs.iter().map(|input| input.cid.as_str())
    }

    /// JSON payload sent to the HTTP and exec probes
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
#[path = "probe_tests.rs"]
mod tests;
