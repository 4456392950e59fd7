// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Node-local job selection policy
//!
//! Every criterion is optional. An unconfigured criterion never takes part
//! in the verdict, so the default policy accepts every job.

use crate::criterion::Criterion;
use crate::features::DisabledFeatures;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Where a job's input content has to live for the node to accept it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locality {
    /// Every input must already be held by the node's content store
    Local,
    /// No requirement
    #[default]
    Anywhere,
}

/// Admission policy, immutable for the duration of an evaluation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobSelectionPolicy {
    /// Refuse jobs that need any of these features
    pub disabled_features: DisabledFeatures,
    /// Reject jobs that declare no input volumes
    pub reject_stateless_jobs: bool,
    pub locality: Locality,
    /// Endpoint that receives a POST of the probe data
    pub probe_http: Option<String>,
    /// Shell command run with the probe data on stdin
    pub probe_exec: Option<String>,
    /// Upper bound on each external probe
    #[serde(with = "humantime_serde", skip_serializing_if = "Option::is_none")]
    pub probe_timeout: Option<Duration>,
}

impl JobSelectionPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_disabled_features(mut self, disabled: DisabledFeatures) -> Self {
        self.disabled_features = disabled;
        self
    }

    pub fn rejecting_stateless_jobs(mut self) -> Self {
        self.reject_stateless_jobs = true;
        self
    }

    pub fn with_locality(mut self, locality: Locality) -> Self {
        self.locality = locality;
        self
    }

    pub fn with_probe_http(mut self, url: impl Into<String>) -> Self {
        self.probe_http = Some(url.into());
        self
    }

    pub fn with_probe_exec(mut self, command: impl Into<String>) -> Self {
        self.probe_exec = Some(command.into());
        self
    }

    pub fn with_probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = Some(timeout);
        self
    }

    /// Configured HTTP probe URL (blank strings count as unconfigured)
    pub fn http_probe(&self) -> Option<&str> {
        non_blank(self.probe_http.as_deref())
    }

    /// Configured exec probe command (blank strings count as unconfigured)
    pub fn exec_probe(&self) -> Option<&str> {
        non_blank(self.probe_exec.as_deref())
    }

    pub fn is_configured(&self, criterion: Criterion) -> bool {
        match criterion {
            Criterion::DisabledFeatures => !self.disabled_features.is_empty(),
            Criterion::Stateless => self.reject_stateless_jobs,
            Criterion::Locality => self.locality == Locality::Local,
            Criterion::HttpProbe => self.http_probe().is_some(),
            Criterion::ExecProbe => self.exec_probe().is_some(),
        }
    }

    /// Configured criteria, in evaluation order
    pub fn criteria(&self) -> Vec<Criterion> {
        Criterion::ORDER
            .into_iter()
            .filter(|c| self.is_configured(*c))
            .collect()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
#[path = "policy_tests.rs"]
mod tests;
