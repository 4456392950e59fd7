// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Admission criteria and the verdict they fold into

use serde::{Deserialize, Serialize};

/// One independently configurable admission filter
///
/// Variants are declared in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    /// Refuse jobs needing a feature the node has disabled
    DisabledFeatures,
    /// Reject jobs that declare no input volumes
    Stateless,
    /// Require the job's content to already be held locally
    Locality,
    /// Consult an external HTTP endpoint
    HttpProbe,
    /// Run an external command
    ExecProbe,
}

impl Criterion {
    /// All criteria in the order the evaluator consults them
    pub const ORDER: [Criterion; 5] = [
        Criterion::DisabledFeatures,
        Criterion::Stateless,
        Criterion::Locality,
        Criterion::HttpProbe,
        Criterion::ExecProbe,
    ];

    /// Stable name used in log events and CLI output
    pub fn name(&self) -> &'static str {
        match self {
            Criterion::DisabledFeatures => "disabled_features",
            Criterion::Stateless => "stateless",
            Criterion::Locality => "locality",
            Criterion::HttpProbe => "http_probe",
            Criterion::ExecProbe => "exec_probe",
        }
    }
}

impl std::fmt::Display for Criterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of a successful admission evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Accepted,
    /// Rejected by the first configured criterion that failed
    Rejected(Criterion),
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }

    pub fn rejected_by(&self) -> Option<Criterion> {
        match self {
            Verdict::Accepted => None,
            Verdict::Rejected(criterion) => Some(*criterion),
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Accepted => f.write_str("accept"),
            Verdict::Rejected(criterion) => write!(f, "reject ({})", criterion),
        }
    }
}
