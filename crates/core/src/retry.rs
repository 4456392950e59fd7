// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Retry requests: one retryable failure, as seen by retry strategies

use crate::id::JobId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Classification of the operation that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// A compute node declined to bid on the job
    BidRejected,
    /// The job ran and failed
    ExecutionFailed,
    /// The job's results did not verify
    VerificationFailed,
    /// The job's results could not be published
    PublishFailed,
    /// The target node could not be reached
    NodeUnreachable,
    /// The operation ran past its deadline
    Timeout,
    Other,
}

impl FailureKind {
    pub const ALL: [FailureKind; 7] = [
        FailureKind::BidRejected,
        FailureKind::ExecutionFailed,
        FailureKind::VerificationFailed,
        FailureKind::PublishFailed,
        FailureKind::NodeUnreachable,
        FailureKind::Timeout,
        FailureKind::Other,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FailureKind::BidRejected => "bid_rejected",
            FailureKind::ExecutionFailed => "execution_failed",
            FailureKind::VerificationFailed => "verification_failed",
            FailureKind::PublishFailed => "publish_failed",
            FailureKind::NodeUnreachable => "node_unreachable",
            FailureKind::Timeout => "timeout",
            FailureKind::Other => "other",
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown failure kind: {0}")]
pub struct UnknownFailureKind(pub String);

impl std::str::FromStr for FailureKind {
    type Err = UnknownFailureKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FailureKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| UnknownFailureKind(s.to_string()))
    }
}

/// One retryable failure, built once and shared by every strategy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryRequest {
    pub job_id: JobId,
    pub kind: FailureKind,
    /// 1-based count of attempts made so far
    pub attempt: u32,
}

impl RetryRequest {
    pub fn new(job_id: impl Into<JobId>, kind: FailureKind) -> Self {
        Self {
            job_id: job_id.into(),
            kind,
            attempt: 1,
        }
    }

    pub fn with_attempt(mut self, attempt: u32) -> Self {
        self.attempt = attempt;
        self
    }
}
