// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake exec probe for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::ExecProbe;
use crate::{ProbeError, ProbeOutcome};
use async_trait::async_trait;
use bidgate_core::{EvalContext, JobId, ProbeData};
use std::sync::{Arc, Mutex};

/// Recorded exec probe call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecProbeCall {
    pub command: String,
    pub job_id: JobId,
}

/// Fake exec probe answering with a scripted outcome
#[derive(Clone, Default)]
pub struct FakeExecProbe {
    outcome: Arc<Mutex<ProbeOutcome>>,
    calls: Arc<Mutex<Vec<ExecProbeCall>>>,
}

impl FakeExecProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answering(outcome: ProbeOutcome) -> Self {
        let probe = Self::new();
        probe.set_outcome(outcome);
        probe
    }

    pub fn set_outcome(&self, outcome: ProbeOutcome) {
        *self.outcome.lock().unwrap_or_else(|e| e.into_inner()) = outcome;
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<ExecProbeCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait]
impl ExecProbe for FakeExecProbe {
    async fn probe(
        &self,
        ctx: &EvalContext,
        command: &str,
        data: &ProbeData,
    ) -> Result<bool, ProbeError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(ExecProbeCall {
                command: command.to_string(),
                job_id: data.job_id.clone(),
            });

        let outcome = self.outcome.lock().unwrap_or_else(|e| e.into_inner()).clone();
        outcome.resolve(ctx, ProbeError::Spawn).await
    }
}
