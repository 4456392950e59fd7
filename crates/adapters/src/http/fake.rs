// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake HTTP probe for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::HttpProbe;
use crate::{ProbeError, ProbeOutcome};
use async_trait::async_trait;
use bidgate_core::{EvalContext, JobId, ProbeData};
use std::sync::{Arc, Mutex};

/// Recorded HTTP probe call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpProbeCall {
    pub url: String,
    pub job_id: JobId,
}

/// Fake HTTP probe answering with a scripted outcome
#[derive(Clone, Default)]
pub struct FakeHttpProbe {
    outcome: Arc<Mutex<ProbeOutcome>>,
    calls: Arc<Mutex<Vec<HttpProbeCall>>>,
}

impl FakeHttpProbe {
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
    pub fn calls(&self) -> Vec<HttpProbeCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait]
impl HttpProbe for FakeHttpProbe {
    async fn probe(
        &self,
        ctx: &EvalContext,
        url: &str,
        data: &ProbeData,
    ) -> Result<bool, ProbeError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(HttpProbeCall {
                url: url.to_string(),
                job_id: data.job_id.clone(),
            });

        let outcome = self.outcome.lock().unwrap_or_else(|e| e.into_inner()).clone();
        outcome.resolve(ctx, ProbeError::Transport).await
    }
}
