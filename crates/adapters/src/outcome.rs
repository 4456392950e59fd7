// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scripted results for fake probes
#![cfg_attr(coverage_nightly, coverage(off))]

use crate::ProbeError;
use bidgate_core::EvalContext;

/// What a fake probe answers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ProbeOutcome {
    #[default]
    Pass,
    Fail,
    /// Transport failure (HTTP) or spawn failure (exec)
    Error(String),
    /// Never answers; only the context can end the probe
    Hang,
}

impl ProbeOutcome {
    pub(crate) async fn resolve(
        &self,
        ctx: &EvalContext,
        to_error: fn(String) -> ProbeError,
    ) -> Result<bool, ProbeError> {
        ctx.check()?;
        match self {
            ProbeOutcome::Pass => Ok(true),
            ProbeOutcome::Fail => Ok(false),
            ProbeOutcome::Error(message) => Err(to_error(message.clone())),
            ProbeOutcome::Hang => {
                ctx.run(std::future::pending::<()>()).await?;
                Ok(false)
            }
        }
    }
}
