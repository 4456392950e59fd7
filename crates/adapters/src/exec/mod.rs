// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! External-process probe adapters

mod shell;

pub use shell::ShellProbe;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{ExecProbeCall, FakeExecProbe};

use crate::ProbeError;
use async_trait::async_trait;
use bidgate_core::{EvalContext, ProbeData};

/// External command consulted about a job offer
#[async_trait]
pub trait ExecProbe: Clone + Send + Sync + 'static {
    /// Run `command` against the probe data
    ///
    /// `Ok(true)` when it exits 0, `Ok(false)` for any other exit.
    /// Errors mean the command could not be run to completion.
    async fn probe(
        &self,
        ctx: &EvalContext,
        command: &str,
        data: &ProbeData,
    ) -> Result<bool, ProbeError>;
}
