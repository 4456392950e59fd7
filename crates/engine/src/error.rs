// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for job selection

use bidgate_adapters::{ContentError, ProbeError};
use bidgate_core::Interrupted;
use thiserror::Error;

/// Job selection could not reach a verdict
///
/// A rejected job is not an error; these mean the evaluator itself failed.
#[derive(Debug, Error)]
pub enum SelectError {
    #[error("locality check failed: {0}")]
    Content(#[from] ContentError),
    #[error("http probe failed: {0}")]
    HttpProbe(#[source] ProbeError),
    #[error("exec probe failed: {0}")]
    ExecProbe(#[source] ProbeError),
    /// The caller's context was cancelled or ran out of time
    #[error("job selection interrupted: {0}")]
    Interrupted(#[from] Interrupted),
}
