// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP probe adapters

mod client;

pub use client::ReqwestProbe;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeHttpProbe, HttpProbeCall};

use crate::ProbeError;
use async_trait::async_trait;
use bidgate_core::{EvalContext, ProbeData};

/// External endpoint consulted about a job offer
#[async_trait]
pub trait HttpProbe: Clone + Send + Sync + 'static {
    /// POST the probe data to `url`
    ///
    /// `Ok(true)` for a 2xx response, `Ok(false)` for any other status.
    /// Errors mean no response was obtained.
    async fn probe(
        &self,
        ctx: &EvalContext,
        url: &str,
        data: &ProbeData,
    ) -> Result<bool, ProbeError>;
}
