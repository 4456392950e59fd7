// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrappers for consistent observability

use crate::content::{ContentError, ContentStore};
use crate::exec::ExecProbe;
use crate::http::HttpProbe;
use crate::ProbeError;
use async_trait::async_trait;
use bidgate_core::{EvalContext, ProbeData};
use tracing::Instrument;

/// Wrapper that adds tracing to any HttpProbe
#[derive(Clone)]
pub struct TracedHttpProbe<H> {
    inner: H,
}

impl<H> TracedHttpProbe<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<H: HttpProbe> HttpProbe for TracedHttpProbe<H> {
    async fn probe(
        &self,
        ctx: &EvalContext,
        url: &str,
        data: &ProbeData,
    ) -> Result<bool, ProbeError> {
        let span = tracing::info_span!(parent: ctx.span(), "probe.http", url, job_id = %data.job_id);

        async {
            tracing::info!("starting");

            let start = std::time::Instant::now();
            let result = self.inner.probe(ctx, url, data).await;
            let elapsed = start.elapsed();

            match &result {
                Ok(pass) => tracing::info!(
                    pass,
                    elapsed_ms = elapsed.as_millis() as u64,
                    "probe answered"
                ),
                Err(e) if e.interrupted().is_some() => tracing::warn!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    error = %e,
                    "probe interrupted"
                ),
                Err(e) => tracing::error!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    error = %e,
                    "probe failed"
                ),
            }

            result
        }
        .instrument(span)
        .await
    }
}

/// Wrapper that adds tracing to any ExecProbe
#[derive(Clone)]
pub struct TracedExecProbe<E> {
    inner: E,
}

impl<E> TracedExecProbe<E> {
    pub fn new(inner: E) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<E: ExecProbe> ExecProbe for TracedExecProbe<E> {
    async fn probe(
        &self,
        ctx: &EvalContext,
        command: &str,
        data: &ProbeData,
    ) -> Result<bool, ProbeError> {
        let span =
            tracing::info_span!(parent: ctx.span(), "probe.exec", command, job_id = %data.job_id);

        async {
            tracing::info!("starting");

            let start = std::time::Instant::now();
            let result = self.inner.probe(ctx, command, data).await;
            let elapsed = start.elapsed();

            match &result {
                Ok(pass) => tracing::info!(
                    pass,
                    elapsed_ms = elapsed.as_millis() as u64,
                    "probe answered"
                ),
                // An interrupted probe is the caller's doing, not a probe fault
                Err(e) if e.interrupted().is_some() => tracing::warn!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    error = %e,
                    "probe interrupted"
                ),
                Err(e) => tracing::error!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    error = %e,
                    "probe failed"
                ),
            }

            result
        }
        .instrument(span)
        .await
    }
}

/// Wrapper that adds tracing to any ContentStore
#[derive(Clone)]
pub struct TracedContentStore<C> {
    inner: C,
}

impl<C> TracedContentStore<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<C: ContentStore> ContentStore for TracedContentStore<C> {
    async fn has_content(&self, cid: &str) -> Result<bool, ContentError> {
        let result = self.inner.has_content(cid).await;
        match &result {
            Ok(present) => tracing::trace!(cid, present, "checked"),
            Err(e) => tracing::error!(cid, error = %e, "content lookup failed"),
        }
        result
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
