// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job admission evaluator
//!
//! Criteria run in a fixed order: disabled features, stateless, locality,
//! HTTP probe, exec probe. Only configured criteria run, and the first one to fail
//! rejects the job without consulting the rest. Probes are never run
//! concurrently: each one costs a network call or a process spawn.

use crate::SelectError;
use bidgate_adapters::{ContentStore, ExecProbe, HttpProbe, LocalityProber, ProbeError};
use bidgate_core::{Criterion, EvalContext, JobSelectionPolicy, Locality, ProbeData, Verdict};

/// Decides whether a node bids on a job offer
///
/// Holds only read-only configuration, so one selector can serve many
/// concurrent evaluations.
#[derive(Clone)]
pub struct JobSelector<C, H, E> {
    policy: JobSelectionPolicy,
    locality: LocalityProber<C>,
    http: H,
    exec: E,
}

impl<C, H, E> JobSelector<C, H, E>
where
    C: ContentStore,
    H: HttpProbe,
    E: ExecProbe,
{
    pub fn new(policy: JobSelectionPolicy, store: C, http: H, exec: E) -> Self {
        Self {
            policy,
            locality: LocalityProber::new(store),
            http,
            exec,
        }
    }

    pub fn policy(&self) -> &JobSelectionPolicy {
        &self.policy
    }

    /// Accept (`true`) or reject (`false`) a job offer
    pub async fn select_job(
        &self,
        ctx: &EvalContext,
        data: &ProbeData,
    ) -> Result<bool, SelectError> {
        self.evaluate(ctx, data)
            .await
            .map(|verdict| verdict.is_accepted())
    }

    /// Evaluate a job offer, reporting which criterion rejected it
    pub async fn evaluate(
        &self,
        ctx: &EvalContext,
        data: &ProbeData,
    ) -> Result<Verdict, SelectError> {
        for criterion in Criterion::ORDER {
            let pass = match criterion {
                Criterion::DisabledFeatures if !self.policy.disabled_features.is_empty() => {
                    ctx.check()?;
                    match self.policy.disabled_features.first_blocked(&data.spec) {
                        Some(feature) => {
                            tracing::debug!(
                                parent: ctx.span(),
                                %feature,
                                job_id = %data.job_id,
                                "job needs a disabled feature"
                            );
                            false
                        }
                        None => true,
                    }
                }
                Criterion::Stateless if self.policy.reject_stateless_jobs => {
                    ctx.check()?;
                    !data.is_stateless()
                }
                Criterion::Locality if self.policy.locality == Locality::Local => {
                    ctx.run(self.locality.has_all(data)).await??
                }
                Criterion::HttpProbe => match self.policy.http_probe() {
                    Some(url) => self.probe_http(ctx, url, data).await?,
                    None => continue,
                },
                Criterion::ExecProbe => match self.policy.exec_probe() {
                    Some(command) => self.probe_exec(ctx, command, data).await?,
                    None => continue,
                },
                _ => continue,
            };

            tracing::debug!(
                parent: ctx.span(),
                criterion = criterion.name(),
                pass,
                job_id = %data.job_id,
                "job selection criterion evaluated"
            );

            if !pass {
                tracing::info!(
                    parent: ctx.span(),
                    criterion = criterion.name(),
                    job_id = %data.job_id,
                    "job rejected"
                );
                return Ok(Verdict::Rejected(criterion));
            }
        }

        tracing::debug!(parent: ctx.span(), job_id = %data.job_id, "job accepted");
        Ok(Verdict::Accepted)
    }

    async fn probe_http(
        &self,
        ctx: &EvalContext,
        url: &str,
        data: &ProbeData,
    ) -> Result<bool, SelectError> {
        ctx.check()?;
        self.http
            .probe(&self.probe_context(ctx), url, data)
            .await
            .map_err(|e| probe_failure(ctx, e, SelectError::HttpProbe))
    }

    async fn probe_exec(
        &self,
        ctx: &EvalContext,
        command: &str,
        data: &ProbeData,
    ) -> Result<bool, SelectError> {
        ctx.check()?;
        self.exec
            .probe(&self.probe_context(ctx), command, data)
            .await
            .map_err(|e| probe_failure(ctx, e, SelectError::ExecProbe))
    }

    /// Context for one external probe, bounded by the policy's probe timeout
    fn probe_context(&self, ctx: &EvalContext) -> EvalContext {
        let child = ctx.child();
        match self.policy.probe_timeout {
            Some(timeout) => child.with_timeout(timeout),
            None => child,
        }
    }
}

/// Once the caller's context has fired, report that instead of whatever
/// the probe saw; a probe-local timeout stays a probe error.
fn probe_failure(
    ctx: &EvalContext,
    err: ProbeError,
    wrap: fn(ProbeError) -> SelectError,
) -> SelectError {
    match ctx.check() {
        Err(why) => SelectError::Interrupted(why),
        Ok(()) => wrap(err),
    }
}

#[cfg(test)]
#[path = "selector_tests.rs"]
mod tests;
