// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `bidgate retry` - Decide whether to retry a failed operation

use crate::output::{self, OutputFormat};
use anyhow::Result;
use bidgate_core::{EvalContext, FailureKind, JobId, NodeConfig, RetryRequest};
use bidgate_engine::Chain;
use clap::Args;
use serde::Serialize;

#[derive(Args)]
pub struct RetryArgs {
    /// What failed (e.g. node_unreachable, execution_failed)
    #[arg(long)]
    pub kind: FailureKind,

    /// Attempts made so far, counting the one that failed
    #[arg(long)]
    pub attempt: u32,

    /// Job the failure belongs to
    #[arg(long)]
    pub job_id: Option<String>,

    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct RetryReport<'a> {
    job_id: &'a JobId,
    kind: FailureKind,
    attempt: u32,
    retry: bool,
    strategies: Vec<&'a str>,
}

impl std::fmt::Display for RetryReport<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(if self.retry { "retry" } else { "no-retry" })
    }
}

pub async fn retry(args: RetryArgs, config: &NodeConfig, ctx: EvalContext) -> Result<()> {
    let job_id = args.job_id.map(JobId::from).unwrap_or_else(JobId::generate);
    let request = RetryRequest::new(job_id, args.kind).with_attempt(args.attempt);
    let ctx = ctx.with_span(tracing::info_span!("retry", job_id = %request.job_id));

    let chain = Chain::from_config(&config.retry);
    let retry = chain.should_retry(&ctx, &request).await;

    let report = RetryReport {
        job_id: &request.job_id,
        kind: request.kind,
        attempt: request.attempt,
        retry,
        strategies: chain.names(),
    };
    output::print(&report, args.format)
}
