// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `bidgate select` - Decide whether to bid on a job offer

use crate::output::{self, OutputFormat};
use anyhow::{Context, Result};
use bidgate_adapters::{
    ContentStore, DirContentStore, NoContentStore, ReqwestProbe, ShellProbe, TracedContentStore,
    TracedExecProbe, TracedHttpProbe,
};
use bidgate_core::{EvalContext, JobId, NodeConfig, ProbeData, Verdict};
use bidgate_engine::JobSelector;
use clap::Args;
use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Args)]
pub struct SelectArgs {
    /// Job offer as probe JSON ("-" reads stdin)
    #[arg(long)]
    pub job: PathBuf,

    /// Give up on the evaluation after this long (e.g. "10s")
    #[arg(long, value_parser = humantime::parse_duration)]
    pub timeout: Option<Duration>,

    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct SelectReport {
    job_id: JobId,
    accepted: bool,
    verdict: Verdict,
}

impl std::fmt::Display for SelectReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.verdict)
    }
}

pub async fn select(args: SelectArgs, config: &NodeConfig, ctx: EvalContext) -> Result<()> {
    let mut data = read_job(&args.job)?;
    if data.node_id.is_empty() {
        if let Some(node_id) = &config.node_id {
            data.node_id = node_id.clone();
        }
    }

    let ctx = match args.timeout {
        Some(timeout) => ctx.with_timeout(timeout),
        None => ctx,
    };
    let ctx = ctx.with_span(tracing::info_span!("select", job_id = %data.job_id));

    let verdict = match &config.content_dir {
        Some(dir) => evaluate(DirContentStore::new(dir), config, &ctx, &data).await?,
        None => evaluate(NoContentStore, config, &ctx, &data).await?,
    };

    let report = SelectReport {
        job_id: data.job_id,
        accepted: verdict.is_accepted(),
        verdict,
    };
    output::print(&report, args.format)
}

async fn evaluate<C: ContentStore>(
    store: C,
    config: &NodeConfig,
    ctx: &EvalContext,
    data: &ProbeData,
) -> Result<Verdict> {
    let selector = JobSelector::new(
        config.job_selection.clone(),
        TracedContentStore::new(store),
        TracedHttpProbe::new(ReqwestProbe::new()),
        TracedExecProbe::new(ShellProbe::new()),
    );
    selector
        .evaluate(ctx, data)
        .await
        .with_context(|| format!("could not evaluate job {}", data.job_id))
}

fn read_job(path: &Path) -> Result<ProbeData> {
    let json = if path == Path::new("-") {
        let mut json = String::new();
        std::io::stdin()
            .read_to_string(&mut json)
            .context("failed to read job from stdin")?;
        json
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read job {}", path.display()))?
    };
    serde_json::from_str(&json).context("job is not valid probe JSON")
}
