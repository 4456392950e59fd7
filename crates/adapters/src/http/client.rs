// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! reqwest-backed HTTP probe

use super::HttpProbe;
use crate::ProbeError;
use async_trait::async_trait;
use bidgate_core::{EvalContext, ProbeData};
use reqwest::header::CONTENT_TYPE;
use reqwest::Url;
use std::time::Duration;

/// HTTP probe issuing a JSON POST per job offer
#[derive(Clone, Debug, Default)]
pub struct ReqwestProbe {
    client: reqwest::Client,
}

impl ReqwestProbe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Probe with a client-level timeout on every request
    pub fn with_timeout(timeout: Duration) -> Result<Self, ProbeError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ProbeError::Transport(e.to_string()))?;
        Ok(Self { client })
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

fn parse_url(url: &str) -> Result<Url, ProbeError> {
    let invalid = |reason: String| ProbeError::InvalidUrl {
        url: url.to_string(),
        reason,
    };

    let parsed = Url::parse(url).map_err(|e| invalid(e.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(invalid(format!("unsupported scheme {}", other))),
    }
}

#[async_trait]
impl HttpProbe for ReqwestProbe {
    async fn probe(
        &self,
        ctx: &EvalContext,
        url: &str,
        data: &ProbeData,
    ) -> Result<bool, ProbeError> {
        let url = parse_url(url)?;
        let body = data.to_json()?;

        let request = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send();

        // Dropping the request future aborts the connection
        let response = ctx
            .run(request)
            .await?
            .map_err(|e| ProbeError::Transport(e.to_string()))?;

        let status = response.status();
        tracing::debug!(parent: ctx.span(), %status, job_id = %data.job_id, "http probe responded");
        Ok(status.is_success())
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
