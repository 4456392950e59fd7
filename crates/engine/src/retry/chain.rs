// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::{ContextStrategy, FailureKindStrategy, MaxAttemptsStrategy, RetryStrategy};
use async_trait::async_trait;
use bidgate_core::{EvalContext, RetryConfig, RetryRequest};

/// Ordered retry strategies combined with AND-and-veto
///
/// An empty chain never retries. Strategies are added once during startup;
/// evaluation only reads the list, so a built chain can be shared freely.
#[derive(Default)]
pub struct Chain {
    strategies: Vec<Box<dyn RetryStrategy>>,
}

impl Chain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Chain for the requester's `[retry]` settings
    ///
    /// Empty settings give an empty chain, which never retries.
    pub fn from_config(config: &RetryConfig) -> Self {
        let mut chain = Chain::new();
        if config.is_empty() {
            return chain;
        }
        chain.add(ContextStrategy);
        if let Some(max_attempts) = config.max_attempts {
            chain.add(MaxAttemptsStrategy::new(max_attempts));
        }
        if let Some(kinds) = &config.kinds {
            chain.add(FailureKindStrategy::new(kinds.iter().copied()));
        }
        chain
    }

    /// Append a strategy after those already added
    pub fn add<S: RetryStrategy + 'static>(&mut self, strategy: S) -> &mut Self {
        self.strategies.push(Box::new(strategy));
        self
    }

    pub fn with<S: RetryStrategy + 'static>(mut self, strategy: S) -> Self {
        self.add(strategy);
        self
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// Strategy names in evaluation order
    pub fn names(&self) -> Vec<&str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// `true` only when the chain is non-empty and every strategy agrees
    ///
    /// Stops at the first strategy that says no.
    pub async fn should_retry(&self, ctx: &EvalContext, request: &RetryRequest) -> bool {
        if self.strategies.is_empty() {
            tracing::debug!(
                parent: ctx.span(),
                job_id = %request.job_id,
                attempt = request.attempt,
                "no retry strategies configured, not retrying"
            );
            return false;
        }

        for strategy in &self.strategies {
            let retry = strategy.should_retry(ctx, request).await;
            if !retry {
                tracing::debug!(
                    parent: ctx.span(),
                    strategy = strategy.name(),
                    retry,
                    job_id = %request.job_id,
                    attempt = request.attempt,
                    "retry strategy decided not to retry"
                );
                return false;
            }
            tracing::debug!(
                parent: ctx.span(),
                strategy = strategy.name(),
                retry,
                job_id = %request.job_id,
                attempt = request.attempt,
                "retry strategy decided okay to retry"
            );
        }
        true
    }
}

#[async_trait]
impl RetryStrategy for Chain {
    async fn should_retry(&self, ctx: &EvalContext, request: &RetryRequest) -> bool {
        Chain::should_retry(self, ctx, request).await
    }

    fn name(&self) -> &str {
        "chain"
    }
}

impl Extend<Box<dyn RetryStrategy>> for Chain {
    fn extend<I: IntoIterator<Item = Box<dyn RetryStrategy>>>(&mut self, iter: I) {
        self.strategies.extend(iter);
    }
}

impl std::fmt::Debug for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chain")
            .field("strategies", &self.names())
            .finish()
    }
}

#[cfg(test)]
#[path = "chain_tests.rs"]
mod tests;
