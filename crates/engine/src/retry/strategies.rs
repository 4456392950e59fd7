// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Stock retry strategies

use super::RetryStrategy;
use async_trait::async_trait;
use bidgate_core::{EvalContext, FailureKind, RetryRequest};
use std::collections::HashSet;

/// Always gives the same answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedStrategy {
    retry: bool,
}

impl FixedStrategy {
    pub fn new(retry: bool) -> Self {
        Self { retry }
    }

    pub fn always() -> Self {
        Self::new(true)
    }

    pub fn never() -> Self {
        Self::new(false)
    }
}

#[async_trait]
impl RetryStrategy for FixedStrategy {
    async fn should_retry(&self, _ctx: &EvalContext, _request: &RetryRequest) -> bool {
        self.retry
    }

    fn name(&self) -> &str {
        "fixed"
    }
}

/// Retries while fewer than `max_attempts` attempts have been made
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxAttemptsStrategy {
    max_attempts: u32,
}

impl MaxAttemptsStrategy {
    pub fn new(max_attempts: u32) -> Self {
        Self { max_attempts }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }
}

#[async_trait]
impl RetryStrategy for MaxAttemptsStrategy {
    async fn should_retry(&self, _ctx: &EvalContext, request: &RetryRequest) -> bool {
        request.attempt < self.max_attempts
    }

    fn name(&self) -> &str {
        "max_attempts"
    }
}

/// Retries only the listed kinds of failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureKindStrategy {
    kinds: HashSet<FailureKind>,
}

impl FailureKindStrategy {
    pub fn new(kinds: impl IntoIterator<Item = FailureKind>) -> Self {
        Self {
            kinds: kinds.into_iter().collect(),
        }
    }
}

#[async_trait]
impl RetryStrategy for FailureKindStrategy {
    async fn should_retry(&self, _ctx: &EvalContext, request: &RetryRequest) -> bool {
        self.kinds.contains(&request.kind)
    }

    fn name(&self) -> &str {
        "failure_kind"
    }
}

/// Refuses once the evaluation context is cancelled or past its deadline
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContextStrategy;

#[async_trait]
impl RetryStrategy for ContextStrategy {
    async fn should_retry(&self, ctx: &EvalContext, _request: &RetryRequest) -> bool {
        ctx.check().is_ok()
    }

    fn name(&self) -> &str {
        "context"
    }
}

#[cfg(test)]
#[path = "strategies_tests.rs"]
mod tests;
