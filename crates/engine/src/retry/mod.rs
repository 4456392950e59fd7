// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Retry decisions
//!
//! A [`Chain`] folds any number of [`RetryStrategy`] verdicts into one.
//! Strategies answer only yes or no: one that cannot decide must pick an
//! answer rather than fail the chain.

mod chain;
mod strategies;

pub use chain::Chain;
pub use strategies::{ContextStrategy, FailureKindStrategy, FixedStrategy, MaxAttemptsStrategy};

use async_trait::async_trait;
use bidgate_core::{EvalContext, RetryRequest};

/// One pluggable retry heuristic
#[async_trait]
pub trait RetryStrategy: Send + Sync {
    async fn should_retry(&self, ctx: &EvalContext, request: &RetryRequest) -> bool;

    /// Name used in decision logs
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Lets one strategy instance sit in several chains
#[async_trait]
impl<S: RetryStrategy + ?Sized> RetryStrategy for std::sync::Arc<S> {
    async fn should_retry(&self, ctx: &EvalContext, request: &RetryRequest) -> bool {
        (**self).should_retry(ctx, request).await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
