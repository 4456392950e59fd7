// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Local content store and the locality prober built on it

mod dir;
mod noop;

pub use dir::DirContentStore;
pub use noop::NoContentStore;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{ContentCall, FakeContentStore};

use async_trait::async_trait;
use bidgate_core::ProbeData;
use thiserror::Error;

/// Errors from content store lookups
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content lookup for {cid} failed: {source}")]
    Io {
        cid: String,
        #[source]
        source: std::io::Error,
    },
    #[error("content store unavailable: {0}")]
    Unavailable(String),
}

/// The node's local content store
///
/// Lookups are pure reads and safe to run concurrently.
#[async_trait]
pub trait ContentStore: Clone + Send + Sync + 'static {
    /// Whether the content behind `cid` is held locally
    async fn has_content(&self, cid: &str) -> Result<bool, ContentError>;
}

/// Answers data-locality questions about a job
#[derive(Clone)]
pub struct LocalityProber<C> {
    store: C,
}

impl<C: ContentStore> LocalityProber<C> {
    pub fn new(store: C) -> Self {
        Self { store }
    }

    pub async fn has_content(&self, cid: &str) -> Result<bool, ContentError> {
        self.store.has_content(cid).await
    }

    /// Whether every input of the job is held locally
    ///
    /// Stops at the first missing input. A job without inputs is trivially local.
    pub async fn has_all(&self, data: &ProbeData) -> Result<bool, ContentError> {
        for cid in data.cids() {
            if !self.store.has_content(cid).await? {
                tracing::debug!(cid, "input not held locally");
                return Ok(false);
            }
        }
        Ok(true)
    }
}

#[cfg(test)]
#[path = "locality_tests.rs"]
mod tests;
