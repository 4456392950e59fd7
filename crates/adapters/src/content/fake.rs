// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake content store for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{ContentError, ContentStore};
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// Recorded content lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentCall {
    pub cid: String,
}

/// In-memory content store for testing
#[derive(Clone, Default)]
pub struct FakeContentStore {
    contents: Arc<Mutex<HashSet<String>>>,
    unavailable: Arc<Mutex<Option<String>>>,
    calls: Arc<Mutex<Vec<ContentCall>>>,
}

impl FakeContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding the given CIDs
    pub fn with_content<I, S>(cids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let store = Self::new();
        for cid in cids {
            store.add(cid);
        }
        store
    }

    pub fn add(&self, cid: impl Into<String>) {
        self.contents
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(cid.into());
    }

    /// Make every subsequent lookup fail
    pub fn set_unavailable(&self, reason: impl Into<String>) {
        *self.unavailable.lock().unwrap_or_else(|e| e.into_inner()) = Some(reason.into());
    }

    /// Get all recorded lookups
    pub fn calls(&self) -> Vec<ContentCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait]
impl ContentStore for FakeContentStore {
    async fn has_content(&self, cid: &str) -> Result<bool, ContentError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(ContentCall {
                cid: cid.to_string(),
            });

        if let Some(reason) = self
            .unavailable
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
        {
            return Err(ContentError::Unavailable(reason));
        }

        Ok(self
            .contents
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .contains(cid))
    }
}
