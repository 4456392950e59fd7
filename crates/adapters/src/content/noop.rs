// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Empty content store for nodes without local storage.

use super::{ContentError, ContentStore};
use async_trait::async_trait;

/// Content store that holds nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoContentStore;

impl NoContentStore {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ContentStore for NoContentStore {
    async fn has_content(&self, _cid: &str) -> Result<bool, ContentError> {
        Ok(false)
    }
}
