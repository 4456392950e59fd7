// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Directory-backed content store

use super::{ContentError, ContentStore};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Content store that holds a CID when `<root>/<cid>` exists
#[derive(Clone, Debug)]
pub struct DirContentStore {
    root: PathBuf,
}

impl DirContentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// A CID must name a single entry directly under the root
fn is_plain_name(cid: &str) -> bool {
    !cid.is_empty() && cid != "." && cid != ".." && !cid.contains(['/', '\\'])
}

#[async_trait]
impl ContentStore for DirContentStore {
    async fn has_content(&self, cid: &str) -> Result<bool, ContentError> {
        if !is_plain_name(cid) {
            tracing::debug!(cid, "not a valid content identifier");
            return Ok(false);
        }

        tokio::fs::try_exists(self.root.join(cid))
            .await
            .map_err(|source| ContentError::Io {
                cid: cid.to_string(),
                source,
            })
    }
}

#[cfg(test)]
#[path = "dir_tests.rs"]
mod tests;
