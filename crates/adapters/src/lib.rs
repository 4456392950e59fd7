// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Probe adapters and the collaborators they talk to

pub mod content;
pub mod error;
pub mod exec;
pub mod http;
pub mod traced;

#[cfg(any(test, feature = "test-support"))]
mod outcome;

pub use content::{ContentError, ContentStore, DirContentStore, LocalityProber, NoContentStore};
pub use error::ProbeError;
pub use exec::{ExecProbe, ShellProbe};
pub use http::{HttpProbe, ReqwestProbe};
pub use traced::{TracedContentStore, TracedExecProbe, TracedHttpProbe};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use content::{ContentCall, FakeContentStore};
#[cfg(any(test, feature = "test-support"))]
pub use exec::{ExecProbeCall, FakeExecProbe};
#[cfg(any(test, feature = "test-support"))]
pub use http::{FakeHttpProbe, HttpProbeCall};
#[cfg(any(test, feature = "test-support"))]
pub use outcome::ProbeOutcome;
