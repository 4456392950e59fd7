// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! bidgate-core: data model for job admission and retry decisions
//!
//! This crate provides:
//! - The node-local job selection policy and the criteria it configures
//! - Node features an operator has disabled
//! - Probe data handed to every admission probe
//! - Retry requests describing one retryable failure
//! - The evaluation context (cancellation, deadline, decision span)
//! - TOML node configuration

pub mod config;
pub mod context;
pub mod criterion;
pub mod features;
pub mod id;
pub mod policy;
pub mod probe;
pub mod retry;

pub use config::{ConfigError, NodeConfig, RetryConfig};
pub use context::{EvalContext, Interrupted};
pub use criterion::{Criterion, Verdict};
pub use features::{DisabledFeature, DisabledFeatures, FeatureKind};
pub use id::JobId;
pub use policy::{JobSelectionPolicy, Locality};
pub use probe::{ProbeData, StorageInput, PROBE_DATA_ENV};
pub use retry::{FailureKind, RetryRequest, UnknownFailureKind};
