// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! bidgate decision engines
//!
//! - [`JobSelector`]: should this node bid on a job offer
//! - [`Chain`]: should a failed operation be retried
//!
//! Both fold their criteria in configured order with AND-and-veto
//! semantics: the first "no" ends the evaluation.

mod error;
pub mod retry;
mod selector;

pub use error::SelectError;
pub use retry::{
    Chain, ContextStrategy, FailureKindStrategy, FixedStrategy, MaxAttemptsStrategy,
    RetryStrategy,
};
pub use selector::JobSelector;
