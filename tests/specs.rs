//! Behavioral specifications for the bidgate CLI.
//!
//! These tests are black-box: they invoke the CLI binary and verify
//! stdout, stderr, and exit codes.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

#[path = "specs/prelude.rs"]
mod prelude;

// cli/
#[path = "specs/cli/config.rs"]
mod cli_config;
#[path = "specs/cli/help.rs"]
mod cli_help;

// select/
#[path = "specs/select/criteria.rs"]
mod select_criteria;
#[path = "specs/select/input.rs"]
mod select_input;

// retry/
#[path = "specs/retry/chain.rs"]
mod retry_chain;
