//! Retry chain specs

use crate::prelude::*;

fn retry(node: &Node, config: &str, kind: &str, attempt: &str) -> Outcome {
    let config = node.config(config);
    node.bidgate()
        .args(&[
            "retry",
            "--kind",
            kind,
            "--attempt",
            attempt,
            "--job-id",
            "job-1",
            "--config",
            config.to_str().unwrap(),
        ])
        .passes()
}

#[test]
fn no_retry_settings_never_retries() {
    let node = Node::empty();
    retry(&node, "", "node_unreachable", "1").stdout_eq("no-retry");
}

#[test]
fn empty_retry_section_never_retries() {
    let node = Node::empty();
    retry(&node, "[retry]\n", "node_unreachable", "1").stdout_eq("no-retry");
}

#[test]
fn max_attempts_allows_early_retries() {
    let node = Node::empty();
    retry(&node, "[retry]\nmax_attempts = 3\n", "execution_failed", "2").stdout_eq("retry");
}

#[test]
fn max_attempts_stops_at_the_limit() {
    let node = Node::empty();
    retry(&node, "[retry]\nmax_attempts = 3\n", "execution_failed", "3").stdout_eq("no-retry");
}

#[test]
fn listed_failure_kind_is_retried() {
    let node = Node::empty();
    retry(
        &node,
        "[retry]\nkinds = [\"node_unreachable\", \"timeout\"]\n",
        "timeout",
        "5",
    )
    .stdout_eq("retry");
}

#[test]
fn unlisted_failure_kind_is_not_retried() {
    let node = Node::empty();
    retry(
        &node,
        "[retry]\nmax_attempts = 10\nkinds = [\"node_unreachable\"]\n",
        "verification_failed",
        "1",
    )
    .stdout_eq("no-retry");
}

#[test]
fn json_output_lists_consulted_strategies() {
    let node = Node::empty();
    let config = node.config("[retry]\nmax_attempts = 2\nkinds = [\"timeout\"]\n");
    node.bidgate()
        .args(&[
            "retry",
            "--kind",
            "timeout",
            "--attempt",
            "1",
            "--job-id",
            "job-1",
            "--config",
            config.to_str().unwrap(),
            "--format",
            "json",
        ])
        .passes()
        .stdout_eq(r#"{"job_id":"job-1","kind":"timeout","attempt":1,"retry":true,"strategies":["context","max_attempts","failure_kind"]}"#);
}

#[test]
fn decisions_are_logged_when_enabled() {
    let node = Node::empty();
    let config = node.config("[retry]\nmax_attempts = 1\n");
    node.bidgate()
        .env("BIDGATE_LOG", "debug")
        .args(&[
            "retry",
            "--kind",
            "other",
            "--attempt",
            "1",
            "--config",
            config.to_str().unwrap(),
        ])
        .passes()
        .stdout_eq("no-retry")
        .stderr_has("retry strategy decided not to retry")
        .stderr_has("max_attempts");
}
