//! Help and usage specs

use crate::prelude::*;

#[test]
fn help_lists_subcommands() {
    Node::empty()
        .bidgate()
        .args(&["--help"])
        .passes()
        .stdout_has("select")
        .stdout_has("retry");
}

#[test]
fn missing_subcommand_fails() {
    Node::empty().bidgate().fails().stderr_has("Usage");
}

#[test]
fn select_requires_a_job() {
    Node::empty()
        .bidgate()
        .args(&["select"])
        .fails()
        .stderr_has("--job");
}

#[test]
fn retry_rejects_unknown_failure_kind() {
    Node::empty()
        .bidgate()
        .args(&["retry", "--kind", "meteor_strike", "--attempt", "1"])
        .fails()
        .stderr_has("unknown failure kind: meteor_strike");
}

#[test]
fn select_rejects_malformed_timeout() {
    let node = Node::empty();
    let job = node.file("job.json", STATELESS_JOB);
    node.bidgate()
        .args(&["select", "--job", job.to_str().unwrap(), "--timeout", "soon"])
        .fails()
        .stderr_has("--timeout");
}
