//! Job input and output format specs

use crate::prelude::*;

#[test]
fn job_read_from_stdin() {
    let node = Node::empty();
    let config = node.config("[job_selection]\nreject_stateless_jobs = true\n");

    node.bidgate()
        .args(&["select", "--job", "-", "--config", config.to_str().unwrap()])
        .stdin(STATELESS_JOB)
        .passes()
        .stdout_eq("reject (stateless)");
}

#[test]
fn json_output_reports_verdict() {
    let node = Node::empty();
    let job = node.file("job.json", STATELESS_JOB);
    let config = node.config("[job_selection]\nreject_stateless_jobs = true\n");

    node.bidgate()
        .args(&[
            "select",
            "--job",
            job.to_str().unwrap(),
            "--config",
            config.to_str().unwrap(),
            "--format",
            "json",
        ])
        .passes()
        .stdout_eq(r#"{"job_id":"job-bare","accepted":false,"verdict":{"rejected":"stateless"}}"#);
}

#[test]
fn json_output_for_acceptance() {
    let node = Node::empty();
    let job = node.file("job.json", HELLO_JOB);

    node.bidgate()
        .args(&["select", "--job", job.to_str().unwrap(), "--format", "json"])
        .passes()
        .stdout_eq(r#"{"job_id":"job-hello","accepted":true,"verdict":"accepted"}"#);
}

#[test]
fn missing_job_file_fails() {
    Node::empty()
        .bidgate()
        .args(&["select", "--job", "nope.json"])
        .fails()
        .stderr_has("failed to read job nope.json");
}

#[test]
fn invalid_job_json_fails() {
    let node = Node::empty();
    let job = node.file("job.json", "{ not json");
    node.bidgate()
        .args(&["select", "--job", job.to_str().unwrap()])
        .fails()
        .stderr_has("job is not valid probe JSON");
}

#[test]
fn job_without_id_still_evaluates() {
    let node = Node::empty();
    let job = node.file("job.json", "{}");
    node.bidgate()
        .args(&["select", "--job", job.to_str().unwrap()])
        .passes()
        .stdout_eq("accept");
}
