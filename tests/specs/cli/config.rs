//! Configuration loading specs

use crate::prelude::*;

#[test]
fn explicit_config_must_exist() {
    let node = Node::empty();
    let job = node.file("job.json", STATELESS_JOB);
    node.bidgate()
        .args(&[
            "select",
            "--job",
            job.to_str().unwrap(),
            "--config",
            "missing.toml",
        ])
        .fails()
        .stderr_has("failed to read missing.toml");
}

#[test]
fn malformed_config_is_reported() {
    let node = Node::empty();
    let job = node.file("job.json", STATELESS_JOB);
    let config = node.config("[job_selection]\nlocality = \"everywhere\"\n");
    node.bidgate()
        .args(&[
            "select",
            "--job",
            job.to_str().unwrap(),
            "--config",
            config.to_str().unwrap(),
        ])
        .fails()
        .stderr_has("invalid config");
}

#[test]
fn per_user_config_is_used_when_present() {
    let node = Node::empty();
    let job = node.file("job.json", STATELESS_JOB);
    node.file(
        "xdg/bidgate/node.toml",
        "[job_selection]\nreject_stateless_jobs = true\n",
    );

    node.bidgate()
        .args(&["select", "--job", job.to_str().unwrap()])
        .passes()
        .stdout_eq("reject (stateless)");
}

#[test]
fn no_config_anywhere_means_defaults() {
    let node = Node::empty();
    let job = node.file("job.json", STATELESS_JOB);
    node.bidgate()
        .args(&["select", "--job", job.to_str().unwrap()])
        .passes()
        .stdout_eq("accept");
}

#[test]
fn logs_go_to_stderr_when_enabled() {
    let node = Node::empty();
    let job = node.file("job.json", STATELESS_JOB);
    let config = node.config("[job_selection]\nreject_stateless_jobs = true\n");

    node.bidgate()
        .env("BIDGATE_LOG", "debug")
        .args(&[
            "select",
            "--job",
            job.to_str().unwrap(),
            "--config",
            config.to_str().unwrap(),
        ])
        .passes()
        .stdout_eq("reject (stateless)")
        .stderr_has("job rejected")
        .stderr_has("criterion=\"stateless\"");
}

#[test]
fn logs_are_quiet_by_default() {
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
        ])
        .passes()
        .stderr_lacks("job rejected");
}
