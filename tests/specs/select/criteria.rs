//! Job selection criteria specs
//!
//! Each criterion on its own, then in combination.

use crate::prelude::*;

fn select(node: &Node, config: &str) -> Outcome {
    let job = node.file("job.json", HELLO_JOB);
    let config = node.config(config);
    node.bidgate()
        .args(&[
            "select",
            "--job",
            job.to_str().unwrap(),
            "--config",
            config.to_str().unwrap(),
        ])
        .passes()
}

#[test]
fn empty_policy_accepts() {
    let node = Node::empty();
    select(&node, "").stdout_eq("accept");
}

#[test]
fn job_with_inputs_passes_stateless_check() {
    let node = Node::empty();
    select(&node, "[job_selection]\nreject_stateless_jobs = true\n").stdout_eq("accept");
}

#[test]
fn local_data_present_accepts() {
    let node = Node::empty();
    node.file("content/QmHelloWorld", "hello world");
    select(
        &node,
        "content_dir = \"content\"\n[job_selection]\nlocality = \"local\"\n",
    )
    .stdout_eq("accept");
}

#[test]
fn local_data_missing_rejects() {
    let node = Node::empty();
    node.file("content/QmSomethingElse", "other");
    select(
        &node,
        "content_dir = \"content\"\n[job_selection]\nlocality = \"local\"\n",
    )
    .stdout_eq("reject (locality)");
}

#[test]
fn local_without_content_dir_holds_nothing() {
    let node = Node::empty();
    select(&node, "[job_selection]\nlocality = \"local\"\n").stdout_eq("reject (locality)");
}

#[test]
fn anywhere_ignores_content() {
    let node = Node::empty();
    select(&node, "[job_selection]\nlocality = \"anywhere\"\n").stdout_eq("accept");
}

#[test]
fn exec_probe_success_accepts() {
    let node = Node::empty();
    select(&node, "[job_selection]\nprobe_exec = \"exit 0\"\n").stdout_eq("accept");
}

#[test]
fn exec_probe_failure_rejects() {
    let node = Node::empty();
    select(&node, "[job_selection]\nprobe_exec = \"exit 1\"\n").stdout_eq("reject (exec_probe)");
}

#[test]
fn exec_probe_sees_job_on_stdin() {
    let node = Node::empty();
    select(
        &node,
        "[job_selection]\nprobe_exec = \"grep -q QmHelloWorld\"\n",
    )
    .stdout_eq("accept");
}

#[test]
fn node_id_from_config_reaches_probes() {
    let node = Node::empty();
    select(
        &node,
        "node_id = \"node-7\"\n[job_selection]\nprobe_exec = 'case \"$BIDGATE_JOB_SELECTION_PROBE_DATA\" in *node-7*) exit 0;; *) exit 1;; esac'\n",
    )
    .stdout_eq("accept");
}

#[test]
fn disabled_engine_rejects() {
    let node = Node::empty();
    let job = node.file(
        "job.json",
        r#"{ "job_id": "job-wasm", "spec": { "engine": "WASM" } }"#,
    );
    let config = node.config("[job_selection.disabled_features]\nengines = [\"wasm\"]\n");

    node.bidgate()
        .args(&[
            "select",
            "--job",
            job.to_str().unwrap(),
            "--config",
            config.to_str().unwrap(),
        ])
        .passes()
        .stdout_eq("reject (disabled_features)");
}

#[test]
fn disabled_feature_the_job_does_not_use_accepts() {
    let node = Node::empty();
    select(
        &node,
        "[job_selection.disabled_features]\nengines = [\"wasm\"]\npublishers = [\"ipfs\"]\n",
    )
    .stdout_eq("accept");
}

#[test]
fn missing_exec_binary_is_an_error() {
    let node = Node::empty();
    let job = node.file("job.json", HELLO_JOB);
    let config = node.config("[job_selection]\nprobe_exec = \"/no/such/binary\"\n");

    node.bidgate()
        .args(&[
            "select",
            "--job",
            job.to_str().unwrap(),
            "--config",
            config.to_str().unwrap(),
        ])
        .fails()
        .stderr_has("not found or not executable");
}

#[test]
fn first_failing_criterion_is_reported() {
    let node = Node::empty();
    let marker = node.path().join("exec-ran");
    let config = format!(
        "content_dir = \"content\"\n[job_selection]\nlocality = \"local\"\nprobe_exec = \"touch {}\"\n",
        marker.display()
    );
    select(&node, &config).stdout_eq("reject (locality)");
    assert!(!marker.exists(), "exec probe ran after locality rejected");
}

#[test]
fn unreachable_http_probe_is_an_error() {
    let node = Node::empty();
    let job = node.file("job.json", HELLO_JOB);
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let config = node.config(&format!(
        "[job_selection]\nprobe_http = \"http://127.0.0.1:{}/select\"\n",
        port
    ));

    node.bidgate()
        .args(&[
            "select",
            "--job",
            job.to_str().unwrap(),
            "--config",
            config.to_str().unwrap(),
        ])
        .fails()
        .stderr_has("could not evaluate job job-hello");
}

#[test]
fn slow_probe_hits_timeout() {
    let node = Node::empty();
    let job = node.file("job.json", HELLO_JOB);
    let config = node.config("[job_selection]\nprobe_exec = \"sleep 30\"\n");

    node.bidgate()
        .args(&[
            "select",
            "--job",
            job.to_str().unwrap(),
            "--config",
            config.to_str().unwrap(),
            "--timeout",
            "200ms",
        ])
        .fails()
        .stderr_has("deadline");
}
