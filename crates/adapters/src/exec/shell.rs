// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shell-backed exec probe
//!
//! The command runs under `sh -c` with an environment holding only `PATH`
//! and the probe JSON. The same JSON is written to its stdin.
//!
//! On unix the shell leads its own process group, so an interrupted probe
//! takes down every process the command started, not only the shell.
//! Exit codes 126 and 127 are the shell reporting a command it could not
//! find or run, and surface as [`ProbeError::Spawn`].

use super::ExecProbe;
use crate::ProbeError;
use async_trait::async_trait;
use bidgate_core::{EvalContext, ProbeData, PROBE_DATA_ENV};
use std::path::PathBuf;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::{Child, Command};

/// Shell exit code for a command found but not executable
const EXIT_NOT_EXECUTABLE: i32 = 126;
/// Shell exit code for a command not found
const EXIT_NOT_FOUND: i32 = 127;

/// Exec probe running commands through a shell
#[derive(Clone, Debug)]
pub struct ShellProbe {
    shell: PathBuf,
}

impl ShellProbe {
    pub fn new() -> Self {
        Self::with_shell("sh")
    }

    pub fn with_shell(shell: impl Into<PathBuf>) -> Self {
        Self {
            shell: shell.into(),
        }
    }
}

impl Default for ShellProbe {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ExecProbe for ShellProbe {
    async fn probe(
        &self,
        ctx: &EvalContext,
        command: &str,
        data: &ProbeData,
    ) -> Result<bool, ProbeError> {
        ctx.check()?;
        let payload = data.to_json()?;

        let mut cmd = Command::new(&self.shell);
        #[cfg(unix)]
        cmd.process_group(0);
        let mut child = cmd
            .arg("-c")
            .arg(command)
            .env_clear()
            .env("PATH", std::env::var_os("PATH").unwrap_or_default())
            .env(PROBE_DATA_ENV, &payload)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| ProbeError::Spawn(format!("{}: {}", self.shell.display(), e)))?;
        // Declared after `child` so a dropped probe kills the group first
        let group = ProcessGroup::of(&child);

        let stdin = child.stdin.take();
        let feed = async move {
            if let Some(mut stdin) = stdin {
                // Commands are free to exit without reading stdin
                if let Err(e) = stdin.write_all(payload.as_bytes()).await {
                    tracing::trace!(error = %e, "probe command closed stdin early");
                }
            }
        };

        let outcome = ctx
            .run(async {
                let ((), status) = tokio::join!(feed, child.wait());
                status
            })
            .await;

        let status = match outcome {
            Ok(Ok(status)) => {
                group.disarm();
                status
            }
            Ok(Err(e)) => {
                drop(group);
                return Err(e.into());
            }
            Err(why) => {
                drop(group);
                if let Err(e) = child.kill().await {
                    tracing::warn!(parent: ctx.span(), error = %e, "failed to kill probe command");
                }
                return Err(why.into());
            }
        };

        // No exit code means the command died from a signal: a fail, not an error
        tracing::debug!(
            parent: ctx.span(),
            code = ?status.code(),
            job_id = %data.job_id,
            "exec probe exited"
        );
        match status.code() {
            Some(code @ (EXIT_NOT_EXECUTABLE | EXIT_NOT_FOUND)) => {
                Err(ProbeError::Spawn(format!(
                    "{}: command not found or not executable (exit {})",
                    command, code
                )))
            }
            _ => Ok(status.success()),
        }
    }
}

/// Kills a probe command's process group on drop unless disarmed
///
/// Disarm once the leader is reaped: its pid may then be reused.
struct ProcessGroup {
    #[cfg(unix)]
    pgid: Option<nix::unistd::Pid>,
}

impl ProcessGroup {
    #[cfg(unix)]
    fn of(child: &Child) -> Self {
        let pgid = child
            .id()
            .and_then(|id| i32::try_from(id).ok())
            .map(nix::unistd::Pid::from_raw);
        Self { pgid }
    }

    #[cfg(not(unix))]
    fn of(_child: &Child) -> Self {
        Self {}
    }

    fn disarm(mut self) {
        #[cfg(unix)]
        {
            self.pgid = None;
        }
    }
}

impl Drop for ProcessGroup {
    fn drop(&mut self) {
        #[cfg(unix)]
        if let Some(pgid) = self.pgid.take() {
            use nix::errno::Errno;
            use nix::sys::signal::{killpg, Signal};

            match killpg(pgid, Signal::SIGKILL) {
                Ok(()) | Err(Errno::ESRCH) => {}
                Err(e) => tracing::warn!(
                    error = %e,
                    pgid = pgid.as_raw(),
                    "failed to kill probe process group"
                ),
            }
        }
    }
}

#[cfg(test)]
#[path = "shell_tests.rs"]
mod tests;
