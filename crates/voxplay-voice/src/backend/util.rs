//! Shared utilities for engine backends.

use std::path::{Path, PathBuf};
use std::process::{Output, Stdio};

use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use voxplay_core::EngineError;

/// Resolve an engine executable.
///
/// Paths with a directory component must exist on disk; bare names are
/// looked up on `PATH`.
pub(super) fn resolve_binary(program: &Path) -> Result<PathBuf, EngineError> {
    if program.components().count() > 1 {
        return if program.exists() {
            Ok(program.to_path_buf())
        } else {
            Err(EngineError::NotReady(format!(
                "engine binary not found: {}",
                program.display()
            )))
        };
    }
    which::which(program).map_err(|e| {
        EngineError::NotReady(format!("{} not found on PATH: {e}", program.display()))
    })
}

/// Run `cmd` with `input` on stdin and collect its output.
///
/// Stdin is fed from a separate task so a chatty child cannot deadlock on a
/// full stdout pipe while we are still writing.
pub(super) async fn run_with_stdin(mut cmd: Command, input: String) -> Result<Output, EngineError> {
    cmd.stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let mut child = cmd
        .spawn()
        .map_err(|e| EngineError::Failed(format!("failed to start engine: {e}")))?;

    if let Some(mut stdin) = child.stdin.take() {
        tokio::spawn(async move {
            if let Err(e) = stdin.write_all(input.as_bytes()).await {
                tracing::debug!(error = %e, "engine closed stdin early");
            }
        });
    }

    child
        .wait_with_output()
        .await
        .map_err(|e| EngineError::Failed(format!("engine did not complete: {e}")))
}

/// Best human-readable reason for a failed engine run.
pub(super) fn failure_message(engine: &str, output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stderr = stderr.trim();
    if stderr.is_empty() {
        format!("{engine} exited with {}", output.status)
    } else {
        stderr.to_string()
    }
}
