//! Graceful termination of a `tokio::process::Child` with SIGTERM → SIGKILL escalation.

use std::io;
use std::time::Duration;

use tokio::process::Child;
use tracing::debug;

#[cfg(unix)]
use nix::errno::Errno;
#[cfg(unix)]
use nix::sys::signal::{self, Signal};
#[cfg(unix)]
use nix::unistd::Pid;
#[cfg(unix)]
use tokio::time::timeout;

/// How a child process ended up stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationOutcome {
    /// The process had already exited before any signal was sent.
    AlreadyExited,
    /// The process exited within the grace period after SIGTERM.
    Graceful,
    /// The grace period expired and the process was killed.
    Forced,
}

/// Stop a child process, escalating to a forceful kill after `grace`.
///
/// # Strategy
/// 1. Reap the child if it has already exited
/// 2. Send SIGTERM and wait up to `grace` for it to exit
/// 3. If still running, or if any graceful step failed, send SIGKILL and reap
///
/// Only a failed SIGKILL is reported as an error. On non-Unix platforms the
/// child is killed immediately.
pub async fn terminate_child(
    child: &mut Child,
    grace: Duration,
) -> io::Result<TerminationOutcome> {
    #[cfg(unix)]
    {
        terminate_with(child, grace, send_sigterm).await
    }

    #[cfg(not(unix))]
    {
        let _ = grace;
        match child.try_wait() {
            Ok(Some(_)) => return Ok(TerminationOutcome::AlreadyExited),
            Ok(None) => {}
            Err(e) => debug!(error = %e, "Could not poll child, killing it"),
        }
        force_kill(child).await
    }
}

#[cfg(unix)]
fn send_sigterm(pid: Pid) -> nix::Result<()> {
    signal::kill(pid, Signal::SIGTERM)
}

#[cfg(unix)]
async fn terminate_with<F>(
    child: &mut Child,
    grace: Duration,
    send_term: F,
) -> io::Result<TerminationOutcome>
where
    F: FnOnce(Pid) -> nix::Result<()>,
{
    match child.try_wait() {
        Ok(Some(_)) => return Ok(TerminationOutcome::AlreadyExited),
        Ok(None) => {}
        Err(e) => {
            debug!(error = %e, "Could not poll child, killing it");
            return force_kill(child).await;
        }
    }

    // No PID means tokio already reaped it
    let Some(raw) = child.id() else {
        return Ok(TerminationOutcome::AlreadyExited);
    };
    let pid = match i32::try_from(raw) {
        Ok(pid) => Pid::from_raw(pid),
        Err(e) => {
            debug!(pid = raw, error = %e, "PID out of range, killing child");
            return force_kill(child).await;
        }
    };

    match send_term(pid) {
        Ok(()) => {}
        Err(Errno::ESRCH) => {
            if let Err(e) = child.wait().await {
                debug!(%pid, error = %e, "Reaping exited child failed, killing it");
                return force_kill(child).await;
            }
            return Ok(TerminationOutcome::AlreadyExited);
        }
        Err(e) => {
            debug!(%pid, error = %e, "SIGTERM failed, escalating to SIGKILL");
            return force_kill(child).await;
        }
    }

    match timeout(grace, child.wait()).await {
        Ok(Ok(_)) => Ok(TerminationOutcome::Graceful),
        Ok(Err(e)) => {
            debug!(%pid, error = %e, "Waiting after SIGTERM failed, escalating to SIGKILL");
            force_kill(child).await
        }
        Err(_) => force_kill(child).await,
    }
}

async fn force_kill(child: &mut Child) -> io::Result<TerminationOutcome> {
    // Child::kill sends SIGKILL and reaps
    child.kill().await?;
    Ok(TerminationOutcome::Forced)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::process::Command;
    use tokio::time::sleep;

    #[tokio::test]
    #[cfg(unix)]
    async fn sigterm_stops_sleep() {
        let mut child = Command::new("sleep")
            .arg("30")
            .spawn()
            .expect("failed to spawn sleep");

        let outcome = terminate_child(&mut child, Duration::from_secs(5)).await;
        assert_eq!(outcome.unwrap(), TerminationOutcome::Graceful);
    }

    #[tokio::test]
    #[cfg(unix)]
    async fn ignored_sigterm_escalates_to_kill() {
        let mut child = Command::new("sh")
            .arg("-c")
            .arg("trap '' TERM; exec sleep 30")
            .spawn()
            .expect("failed to spawn sh");

        // Let the shell install the trap before signalling
        sleep(Duration::from_millis(300)).await;

        let outcome = terminate_child(&mut child, Duration::from_millis(200)).await;
        assert_eq!(outcome.unwrap(), TerminationOutcome::Forced);
    }

    #[tokio::test]
    #[cfg(unix)]
    async fn failed_sigterm_falls_back_to_kill() {
        let mut child = Command::new("sleep")
            .arg("30")
            .spawn()
            .expect("failed to spawn sleep");

        let outcome =
            terminate_with(&mut child, Duration::from_secs(30), |_| Err(Errno::EPERM)).await;
        assert_eq!(outcome.unwrap(), TerminationOutcome::Forced);
        assert!(child.try_wait().unwrap().is_some());
    }

    #[tokio::test]
    #[cfg(unix)]
    async fn vanished_pid_is_already_exited() {
        let mut child = Command::new("sleep")
            .arg("30")
            .spawn()
            .expect("failed to spawn sleep");
        child.start_kill().unwrap();

        let outcome =
            terminate_with(&mut child, Duration::from_secs(1), |_| Err(Errno::ESRCH)).await;
        assert_eq!(outcome.unwrap(), TerminationOutcome::AlreadyExited);
    }

    #[tokio::test]
    async fn already_exited_is_reported() {
        let mut child = Command::new("echo")
            .arg("test")
            .spawn()
            .expect("failed to spawn echo");

        // Give it time to exit
        sleep(Duration::from_millis(100)).await;

        let outcome = terminate_child(&mut child, Duration::from_secs(1)).await;
        assert_eq!(outcome.unwrap(), TerminationOutcome::AlreadyExited);
    }
}
