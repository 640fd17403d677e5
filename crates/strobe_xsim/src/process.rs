//! Spawning toolchain processes and the elaboration gate.

use std::io::{BufRead, BufReader};
use std::path::Path;
use std::process::Stdio;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::thread;

use strobe_backend::CommandLine;

/// Optional mutual exclusion around elaboration.
///
/// xelab can exhaust memory when several instances run at once, so the
/// adapter may serialize them: at most one elaboration holds the gate across
/// all requests sharing the adapter instance. Acquisition blocks with no
/// timeout; a hung elaboration blocks the rest, which is the accepted cost
/// of the serialization policy. Compile and simulate spawns never touch the
/// gate. The gate is an owned field of the adapter, not process-global
/// state, so independent adapters never contend.
#[derive(Debug, Default)]
pub struct ElabGate {
    inner: Option<Mutex<()>>,
}

impl ElabGate {
    /// Creates a gate; `serialize` decides once whether it does anything.
    pub fn new(serialize: bool) -> Self {
        Self {
            inner: serialize.then(|| Mutex::new(())),
        }
    }

    /// Acquires the gate, blocking until it is free.
    ///
    /// Returns `None` immediately when serialization is disabled. The guard
    /// releases the gate when dropped, success or failure alike.
    pub fn acquire(&self) -> Option<MutexGuard<'_, ()>> {
        self.inner
            .as_ref()
            .map(|mutex| mutex.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

/// Spawns a toolchain invocation and reports whether it exited zero.
///
/// The child runs with its working directory set to `cwd`. Its stdout and
/// stderr are streamed line by line through the log facade as they arrive
/// rather than buffered whole. Nothing here returns an error: a spawn
/// failure, an I/O failure, or a non-zero exit all classify the run as
/// failed, and the boolean is the only thing that crosses the adapter
/// boundary.
pub fn run_command(cmd: &CommandLine, cwd: &Path) -> bool {
    log::debug!("running in {}: {cmd}", cwd.display());

    let mut command = cmd.to_command();
    command
        .current_dir(cwd)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let mut child = match command.spawn() {
        Ok(child) => child,
        Err(err) => {
            log::error!("failed to spawn {}: {err}", cmd.program());
            return false;
        }
    };

    let stderr_thread = child.stderr.take().map(|stderr| {
        thread::spawn(move || {
            for line in BufReader::new(stderr).lines().map_while(Result::ok) {
                log::info!(target: "strobe_xsim::tool", "{line}");
            }
        })
    });

    if let Some(stdout) = child.stdout.take() {
        for line in BufReader::new(stdout).lines().map_while(Result::ok) {
            log::info!(target: "strobe_xsim::tool", "{line}");
        }
    }

    if let Some(handle) = stderr_thread {
        let _ = handle.join();
    }

    match child.wait() {
        Ok(status) => status.success(),
        Err(err) => {
            log::error!("failed to wait for {}: {err}", cmd.program());
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    #[test]
    fn disabled_gate_yields_no_guard() {
        let gate = ElabGate::new(false);
        assert!(gate.acquire().is_none());
    }

    #[test]
    fn enabled_gate_yields_guard() {
        let gate = ElabGate::new(true);
        let guard = gate.acquire();
        assert!(guard.is_some());
        drop(guard);
        assert!(gate.acquire().is_some());
    }

    #[test]
    fn enabled_gate_serializes_critical_sections() {
        let gate = Arc::new(ElabGate::new(true));
        let active = Arc::new(AtomicUsize::new(0));
        let overlapped = Arc::new(AtomicBool::new(false));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let gate = Arc::clone(&gate);
                let active = Arc::clone(&active);
                let overlapped = Arc::clone(&overlapped);
                thread::spawn(move || {
                    let _guard = gate.acquire();
                    if active.fetch_add(1, Ordering::SeqCst) > 0 {
                        overlapped.store(true, Ordering::SeqCst);
                    }
                    thread::sleep(Duration::from_millis(20));
                    active.fetch_sub(1, Ordering::SeqCst);
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert!(!overlapped.load(Ordering::SeqCst));
    }

    #[cfg(unix)]
    #[test]
    fn zero_exit_is_success() {
        let dir = tempfile::tempdir().unwrap();
        let cmd = CommandLine::Tokens(vec!["true".to_string()]);
        assert!(run_command(&cmd, dir.path()));
    }

    #[cfg(unix)]
    #[test]
    fn nonzero_exit_is_failure() {
        let dir = tempfile::tempdir().unwrap();
        let cmd = CommandLine::Tokens(vec!["false".to_string()]);
        assert!(!run_command(&cmd, dir.path()));
    }

    #[test]
    fn unresolvable_program_is_failure_not_panic() {
        let dir = tempfile::tempdir().unwrap();
        let cmd = CommandLine::Tokens(vec!["strobe-no-such-tool".to_string()]);
        assert!(!run_command(&cmd, dir.path()));
    }

    #[cfg(unix)]
    #[test]
    fn child_runs_in_requested_working_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("marker"), "").unwrap();
        let cmd = CommandLine::Tokens(vec![
            "sh".to_string(),
            "-c".to_string(),
            "test -f marker".to_string(),
        ]);
        assert!(run_command(&cmd, dir.path()));
    }
}
