//! Launcher: runs the expanded command with inherited streams.

use std::process::{Command, ExitStatus, Stdio};

use thiserror::Error;

use crate::args::SpawnParams;
use crate::exit_codes;

/// Errors from starting the child process.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("failed to launch '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

/// Process descriptor for `params` with stdin, stdout and stderr inherited.
pub fn command(params: &SpawnParams) -> Command {
    let mut cmd = Command::new(&params.command);
    cmd.args(&params.args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());
    cmd
}

/// Run the program to completion. No timeout.
///
/// Terminal interrupts reach the child through the process group; the
/// launcher catches them while waiting so it can report the child's status.
pub fn run(params: &SpawnParams) -> Result<ExitStatus, LaunchError> {
    tracing::info!(command = %params.command_line(), "Launching");

    let mut child = command(params).spawn().map_err(|source| LaunchError::Spawn {
        command: params.command.clone(),
        source,
    })?;

    let guard = interrupts::Guard::install();
    let status = child.wait().map_err(|source| LaunchError::Spawn {
        command: params.command.clone(),
        source,
    })?;

    if guard.interrupted() {
        tracing::info!(status = %status, "Child exited after interrupt");
    } else {
        tracing::debug!(status = %status, "Child exited");
    }
    Ok(status)
}

/// Map a child status to our exit code; signal `N` becomes `128 + N`.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return exit_codes::SIGNAL_BASE + signal;
        }
    }

    exit_codes::USAGE_ERROR
}

#[cfg(unix)]
mod interrupts {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    use signal_hook::consts::{SIGINT, SIGQUIT};
    use signal_hook::SigId;

    /// Swallows SIGINT/SIGQUIT while alive.
    pub struct Guard {
        ids: Vec<SigId>,
        received: Arc<AtomicBool>,
    }

    impl Guard {
        pub fn install() -> Self {
            let received = Arc::new(AtomicBool::new(false));
            let mut ids = Vec::new();
            for signal in [SIGINT, SIGQUIT] {
                match signal_hook::flag::register(signal, Arc::clone(&received)) {
                    Ok(id) => ids.push(id),
                    Err(e) => tracing::warn!(signal, error = %e, "Failed to install signal handler"),
                }
            }
            Self { ids, received }
        }

        pub fn interrupted(&self) -> bool {
            self.received.load(Ordering::Relaxed)
        }
    }

    impl Drop for Guard {
        fn drop(&mut self) {
            for id in self.ids.drain(..) {
                signal_hook::low_level::unregister(id);
            }
        }
    }
}

#[cfg(not(unix))]
mod interrupts {
    pub struct Guard;

    impl Guard {
        pub fn install() -> Self {
            Guard
        }

        pub fn interrupted(&self) -> bool {
            false
        }
    }
}
