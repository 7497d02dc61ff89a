//! Child process operations.

use anyhow::{Context, Result};
use log::debug;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use super::RealRuntime;
use crate::error::exit_codes;

/// How a companion process that was started came to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildExit {
    /// The child exited with a numeric status.
    Exited(i32),
    /// The child ended without a numeric status, e.g. killed by a signal.
    Terminated { signal: Option<i32> },
}

impl ChildExit {
    pub fn from_status(status: ExitStatus) -> Self {
        match status.code() {
            Some(code) => ChildExit::Exited(code),
            None => ChildExit::Terminated {
                signal: terminating_signal(&status),
            },
        }
    }

    /// The status the launcher itself exits with.
    pub fn exit_code(&self) -> i32 {
        match self {
            ChildExit::Exited(code) => *code,
            ChildExit::Terminated { .. } => exit_codes::FAILURE,
        }
    }
}

#[cfg(unix)]
fn terminating_signal(status: &ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
fn terminating_signal(_status: &ExitStatus) -> Option<i32> {
    None
}

/// Human-readable name of a signal number, e.g. `SIGKILL`.
#[cfg(unix)]
pub fn signal_name(signal: i32) -> String {
    match nix::sys::signal::Signal::try_from(signal) {
        Ok(sig) => sig.as_str().to_string(),
        Err(_) => format!("signal {}", signal),
    }
}

#[cfg(not(unix))]
pub fn signal_name(signal: i32) -> String {
    format!("signal {}", signal)
}

impl RealRuntime {
    #[tracing::instrument(skip(self))]
    pub(crate) fn run_inherited_impl(&self, program: &Path) -> Result<ChildExit> {
        let status = Command::new(program)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .with_context(|| format!("Failed to spawn {:?}", program))?;

        debug!("{:?} finished with {}", program, status);
        Ok(ChildExit::from_status(status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::Runtime;

    #[test]
    fn test_exit_code_mapping() {
        assert_eq!(ChildExit::Exited(0).exit_code(), 0);
        assert_eq!(ChildExit::Exited(7).exit_code(), 7);
        assert_eq!(ChildExit::Exited(255).exit_code(), 255);
        assert_eq!(
            ChildExit::Terminated { signal: Some(9) }.exit_code(),
            exit_codes::FAILURE
        );
        assert_eq!(
            ChildExit::Terminated { signal: None }.exit_code(),
            exit_codes::FAILURE
        );
    }

    #[test]
    fn test_run_inherited_missing_program() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("main-linux-amd64-missing");

        let err = RealRuntime.run_inherited(&missing).unwrap_err();
        let io_err = err.downcast_ref::<std::io::Error>().unwrap();
        assert_eq!(io_err.kind(), std::io::ErrorKind::NotFound);
    }

    #[cfg(unix)]
    mod unix {
        use super::*;
        use std::os::unix::fs::PermissionsExt;
        use std::path::PathBuf;

        fn script(dir: &Path, name: &str, body: &str) -> PathBuf {
            let path = dir.join(name);
            std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
            path
        }

        #[test]
        fn test_signal_name() {
            assert_eq!(signal_name(9), "SIGKILL");
            assert_eq!(signal_name(15), "SIGTERM");
            assert_eq!(signal_name(10_000), "signal 10000");
        }

        #[test]
        fn test_run_inherited_exit_codes() {
            let dir = tempfile::tempdir().unwrap();
            for code in [0, 1, 7, 42, 255] {
                let program = script(dir.path(), &format!("exit-{}", code), &format!("exit {}", code));
                let exit = RealRuntime.run_inherited(&program).unwrap();
                assert_eq!(exit, ChildExit::Exited(code));
            }
        }

        #[test]
        fn test_run_inherited_signal() {
            let dir = tempfile::tempdir().unwrap();
            let program = script(dir.path(), "killed", "kill -9 $$");

            let exit = RealRuntime.run_inherited(&program).unwrap();
            assert_eq!(exit, ChildExit::Terminated { signal: Some(9) });
            assert_eq!(exit.exit_code(), exit_codes::FAILURE);
        }

        #[test]
        fn test_run_inherited_not_executable() {
            let dir = tempfile::tempdir().unwrap();
            let program = dir.path().join("plain");
            std::fs::write(&program, "#!/bin/sh\nexit 0\n").unwrap();
            std::fs::set_permissions(&program, std::fs::Permissions::from_mode(0o644)).unwrap();

            assert!(RealRuntime.run_inherited(&program).is_err());
        }
    }
}
