//! Platform dispatch to the companion binary.
//!
//! `launch` is the whole program: resolve the artifact for the host, run it
//! from the launcher's own directory, and turn the outcome into an exit code.

use anyhow::anyhow;
use log::{debug, error, warn};
use std::path::{Path, PathBuf};

use crate::artifact::{self, VERSION};
use crate::error::LaunchError;
use crate::runtime::{ChildExit, Runtime, signal_name};

/// Run the companion binary for this host and return the status the launcher
/// should exit with.
///
/// Launcher arguments are not forwarded; the companion always runs with none.
pub fn launch<R: Runtime>(runtime: &R) -> i32 {
    match run(runtime, VERSION) {
        Ok(exit) => {
            if let ChildExit::Terminated { signal } = exit {
                match signal {
                    Some(sig) => warn!("Companion terminated by {}", signal_name(sig)),
                    None => warn!("Companion exited without a status code"),
                }
            }
            exit.exit_code()
        }
        Err(err) => {
            report(&err);
            err.exit_code()
        }
    }
}

/// Resolve and run the companion for `version`.
#[tracing::instrument(skip(runtime))]
pub fn run<R: Runtime>(runtime: &R, version: &str) -> Result<ChildExit, LaunchError> {
    let platform = runtime.platform();
    let artifact = artifact::resolve(&platform, version)?;
    debug!("Selected {} for {}", artifact, platform);

    let program = launcher_dir(runtime)?.join(&artifact);
    debug!("Running {:?}", program);

    runtime
        .run_inherited(&program)
        .map_err(|cause| LaunchError::Spawn {
            path: program,
            cause,
        })
}

/// Directory holding the launcher's installed file, with symlinks resolved.
/// Independent of the caller's working directory.
pub fn launcher_dir<R: Runtime>(runtime: &R) -> Result<PathBuf, LaunchError> {
    let exe = runtime
        .current_exe()
        .and_then(|exe| runtime.canonicalize(&exe))
        .map_err(LaunchError::LauncherLocation)?;

    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        LaunchError::LauncherLocation(anyhow!("{:?} has no parent directory", exe))
    })
}

fn report(err: &LaunchError) {
    match err {
        // Always shown, regardless of the log filter.
        LaunchError::UnsupportedPlatform { .. } => eprintln!("{}", err),
        LaunchError::Spawn { .. } if err.is_not_found() => {
            error!("{} (expected next to the launcher)", err)
        }
        _ => error!("{}", err),
    }
}
