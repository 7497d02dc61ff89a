//! Error types for the launcher.
//!
//! Every variant is fatal and maps to a fixed process exit code. A child that
//! runs and exits non-zero is not an error; its status is passed through.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Exit code constants for the launcher's own outcomes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// The launcher could not run the companion binary, or the companion
    /// ended without a numeric exit status.
    pub const FAILURE: i32 = 1;
}

#[derive(Error, Debug)]
pub enum LaunchError {
    /// No companion build exists for the host pair.
    #[error("Unsupported platform ({os}) and architecture ({arch})")]
    UnsupportedPlatform { os: String, arch: String },

    /// The launcher's own installed location could not be determined.
    #[error("Failed to locate the launcher executable: {0:#}")]
    LauncherLocation(anyhow::Error),

    /// The companion binary is missing, not executable, or refused by the OS.
    #[error("Failed to start {}: {cause:#}", .path.display())]
    Spawn {
        path: PathBuf,
        cause: anyhow::Error,
    },
}

impl LaunchError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            LaunchError::UnsupportedPlatform { .. }
            | LaunchError::LauncherLocation(_)
            | LaunchError::Spawn { .. } => exit_codes::FAILURE,
        }
    }

    /// Whether the underlying cause is a missing companion file.
    pub fn is_not_found(&self) -> bool {
        match self {
            LaunchError::Spawn { cause, .. } => cause
                .downcast_ref::<io::Error>()
                .is_some_and(|e| e.kind() == io::ErrorKind::NotFound),
            _ => false,
        }
    }
}
