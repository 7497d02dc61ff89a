//! Companion artifact naming.
//!
//! The launcher ships next to one precompiled companion per supported
//! platform. Their file names follow `main-<os>-<arch>-<version>`.

use std::fmt;

use crate::error::LaunchError;
use crate::platform::Platform;

/// Build identifier of the companion binaries, embedded by `build.rs`.
pub const VERSION: &str = env!("INVOKE_BINARY_VERSION");

/// (os, arch) pairs that have a companion build.
pub const SUPPORTED: &[(&str, &str)] = &[
    ("linux", "amd64"),
    ("linux", "arm64"),
    ("windows", "amd64"),
    ("windows", "arm64"),
];

/// File name of the companion executable for one platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactName(String);

impl ArtifactName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArtifactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<std::path::Path> for ArtifactName {
    fn as_ref(&self) -> &std::path::Path {
        std::path::Path::new(&self.0)
    }
}

/// Resolve the companion file name for `platform` at `version`.
///
/// Fails with [`LaunchError::UnsupportedPlatform`] for any pair outside
/// [`SUPPORTED`]; there is no fallback.
pub fn resolve(platform: &Platform, version: &str) -> Result<ArtifactName, LaunchError> {
    let is_supported = SUPPORTED
        .iter()
        .any(|(os, arch)| platform.os == *os && platform.arch == *arch);

    if !is_supported {
        return Err(LaunchError::UnsupportedPlatform {
            os: platform.os.clone(),
            arch: platform.arch.clone(),
        });
    }

    Ok(ArtifactName(format!(
        "main-{}-{}-{}",
        platform.os, platform.arch, version
    )))
}
