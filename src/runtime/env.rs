//! Environment and system information operations.

use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};

use super::RealRuntime;
use crate::platform::Platform;

impl RealRuntime {
    #[tracing::instrument(skip(self))]
    pub(crate) fn platform_impl(&self) -> Platform {
        Platform::detect()
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn current_exe_impl(&self) -> Result<PathBuf> {
        env::current_exe().context("Failed to get current executable path")
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn canonicalize_impl(&self, path: &Path) -> Result<PathBuf> {
        std::fs::canonicalize(path)
            .with_context(|| format!("Failed to canonicalize path {:?}", path))
    }
}
