//! Runtime abstraction for host operations.
//!
//! This module provides a trait-based abstraction over the few operations the
//! launcher performs against the host, enabling dependency injection and
//! testability.
//!
//! # Structure
//!
//! - `env` - Platform detection and the launcher's own location
//! - `process` - Spawning the companion binary with inherited stdio

mod env;
mod process;

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::platform::Platform;

pub use process::{ChildExit, signal_name};

#[cfg_attr(test, mockall::automock)]
pub trait Runtime {
    // Environment
    fn platform(&self) -> Platform;

    /// Path of the running launcher executable, as reported by the OS.
    fn current_exe(&self) -> Result<PathBuf>;

    /// Canonicalize a path by resolving all symlinks and returning the canonical absolute path.
    fn canonicalize(&self, path: &Path) -> Result<PathBuf>;

    // Process
    /// Run `program` with no arguments and inherited stdin/stdout/stderr,
    /// blocking until it exits. Errors only when the process cannot be started.
    fn run_inherited(&self, program: &Path) -> Result<ChildExit>;
}

pub struct RealRuntime;

impl Runtime for RealRuntime {
    fn platform(&self) -> Platform {
        self.platform_impl()
    }

    fn current_exe(&self) -> Result<PathBuf> {
        self.current_exe_impl()
    }

    fn canonicalize(&self, path: &Path) -> Result<PathBuf> {
        self.canonicalize_impl(path)
    }

    fn run_inherited(&self, program: &Path) -> Result<ChildExit> {
        self.run_inherited_impl(program)
    }
}
