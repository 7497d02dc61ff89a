//! Platform detection module
//!
//! This module provides abstractions for detecting the current platform
//! (OS and architecture) under the identifiers used in companion artifact
//! names.

mod detection;

pub use detection::Platform;
