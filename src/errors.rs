//! Error Types
//!
//! This module defines the error types used throughout the pipeline.
//!
//! # Overview
//!
//! The main error type [`PipelineError`] covers all failure modes:
//! - Toolchain lookup failures (structural, detected before any file is
//!   processed)
//! - I/O failures while preparing the output directory or walking a
//!   source directory
//! - Shader compiler failures at execution time (raised by a registrar,
//!   never during planning)
//!
//! All public APIs return [`Result<T>`], an alias for
//! `std::result::Result<T, PipelineError>`.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// The main error type for the shader pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The Slang compiler executable could not be located.
    ///
    /// Both lookup strategies failed: no `slangc` on `PATH` and no usable
    /// `$VULKAN_SDK/bin`. Fatal; nothing is planned once this is raised.
    #[error("slangc not found on PATH or in $VULKAN_SDK/bin; install the Slang toolchain or set VULKAN_SDK")]
    ToolchainMissing,

    /// File I/O error (output directory creation, source discovery).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The external compiler exited with a failure status.
    ///
    /// Only an executing [`Registrar`](crate::build_step::Registrar) raises
    /// this; planning never runs the compiler.
    #[error("shader compiler exited with {status} while producing {artifact:?}")]
    CompilerFailed {
        /// The artifact the failed invocation should have produced.
        artifact: PathBuf,
        /// The compiler's exit status.
        status: ExitStatus,
    },
}

/// Alias for `Result<T, PipelineError>`.
pub type Result<T> = std::result::Result<T, PipelineError>;
