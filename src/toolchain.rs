//! Compiler Toolchain Lookup
//!
//! Locates the `slangc` executable with a two-step strategy: every `PATH`
//! entry first, then the `bin/` directory of an installed Vulkan SDK.
//! Lookup failure is fatal and happens before any shader is processed; the
//! rest of the pipeline only ever sees an already-resolved path.

use std::env;
use std::path::PathBuf;

use log::debug;

use crate::errors::{PipelineError, Result};

#[cfg(windows)]
const COMPILER_EXE: &str = "slangc.exe";
#[cfg(not(windows))]
const COMPILER_EXE: &str = "slangc";

/// Locate the Slang compiler executable.
///
/// # Errors
///
/// [`PipelineError::ToolchainMissing`] when neither `PATH` nor
/// `$VULKAN_SDK/bin` contains `slangc`.
pub fn find_compiler() -> Result<PathBuf> {
    let candidates = env::var_os("PATH")
        .map(|path| env::split_paths(&path).collect::<Vec<_>>())
        .unwrap_or_default()
        .into_iter()
        .chain(env::var_os("VULKAN_SDK").map(|sdk| PathBuf::from(sdk).join("bin")));

    let compiler = locate_in(candidates, COMPILER_EXE).ok_or(PipelineError::ToolchainMissing)?;
    debug!("using shader compiler at {}", compiler.display());
    Ok(compiler)
}

/// Return the first directory in `dirs` containing `exe`.
fn locate_in(dirs: impl IntoIterator<Item = PathBuf>, exe: &str) -> Option<PathBuf> {
    dirs.into_iter()
        .map(|dir| dir.join(exe))
        .find(|candidate| candidate.is_file())
}
