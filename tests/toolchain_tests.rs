//! Toolchain Lookup Tests
//!
//! Tests for `find_compiler`: PATH search, the `$VULKAN_SDK/bin` fallback
//! and the fatal missing-toolchain case.
//!
//! These mutate process environment variables, so they live in their own
//! test binary and run as a single sequential test function.

use std::env;
use std::fs;
use std::path::Path;

use slang_pipeline::{find_compiler, PipelineError};

const COMPILER_EXE: &str = if cfg!(windows) { "slangc.exe" } else { "slangc" };

fn place_compiler(dir: &Path) {
    fs::write(dir.join(COMPILER_EXE), b"").unwrap();
}

#[test]
fn lookup_order_path_then_vulkan_sdk() {
    let empty = tempfile::tempdir().unwrap();
    let sdk = tempfile::tempdir().unwrap();
    let path_dir = tempfile::tempdir().unwrap();
    fs::create_dir(sdk.path().join("bin")).unwrap();

    // Neither PATH nor the SDK has a compiler: fatal.
    env::set_var("PATH", empty.path());
    env::remove_var("VULKAN_SDK");
    assert!(matches!(
        find_compiler(),
        Err(PipelineError::ToolchainMissing)
    ));

    // SDK fallback kicks in when PATH has nothing.
    place_compiler(&sdk.path().join("bin"));
    env::set_var("VULKAN_SDK", sdk.path());
    assert_eq!(
        find_compiler().unwrap(),
        sdk.path().join("bin").join(COMPILER_EXE)
    );

    // A PATH hit wins over the SDK fallback.
    place_compiler(path_dir.path());
    env::set_var("PATH", path_dir.path());
    assert_eq!(
        find_compiler().unwrap(),
        path_dir.path().join(COMPILER_EXE)
    );
}
