//! Build Step Registration
//!
//! Wraps an aggregated plan into one named build step and hands it to the
//! surrounding build system through the [`Registrar`] seam. The step
//! declares every source file as an input dependency and every output path
//! as a byproduct, which is what gives downstream consumers correct
//! incremental-rebuild tracking.

use std::path::PathBuf;
use std::process::Command;

use log::info;

use crate::errors::{PipelineError, Result};
use crate::invocation::Invocation;

/// One named, always-run shader build step.
///
/// Produced by [`ShaderPipeline::plan`](crate::pipeline::ShaderPipeline::plan)
/// and never mutated afterwards. `invocations` and `byproducts` are parallel
/// sequences: `byproducts[i]` is the artifact `invocations[i]` writes.
#[derive(Debug, Clone)]
pub struct BuildStep {
    /// Target name supplied by the caller.
    pub name: String,
    /// Ordered compiler invocations.
    pub invocations: Vec<Invocation>,
    /// Every source file, in caller order. Includes `.inc` files even
    /// though they compile to nothing, so editors and build systems can
    /// associate them with the step.
    pub inputs: Vec<PathBuf>,
    /// Every declared output path, in invocation order.
    pub byproducts: Vec<PathBuf>,
}

impl BuildStep {
    /// Hand the step to the surrounding build system.
    pub fn register(&self, registrar: &mut dyn Registrar) -> Result<()> {
        registrar.register(self)
    }
}

/// Seam between the pipeline and the surrounding build system.
///
/// The pipeline itself never executes anything; whatever drives the build
/// (a cargo build script, an xtask, a test harness) decides what
/// "registering" a step means.
pub trait Registrar {
    fn register(&mut self, step: &BuildStep) -> Result<()>;
}

/// Registrar for cargo build scripts.
///
/// Emits `cargo:rerun-if-changed` directives, then runs the invocations
/// synchronously, in order. Cargo has no always-run custom step, so the
/// step's re-evaluation contract is mapped onto change tracking instead:
/// every input, every declared byproduct (a deleted or hand-edited
/// artifact forces a rerun), and the compiler executable itself are
/// declared, plus `rerun-if-env-changed` for the SDK location the fallback
/// lookup reads. The artifacts are left at their declared paths for
/// `include_bytes!` or runtime loading.
#[derive(Debug, Clone, Copy, Default)]
pub struct CargoRegistrar;

impl CargoRegistrar {
    /// The directives that make cargo re-evaluate the step.
    fn directives(step: &BuildStep) -> Vec<String> {
        let mut directives =
            Vec::with_capacity(step.inputs.len() + step.byproducts.len() + 2);
        for input in &step.inputs {
            directives.push(format!("cargo:rerun-if-changed={}", input.display()));
        }
        for byproduct in &step.byproducts {
            directives.push(format!("cargo:rerun-if-changed={}", byproduct.display()));
        }
        // Every invocation shares one program; declaring it re-detects a
        // swapped or upgraded compiler.
        if let Some(invocation) = step.invocations.first() {
            directives.push(format!(
                "cargo:rerun-if-changed={}",
                invocation.program.display()
            ));
        }
        directives.push("cargo:rerun-if-env-changed=VULKAN_SDK".to_string());
        directives
    }
}

impl Registrar for CargoRegistrar {
    fn register(&mut self, step: &BuildStep) -> Result<()> {
        for directive in Self::directives(step) {
            println!("{directive}");
        }

        for invocation in &step.invocations {
            let status = Command::new(&invocation.program)
                .args(&invocation.args)
                .status()?;
            if !status.success() {
                return Err(PipelineError::CompilerFailed {
                    artifact: invocation.output.clone(),
                    status,
                });
            }
        }

        info!(
            "registered build step `{}` ({} artifacts)",
            step.name,
            step.byproducts.len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::BackendTarget;
    use crate::invocation::{Invocation, ShaderSource};
    use crate::stage::{ShaderStage, StageSpec};
    use std::path::Path;

    fn sample_step() -> BuildStep {
        let invocation = Invocation::synthesize(
            Path::new("/opt/slang/bin/slangc"),
            &ShaderSource::new("shaders/sky.vert.slang"),
            StageSpec::of(ShaderStage::Vertex),
            BackendTarget::Spirv,
            Path::new("out"),
            Path::new("shaders"),
        );
        BuildStep {
            name: "test_shaders".to_string(),
            inputs: vec![PathBuf::from("shaders/sky.vert.slang")],
            byproducts: vec![invocation.output.clone()],
            invocations: vec![invocation],
        }
    }

    #[test]
    fn directives_track_inputs_byproducts_and_compiler() {
        let directives = CargoRegistrar::directives(&sample_step());
        assert_eq!(
            directives,
            vec![
                "cargo:rerun-if-changed=shaders/sky.vert.slang".to_string(),
                "cargo:rerun-if-changed=out/sky.vert.spv".to_string(),
                "cargo:rerun-if-changed=/opt/slang/bin/slangc".to_string(),
                "cargo:rerun-if-env-changed=VULKAN_SDK".to_string(),
            ]
        );
    }

    #[test]
    fn directives_without_invocations_still_track_the_sdk() {
        let step = BuildStep {
            name: "test_shaders".to_string(),
            inputs: vec![PathBuf::from("common.inc.slang")],
            byproducts: Vec::new(),
            invocations: Vec::new(),
        };
        let directives = CargoRegistrar::directives(&step);
        assert_eq!(
            directives,
            vec![
                "cargo:rerun-if-changed=common.inc.slang".to_string(),
                "cargo:rerun-if-env-changed=VULKAN_SDK".to_string(),
            ]
        );
    }
}
