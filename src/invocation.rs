//! Compiler Invocations
//!
//! Pure synthesis of slangc command lines. An [`Invocation`] is data until a
//! [`Registrar`](crate::build_step::Registrar) executes it; nothing here
//! touches the filesystem or spawns a process.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::backend::BackendTarget;
use crate::stage::{self, StageSpec};

/// A shader source file plus its logical name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderSource {
    /// Path handed to the compiler, untouched.
    pub path: PathBuf,
    /// File stem with any stage suffix stripped; names the artifacts.
    pub name: String,
}

impl ShaderSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = stage::logical_name(&path);
        Self { path, name }
    }
}

/// One external compiler invocation and the single artifact it produces.
///
/// Read-only once synthesized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Resolved compiler executable.
    pub program: PathBuf,
    /// Ordered argument list. slangc is argument-order sensitive for some
    /// flags, so the order is part of the contract.
    pub args: Vec<OsString>,
    /// The artifact this invocation writes.
    pub output: PathBuf,
}

impl Invocation {
    /// Synthesize the command line for one (stage, backend) pair.
    ///
    /// The artifact lands at `out_dir/<name>.<stage>.<ext>`. SPIR-V builds
    /// additionally define `__SPIRV__` and pass `-fvk-use-dx-layout` so
    /// memory layouts stay compatible across both backends.
    #[must_use]
    pub fn synthesize(
        compiler: &Path,
        source: &ShaderSource,
        spec: StageSpec,
        target: BackendTarget,
        out_dir: &Path,
        include_dir: &Path,
    ) -> Self {
        let output = out_dir.join(format!(
            "{}.{}.{}",
            source.name,
            spec.stage.tag(),
            target.extension()
        ));

        let spirv = target == BackendTarget::Spirv;
        let mut args: Vec<OsString> = Vec::with_capacity(12);
        args.push("-profile".into());
        args.push(spec.profile.into());
        args.push("-entry".into());
        args.push(spec.entry_point.into());
        if spirv {
            args.push("-D".into());
            args.push("__SPIRV__".into());
        }
        args.push("-I".into());
        args.push(include_dir.into());
        if spirv {
            args.push("-fvk-use-dx-layout".into());
        }
        args.push("-o".into());
        args.push(output.clone().into());
        args.push(source.path.clone().into());

        Self {
            program: compiler.to_path_buf(),
            args,
            output,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage::ShaderStage;

    #[test]
    fn logical_name_strips_stage_suffix() {
        let source = ShaderSource::new("shaders/blur.comp.slang");
        assert_eq!(source.name, "blur");
    }

    #[test]
    fn logical_name_keeps_unrecognized_suffix() {
        let source = ShaderSource::new("shaders/glow.fx.slang");
        assert_eq!(source.name, "glow.fx");
    }

    #[test]
    fn spirv_flag_order() {
        let inv = Invocation::synthesize(
            Path::new("slangc"),
            &ShaderSource::new("shaders/sky.vert.slang"),
            StageSpec::of(ShaderStage::Vertex),
            BackendTarget::Spirv,
            Path::new("out"),
            Path::new("shaders"),
        );
        let expected: Vec<OsString> = [
            "-profile",
            "vs_6_6",
            "-entry",
            "vertexMain",
            "-D",
            "__SPIRV__",
            "-I",
            "shaders",
            "-fvk-use-dx-layout",
            "-o",
        ]
        .iter()
        .map(OsString::from)
        .collect();
        assert_eq!(&inv.args[..10], expected.as_slice());
        assert_eq!(inv.args[10], OsString::from(inv.output.clone()));
        assert_eq!(inv.args[11], OsString::from("shaders/sky.vert.slang"));
        assert_eq!(inv.output, Path::new("out/sky.vert.spv"));
    }

    #[test]
    fn dxil_omits_spirv_flags() {
        let inv = Invocation::synthesize(
            Path::new("slangc"),
            &ShaderSource::new("shaders/blur.comp.slang"),
            StageSpec::of(ShaderStage::Compute),
            BackendTarget::Dxil,
            Path::new("out"),
            Path::new("shaders"),
        );
        assert_eq!(inv.output, Path::new("out/blur.comp.dxil"));
        assert!(!inv.args.contains(&OsString::from("__SPIRV__")));
        assert!(!inv.args.contains(&OsString::from("-fvk-use-dx-layout")));
    }
}
