//! Shader Compilation Pipeline
//!
//! The aggregation pass: stage resolution × backend fan-out × command
//! synthesis, folded over every source in caller order into one
//! [`BuildStep`]. The fold is a single synchronous pass with an explicit
//! accumulator; two runs over identical inputs produce byte-identical
//! command and artifact sequences.
//!
//! Total ordering:
//! 1. files in the order supplied (directory scans are pre-sorted),
//! 2. within a file, the fixed stage-table order,
//! 3. within a stage, DXIL before SPIR-V.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use walkdir::WalkDir;

use crate::backend::BackendTarget;
use crate::build_step::BuildStep;
use crate::errors::Result;
use crate::invocation::{Invocation, ShaderSource};
use crate::stage::resolve_stages;
use crate::toolchain;

/// Source extension the directory walker collects.
const SOURCE_EXTENSION: &str = "slang";

/// Builder for one shader build step.
///
/// ```no_run
/// use slang_pipeline::{CargoRegistrar, ShaderPipeline};
///
/// fn main() -> slang_pipeline::Result<()> {
///     let step = ShaderPipeline::new("engine_shaders")
///         .output_dir("target/shaders")
///         .include_dir("shaders")
///         .directx(cfg!(windows))
///         .add_source_dir("shaders")?
///         .plan()?;
///     if let Some(step) = step {
///         step.register(&mut CargoRegistrar)?;
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ShaderPipeline {
    name: String,
    compiler: Option<PathBuf>,
    output_dir: PathBuf,
    include_dir: PathBuf,
    directx: bool,
    sources: Vec<PathBuf>,
}

impl ShaderPipeline {
    /// Start a pipeline for the build step `name`.
    ///
    /// Output and include directories default to `shaders`; the DirectX
    /// backend starts disabled.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            compiler: None,
            output_dir: PathBuf::from("shaders"),
            include_dir: PathBuf::from("shaders"),
            directx: false,
            sources: Vec::new(),
        }
    }

    /// Use an already-resolved compiler executable instead of the
    /// [`toolchain`] lookup. This is what keeps planning testable without
    /// an installed toolchain.
    #[must_use]
    pub fn compiler(mut self, path: impl Into<PathBuf>) -> Self {
        self.compiler = Some(path.into());
        self
    }

    /// Directory the artifacts are written to. Created by [`plan`](Self::plan)
    /// if absent.
    #[must_use]
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Include search directory, passed through to the compiler untouched.
    #[must_use]
    pub fn include_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.include_dir = dir.into();
        self
    }

    /// Enable or disable the DXIL backend. SPIR-V is always produced.
    #[must_use]
    pub fn directx(mut self, enabled: bool) -> Self {
        self.directx = enabled;
        self
    }

    /// Add a single source file.
    #[must_use]
    pub fn source(mut self, path: impl Into<PathBuf>) -> Self {
        self.sources.push(path.into());
        self
    }

    /// Add source files in the given order.
    #[must_use]
    pub fn sources<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.sources.extend(paths.into_iter().map(Into::into));
        self
    }

    /// Add every `*.slang` file under `dir`, in sorted order.
    pub fn add_source_dir(mut self, dir: impl AsRef<Path>) -> Result<Self> {
        for entry in WalkDir::new(dir).sort_by_file_name() {
            let entry = entry.map_err(std::io::Error::from)?;
            if entry.file_type().is_file()
                && entry
                    .path()
                    .extension()
                    .is_some_and(|ext| ext == SOURCE_EXTENSION)
            {
                self.sources.push(entry.into_path());
            }
        }
        Ok(self)
    }

    /// Fold every source into one build step.
    ///
    /// An empty source list is a silent no-op: `Ok(None)`, nothing created
    /// on disk, no step to register. Otherwise the compiler is resolved (if
    /// not injected), the output directory is created, and the accumulated
    /// step is returned.
    ///
    /// # Errors
    ///
    /// [`PipelineError::ToolchainMissing`](crate::PipelineError::ToolchainMissing)
    /// if no compiler was injected and the lookup fails;
    /// [`PipelineError::Io`](crate::PipelineError::Io) if the output
    /// directory cannot be created.
    pub fn plan(self) -> Result<Option<BuildStep>> {
        if self.sources.is_empty() {
            return Ok(None);
        }

        let compiler = match self.compiler {
            Some(compiler) => compiler,
            None => toolchain::find_compiler()?,
        };

        // The external toolchain must never fail on a missing destination.
        fs::create_dir_all(&self.output_dir)?;

        let backends = BackendTarget::fan_out(self.directx);
        let mut invocations = Vec::new();
        let mut byproducts = Vec::new();

        for path in &self.sources {
            let source = ShaderSource::new(path.clone());
            for spec in resolve_stages(path) {
                for &target in &backends {
                    let invocation = Invocation::synthesize(
                        &compiler,
                        &source,
                        spec,
                        target,
                        &self.output_dir,
                        &self.include_dir,
                    );
                    debug!(
                        "{} [{}] -> {}",
                        path.display(),
                        spec.profile,
                        invocation.output.display()
                    );
                    byproducts.push(invocation.output.clone());
                    invocations.push(invocation);
                }
            }
        }

        Ok(Some(BuildStep {
            name: self.name,
            invocations,
            inputs: self.sources,
            byproducts,
        }))
    }
}
