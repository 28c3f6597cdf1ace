//! Build-time Slang shader compilation pipeline.
//!
//! Given a set of `.slang` sources, infers the pipeline stage(s) each file
//! implements from its filename suffix, fans every stage out across the
//! enabled backends (SPIR-V always, DXIL when DirectX is on), synthesizes
//! one `slangc` invocation per (stage, backend) pair and aggregates the
//! whole set into a single named build step with declared inputs and
//! byproducts.
//!
//! The crate is meant to be driven from a `build.rs` or an xtask:
//!
//! ```no_run
//! use slang_pipeline::{CargoRegistrar, ShaderPipeline};
//!
//! fn main() -> slang_pipeline::Result<()> {
//!     if let Some(step) = ShaderPipeline::new("engine_shaders")
//!         .output_dir("target/shaders")
//!         .include_dir("shaders")
//!         .directx(cfg!(windows))
//!         .add_source_dir("shaders")?
//!         .plan()?
//!     {
//!         step.register(&mut CargoRegistrar)?;
//!     }
//!     Ok(())
//! }
//! ```
//!
//! Planning is pure apart from creating the output directory; nothing is
//! executed until a [`Registrar`] runs the step.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod backend;
pub mod build_step;
pub mod errors;
pub mod invocation;
pub mod pipeline;
pub mod stage;
pub mod toolchain;

pub use backend::BackendTarget;
pub use build_step::{BuildStep, CargoRegistrar, Registrar};
pub use errors::{PipelineError, Result};
pub use invocation::{Invocation, ShaderSource};
pub use pipeline::ShaderPipeline;
pub use stage::{resolve_stages, ShaderStage, StageSet, StageSpec};
pub use toolchain::find_compiler;
