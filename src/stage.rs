//! Shader Stage Tables
//!
//! Maps shader source filenames to the graphics pipeline stage(s) they
//! implement, using the suffix convention `name.<stage>.slang`:
//!
//! | suffix    | stage    | profile  | entry point    |
//! |-----------|----------|----------|----------------|
//! | `.comp`   | compute  | `cs_6_6` | `main`         |
//! | `.hull`   | hull     | `hs_6_6` | `main`         |
//! | `.domain` | domain   | `ds_6_6` | `main`         |
//! | `.geom`   | geometry | `gs_6_6` | `main`         |
//! | `.vert`   | vertex   | `vs_6_6` | `vertexMain`   |
//! | `.frag`   | fragment | `ps_6_6` | `fragmentMain` |
//!
//! `.inc` files are shared includes and resolve to no stages at all. Any
//! other name is a combined source carrying both a `vertexMain` and a
//! `fragmentMain` entry point, and resolves to the vertex+fragment pair.

use std::ffi::OsStr;
use std::path::Path;

use smallvec::{smallvec, SmallVec};

/// Suffix marking a shared include file that compiles to nothing on its own.
const INCLUDE_SUFFIX: &str = "inc";

/// One phase of the graphics pipeline a shader program can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Compute,
    Hull,
    Domain,
    Geometry,
    Vertex,
    Fragment,
}

impl ShaderStage {
    /// Filename tag, used both as the source suffix and in artifact names
    /// (`blur.comp.spv`).
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Compute => "comp",
            Self::Hull => "hull",
            Self::Domain => "domain",
            Self::Geometry => "geom",
            Self::Vertex => "vert",
            Self::Fragment => "frag",
        }
    }

    /// slangc target-capability profile for this stage.
    #[must_use]
    pub const fn profile(self) -> &'static str {
        match self {
            Self::Compute => "cs_6_6",
            Self::Hull => "hs_6_6",
            Self::Domain => "ds_6_6",
            Self::Geometry => "gs_6_6",
            Self::Vertex => "vs_6_6",
            Self::Fragment => "ps_6_6",
        }
    }

    /// Entry-point function name the compiler starts from.
    ///
    /// Single-purpose stages use plain `main`; combined vertex+fragment
    /// sources need distinct names per stage.
    #[must_use]
    pub const fn entry_point(self) -> &'static str {
        match self {
            Self::Vertex => "vertexMain",
            Self::Fragment => "fragmentMain",
            _ => "main",
        }
    }

    /// Parse a filename stage suffix. Case-sensitive.
    #[must_use]
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "comp" => Some(Self::Compute),
            "hull" => Some(Self::Hull),
            "domain" => Some(Self::Domain),
            "geom" => Some(Self::Geometry),
            "vert" => Some(Self::Vertex),
            "frag" => Some(Self::Fragment),
            _ => None,
        }
    }
}

/// A resolved `(stage, profile, entry point)` triple for one compilation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageSpec {
    pub stage: ShaderStage,
    pub profile: &'static str,
    pub entry_point: &'static str,
}

impl StageSpec {
    /// Build the spec for a stage from the fixed tables above.
    #[must_use]
    pub const fn of(stage: ShaderStage) -> Self {
        Self {
            stage,
            profile: stage.profile(),
            entry_point: stage.entry_point(),
        }
    }
}

/// The 0–2 stage specs one source file resolves to.
pub type StageSet = SmallVec<[StageSpec; 2]>;

/// Resolve the stages a shader source file implements.
///
/// Include files resolve to an empty set; an unrecognized suffix is the
/// combined-file convention, never an error.
#[must_use]
pub fn resolve_stages(path: &Path) -> StageSet {
    match stage_suffix(path) {
        Some(INCLUDE_SUFFIX) => smallvec![],
        Some(suffix) => ShaderStage::from_suffix(suffix)
            .map_or_else(combined_pair, |stage| smallvec![StageSpec::of(stage)]),
        None => combined_pair(),
    }
}

/// Logical name for a source's output artifacts: the file stem with any
/// recognized stage suffix stripped (`blur.comp.slang` → `blur`,
/// `terrain.slang` → `terrain`).
#[must_use]
pub fn logical_name(path: &Path) -> String {
    let stem = path.file_stem().and_then(OsStr::to_str).unwrap_or_default();
    match Path::new(stem).extension().and_then(OsStr::to_str) {
        Some(suffix) if suffix == INCLUDE_SUFFIX || ShaderStage::from_suffix(suffix).is_some() => {
            Path::new(stem)
                .file_stem()
                .and_then(OsStr::to_str)
                .unwrap_or(stem)
                .to_string()
        }
        _ => stem.to_string(),
    }
}

/// Vertex then fragment, the fixed table order.
fn combined_pair() -> StageSet {
    smallvec![
        StageSpec::of(ShaderStage::Vertex),
        StageSpec::of(ShaderStage::Fragment),
    ]
}

/// The stage suffix of a path, if it has one (`blur.comp.slang` → `comp`).
fn stage_suffix(path: &Path) -> Option<&str> {
    let stem = path.file_stem()?.to_str()?;
    Path::new(stem).extension()?.to_str()
}
