//! Backend Targets
//!
//! The binary formats a compiled shader is emitted in. SPIR-V is always
//! produced; DXIL only when the DirectX backend is enabled for the build.

use smallvec::{smallvec, SmallVec};

/// An intermediate representation the compiler can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendTarget {
    /// DirectX intermediate language (`.dxil`).
    Dxil,
    /// SPIR-V for the Vulkan API family (`.spv`).
    Spirv,
}

impl BackendTarget {
    /// Artifact file extension for this target.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Dxil => "dxil",
            Self::Spirv => "spv",
        }
    }

    /// Targets to synthesize for one stage.
    ///
    /// DXIL is listed before SPIR-V so identical inputs always yield the
    /// same command log.
    #[must_use]
    pub fn fan_out(directx_enabled: bool) -> SmallVec<[Self; 2]> {
        if directx_enabled {
            smallvec![Self::Dxil, Self::Spirv]
        } else {
            smallvec![Self::Spirv]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fan_out_spirv_only() {
        assert_eq!(
            BackendTarget::fan_out(false).as_slice(),
            &[BackendTarget::Spirv]
        );
    }

    #[test]
    fn fan_out_dxil_first() {
        assert_eq!(
            BackendTarget::fan_out(true).as_slice(),
            &[BackendTarget::Dxil, BackendTarget::Spirv]
        );
    }
}
