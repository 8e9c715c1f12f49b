use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use crate::models::profile::ProfileKind;
use crate::models::properties::CppProperties;
use crate::services::file_emitter::PropertiesEmitter;
use crate::utils::error::Result;

/// cl.exe from the VS 2022 Build Tools, MSVC 14.44.35207
pub const DEFAULT_COMPILER_PATH: &str =
    "C:/Program Files (x86)/Microsoft Visual Studio/2022/BuildTools/VC/Tools/MSVC/14.44.35207/bin/Hostx64/x64/cl.exe";
/// Python 3.12 per-user install headers
pub const DEFAULT_PYTHON_INCLUDE: &str = "C:/Users/SZ/AppData/Local/Programs/Python/Python312/include";
/// pybind11 headers from the same Python's site-packages
pub const DEFAULT_PYBIND11_INCLUDE: &str =
    "C:/Users/SZ/AppData/Local/Programs/Python/Python312/Lib/site-packages/pybind11/include";

/// Plain preset: the default compiler and only the workspace wildcard.
///
/// Earlier releases wrote the same document for both presets, so their plain
/// preset also listed the pybind11 and Python directories. This one matches
/// the plain profile produced by `CppConfig::build_standard`.
pub static PRESET_STANDARD: LazyLock<CppProperties> =
    LazyLock::new(|| CppProperties::new(DEFAULT_COMPILER_PATH, Vec::<String>::new()));

/// Pybind preset, with the pybind11 directory listed before the Python one
pub static PRESET_PYBIND: LazyLock<CppProperties> = LazyLock::new(|| {
    CppProperties::new(
        DEFAULT_COMPILER_PATH,
        [DEFAULT_PYBIND11_INCLUDE, DEFAULT_PYTHON_INCLUDE],
    )
});

/// Writes fixed properties for a stock toolchain install. Nothing is validated.
#[derive(Debug, Clone, Copy, Default)]
pub struct CppConfigAuto;

impl CppConfigAuto {
    pub fn new() -> Self {
        Self
    }

    pub fn properties(&self, kind: ProfileKind) -> &'static CppProperties {
        match kind {
            ProfileKind::Standard => LazyLock::force(&PRESET_STANDARD),
            ProfileKind::Pybind => LazyLock::force(&PRESET_PYBIND),
        }
    }

    pub fn config_standard(&self, dir: Option<&Path>) -> Result<PathBuf> {
        self.config(ProfileKind::Standard, dir)
    }

    pub fn config_pybind(&self, dir: Option<&Path>) -> Result<PathBuf> {
        self.config(ProfileKind::Pybind, dir)
    }

    pub fn config(&self, kind: ProfileKind, dir: Option<&Path>) -> Result<PathBuf> {
        PropertiesEmitter::emit(dir, self.properties(kind))
    }
}
