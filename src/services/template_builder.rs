use std::path::{Path, PathBuf};

use tracing::debug;

use crate::models::profile::ProfileKind;
use crate::models::properties::CppProperties;
use crate::services::file_emitter::PropertiesEmitter;
use crate::utils::error::Result;
use crate::utils::validation::require_non_empty;

/// Properties builder for user-supplied toolchain paths.
///
/// Every build validates its required fields before anything touches the
/// filesystem, so a failed build never leaves a file behind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CppConfig {
    compiler_path: Option<String>,
    python_include: Option<String>,
    pybind11_include: Option<String>,
}

impl CppConfig {
    pub fn new(
        compiler_path: Option<String>,
        python_include: Option<String>,
        pybind11_include: Option<String>,
    ) -> Self {
        Self {
            compiler_path,
            python_include,
            pybind11_include,
        }
    }

    /// Set the path to cl.exe
    pub fn with_compiler(mut self, path: impl Into<String>) -> Self {
        self.compiler_path = Some(path.into());
        self
    }

    /// Set the Python headers directory
    pub fn with_python_include(mut self, path: impl Into<String>) -> Self {
        self.python_include = Some(path.into());
        self
    }

    /// Set the pybind11 headers directory
    pub fn with_pybind11_include(mut self, path: impl Into<String>) -> Self {
        self.pybind11_include = Some(path.into());
        self
    }

    pub fn compiler_path(&self) -> Option<&str> {
        self.compiler_path.as_deref()
    }

    pub fn python_include(&self) -> Option<&str> {
        self.python_include.as_deref()
    }

    pub fn pybind11_include(&self) -> Option<&str> {
        self.pybind11_include.as_deref()
    }

    /// Plain C++ profile. Needs only the compiler path.
    pub fn build_standard(&self) -> Result<CppProperties> {
        let compiler = require_non_empty(self.compiler_path(), "compiler path")?;
        debug!(compiler, "building standard profile");
        Ok(CppProperties::new(compiler, Vec::<String>::new()))
    }

    /// Profile for pybind11 extensions.
    ///
    /// Checks compiler, Python include, then pybind11 include, stopping at the
    /// first missing one. The pybind11 directory is listed before the Python
    /// one.
    pub fn build_pybind(&self) -> Result<CppProperties> {
        let compiler = require_non_empty(self.compiler_path(), "compiler path")?;
        let python = require_non_empty(self.python_include(), "python include path")?;
        let pybind11 = require_non_empty(self.pybind11_include(), "pybind11 include path")?;
        debug!(compiler, python, pybind11, "building pybind profile");
        Ok(CppProperties::new(compiler, [pybind11, python]))
    }

    pub fn build(&self, kind: ProfileKind) -> Result<CppProperties> {
        match kind {
            ProfileKind::Standard => self.build_standard(),
            ProfileKind::Pybind => self.build_pybind(),
        }
    }

    /// Write the standard profile under `dir` (working directory when `None`)
    pub fn config_standard(&self, dir: Option<&Path>) -> Result<PathBuf> {
        self.config(ProfileKind::Standard, dir)
    }

    /// Write the pybind profile under `dir` (working directory when `None`)
    pub fn config_pybind(&self, dir: Option<&Path>) -> Result<PathBuf> {
        self.config(ProfileKind::Pybind, dir)
    }

    pub fn config(&self, kind: ProfileKind, dir: Option<&Path>) -> Result<PathBuf> {
        let props = self.build(kind)?;
        PropertiesEmitter::emit(dir, &props)
    }
}
