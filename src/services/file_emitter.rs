use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::models::properties::CppProperties;
use crate::utils::error::{CppCfgError, Result};
use crate::utils::fs_utils::{ensure_directory_exists, properties_path, resolve_target_dir, vscode_dir};

/// Writes `.vscode/c_cpp_properties.json` under a project directory
pub struct PropertiesEmitter;

impl PropertiesEmitter {
    /// Render the document exactly as it would be written
    pub fn render(props: &CppProperties) -> Result<String> {
        props.to_pretty_json()
    }

    /// Write `props` under `target_dir` (the working directory when `None`).
    ///
    /// Any existing file is truncated. Returns the path that was written.
    pub fn emit(target_dir: Option<&Path>, props: &CppProperties) -> Result<PathBuf> {
        let content = Self::render(props)?;
        let target = resolve_target_dir(target_dir)?;

        let dir = vscode_dir(&target);
        debug!(dir = %dir.display(), "ensuring settings directory");
        ensure_directory_exists(&dir)?;

        let path = properties_path(&target);
        fs::write(&path, content).map_err(|e| CppCfgError::filesystem(&path, e))?;
        info!(path = %path.display(), "wrote properties file");

        Ok(path)
    }
}
