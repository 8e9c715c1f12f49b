// File system utilities

use std::path::{Path, PathBuf};

use crate::utils::error::{CppCfgError, Result};

/// Editor settings directory created under the project root
pub const VSCODE_DIR: &str = ".vscode";

/// File name the C/C++ extension reads
pub const PROPERTIES_FILE: &str = "c_cpp_properties.json";

/// Create `path` and any missing parents. Succeeds when it already exists.
pub fn ensure_directory_exists(path: &Path) -> Result<()> {
    if !path.is_dir() {
        std::fs::create_dir_all(path).map_err(|e| CppCfgError::filesystem(path, e))?;
    }
    Ok(())
}

/// Resolve an optional target directory, falling back to the working directory
pub fn resolve_target_dir(target: Option<&Path>) -> Result<PathBuf> {
    match target {
        Some(dir) => Ok(dir.to_path_buf()),
        None => std::env::current_dir().map_err(|e| CppCfgError::filesystem(".", e)),
    }
}

/// `<target>/.vscode`
pub fn vscode_dir(target: &Path) -> PathBuf {
    target.join(VSCODE_DIR)
}

/// `<target>/.vscode/c_cpp_properties.json`
pub fn properties_path(target: &Path) -> PathBuf {
    vscode_dir(target).join(PROPERTIES_FILE)
}
