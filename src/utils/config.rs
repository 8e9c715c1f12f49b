// Settings file loading (cppcfg.toml)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::utils::error::{CppCfgError, Result};

/// Settings file looked up in the target project directory
pub const PROJECT_SETTINGS_FILE: &str = "cppcfg.toml";

/// Settings file name inside the user config directory
pub const USER_SETTINGS_FILE: &str = "config.toml";

/// Top-level layout of a settings file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default)]
    pub toolchain: ToolchainSettings,
}

/// Default paths for the validating builder
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolchainSettings {
    /// Path to cl.exe
    pub compiler_path: Option<String>,
    /// Python development headers directory
    pub python_include: Option<String>,
    /// pybind11 headers directory
    pub pybind11_include: Option<String>,
}

/// Settings file discovery and parsing
pub struct ConfigParser;

impl ConfigParser {
    /// Load settings for a run targeting `target_dir`.
    ///
    /// An explicit file must exist. Without one, `<target>/cppcfg.toml` and then
    /// `<user_dir>/config.toml` are tried; if neither exists the defaults are
    /// used. `user_dir` defaults to the platform's `cppcfg` config directory.
    pub fn load_settings(
        explicit: Option<&Path>,
        target_dir: &Path,
        user_dir: Option<&Path>,
    ) -> Result<Settings> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(CppCfgError::ConfigError(format!(
                    "Settings file not found: {}",
                    path.display()
                )));
            }
            return Self::load_file(path);
        }

        let candidates = std::iter::once(target_dir.join(PROJECT_SETTINGS_FILE))
            .chain(match user_dir {
                Some(dir) => Some(dir.join(USER_SETTINGS_FILE)),
                None => Self::user_settings_path(),
            });
        for candidate in candidates {
            if candidate.is_file() {
                return Self::load_file(&candidate);
            }
        }

        tracing::debug!("no settings file found, using defaults");
        Ok(Settings::default())
    }

    /// Read and parse one settings file
    pub fn load_file(path: &Path) -> Result<Settings> {
        tracing::debug!(path = %path.display(), "loading settings");
        let content = fs::read_to_string(path).map_err(|e| {
            CppCfgError::ConfigError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::parse_settings(&content)
            .map_err(|e| CppCfgError::ConfigError(format!("{}: {}", path.display(), e)))
    }

    /// Parse settings from a TOML string
    pub fn parse_settings(content: &str) -> std::result::Result<Settings, toml::de::Error> {
        toml::from_str(content)
    }

    /// `<config dir>/cppcfg/config.toml`, when the platform has a config dir
    pub fn user_settings_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("cppcfg").join(USER_SETTINGS_FILE))
    }
}
