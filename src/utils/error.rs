// Common error types for cppcfg

use std::path::PathBuf;

/// Errors surfaced by the builders, the emitter and the settings loader
#[derive(Debug, thiserror::Error)]
pub enum CppCfgError {
    /// A required path was missing or empty; raised before any file I/O
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Creating the `.vscode` directory or writing the properties file failed
    #[error("Filesystem error at {}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Settings file could not be read or parsed
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Rendered document was not valid UTF-8
    #[error("Encoding error: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

impl CppCfgError {
    /// Shorthand for a missing required field
    pub fn missing(field: &str) -> Self {
        CppCfgError::InvalidConfiguration(format!("missing {}", field))
    }

    pub fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CppCfgError::Filesystem {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, CppCfgError>;

/// User-facing rendering of an error, with a hint and a process exit code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserError {
    pub message: String,
    pub hint: Option<String>,
    pub exit_code: i32,
}

impl UserError {
    pub fn from_error(err: &CppCfgError) -> Self {
        match err {
            CppCfgError::InvalidConfiguration(_) => Self {
                message: err.to_string(),
                hint: Some(
                    "Pass the path with a flag (e.g. --compiler), set CPPCFG_COMPILER, or add it to cppcfg.toml"
                        .to_string(),
                ),
                exit_code: 2,
            },
            CppCfgError::ConfigError(_) => Self {
                message: err.to_string(),
                hint: Some("Check the [toolchain] table of your settings file".to_string()),
                exit_code: 2,
            },
            CppCfgError::Filesystem { .. } => Self {
                message: err.to_string(),
                hint: Some("Check that the target directory is writable".to_string()),
                exit_code: 1,
            },
            CppCfgError::Serialization(_) | CppCfgError::Encoding(_) => Self {
                message: err.to_string(),
                hint: None,
                exit_code: 1,
            },
        }
    }

    /// Print to stderr
    pub fn print(&self) {
        eprintln!("Error: {}", self.message);
        if let Some(hint) = &self.hint {
            eprintln!("\n{}", hint);
        }
    }
}
