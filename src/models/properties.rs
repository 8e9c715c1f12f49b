use serde::{Deserialize, Serialize};

use crate::utils::error::Result;

/// Toolchain profile label
pub const PROFILE_NAME: &str = "MSVC";
/// Include entry covering the project root and every subdirectory
pub const WORKSPACE_WILDCARD: &str = "${workspaceFolder}/**";
pub const C_STANDARD: &str = "c17";
pub const CPP_STANDARD: &str = "c++20";
pub const INTELLISENSE_MODE: &str = "windows-msvc-x64";
/// `version` field understood by the C/C++ extension
pub const SCHEMA_VERSION: u32 = 4;

/// Contents of `c_cpp_properties.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CppProperties {
    pub configurations: Vec<Configuration>,
    pub version: u32,
}

/// One compiler profile entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    pub name: String,
    /// Searched in order; the workspace wildcard always comes first
    pub include_path: Vec<String>,
    pub compiler_path: String,
    pub c_standard: String,
    pub cpp_standard: String,
    pub intelli_sense_mode: String,
}

impl CppProperties {
    /// Build the single-profile document.
    ///
    /// `extra_includes` are appended after the workspace wildcard in the order
    /// given.
    pub fn new<I, S>(compiler_path: impl Into<String>, extra_includes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let include_path = std::iter::once(WORKSPACE_WILDCARD.to_string())
            .chain(extra_includes.into_iter().map(Into::into))
            .collect();

        Self {
            configurations: vec![Configuration {
                name: PROFILE_NAME.to_string(),
                include_path,
                compiler_path: compiler_path.into(),
                c_standard: C_STANDARD.to_string(),
                cpp_standard: CPP_STANDARD.to_string(),
                intelli_sense_mode: INTELLISENSE_MODE.to_string(),
            }],
            version: SCHEMA_VERSION,
        }
    }

    /// Include paths of the first profile; empty if the document has none
    pub fn include_paths(&self) -> &[String] {
        self.configurations
            .first()
            .map(|c| c.include_path.as_slice())
            .unwrap_or_default()
    }

    pub fn compiler_path(&self) -> &str {
        self.configurations
            .first()
            .map_or("", |c| c.compiler_path.as_str())
    }

    /// Serialize with 4-space indentation, no trailing newline
    pub fn to_pretty_json(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        Ok(String::from_utf8(buf)?)
    }
}
