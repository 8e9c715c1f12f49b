use serde::{Deserialize, Serialize};
use std::fmt;

/// Which flavour of properties file to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ProfileKind {
    /// Plain C++ project: only the workspace wildcard is included
    Standard,
    /// Python extension project: adds the pybind11 and Python include directories
    Pybind,
}

impl ProfileKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileKind::Standard => "standard",
            ProfileKind::Pybind => "pybind",
        }
    }

    /// Number of include entries after the workspace wildcard
    pub fn extra_include_count(&self) -> usize {
        match self {
            ProfileKind::Standard => 0,
            ProfileKind::Pybind => 2,
        }
    }
}

impl fmt::Display for ProfileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
