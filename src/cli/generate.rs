use std::path::{Path, PathBuf};

use clap::Args;
use serde::{Deserialize, Serialize};

use crate::models::profile::ProfileKind;
use crate::models::properties::CppProperties;
use crate::services::file_emitter::PropertiesEmitter;
use crate::services::template_builder::CppConfig;
use crate::utils::config::{ConfigParser, Settings};
use crate::utils::error::Result;
use crate::utils::fs_utils::resolve_target_dir;

/// Options shared by every command that produces a properties file
#[derive(Debug, Clone, Default, Args)]
pub struct OutputArgs {
    /// Project directory (default: current directory)
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Print the JSON document to stdout instead of writing it
    #[arg(long)]
    pub print: bool,

    /// Output a JSON summary instead of human-readable text
    #[arg(long, conflicts_with = "print")]
    pub json: bool,
}

/// JSON response format for commands that write a properties file
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub status: String,
    pub profile: ProfileKind,
    pub config_path: String,
    pub include_paths: Vec<String>,
}

/// Write a properties file from user-supplied paths
#[derive(Debug, Clone)]
pub struct GenerateCommand {
    pub profile: ProfileKind,
    pub compiler: Option<String>,
    pub python_include: Option<String>,
    pub pybind11_include: Option<String>,
    pub config: Option<PathBuf>,
    /// User config directory; the platform default when `None`
    pub config_dir: Option<PathBuf>,
    pub output: OutputArgs,
}

impl GenerateCommand {
    /// Execute the command
    pub fn run(&self) -> Result<()> {
        let target = resolve_target_dir(self.output.dir.as_deref())?;
        let settings = ConfigParser::load_settings(
            self.config.as_deref(),
            &target,
            self.config_dir.as_deref(),
        )?;
        let builder = self.builder(&settings);

        let props = builder.build(self.profile)?;
        output_properties(self.profile, &props, &target, &self.output)
    }

    /// Merge flags (and their environment fallbacks) over the settings file.
    ///
    /// An empty flag or environment value counts as unset, so an exported but
    /// blank `CPPCFG_*` variable does not mask the settings file.
    pub fn builder(&self, settings: &Settings) -> CppConfig {
        let toolchain = &settings.toolchain;
        CppConfig::new(
            prefer(self.compiler.as_deref(), toolchain.compiler_path.as_deref()),
            prefer(self.python_include.as_deref(), toolchain.python_include.as_deref()),
            prefer(self.pybind11_include.as_deref(), toolchain.pybind11_include.as_deref()),
        )
    }
}

fn prefer(given: Option<&str>, fallback: Option<&str>) -> Option<String> {
    given
        .filter(|v| !v.is_empty())
        .or(fallback)
        .map(str::to_string)
}

/// Print or persist `props` according to the output flags
pub fn output_properties(
    profile: ProfileKind,
    props: &CppProperties,
    target: &Path,
    output: &OutputArgs,
) -> Result<()> {
    if output.print {
        println!("{}", PropertiesEmitter::render(props)?);
        return Ok(());
    }

    let path = PropertiesEmitter::emit(Some(target), props)?;

    if output.json {
        let response = GenerateResponse {
            status: "success".to_string(),
            profile,
            config_path: path.display().to_string(),
            include_paths: props.include_paths().to_vec(),
        };
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        println!("Wrote {} ({} profile)", path.display(), profile);
    }

    Ok(())
}
