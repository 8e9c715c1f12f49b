// CLI module for command-line interface

pub mod generate;
pub mod preset;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::models::profile::ProfileKind;
use crate::utils::error::Result;

use self::generate::{GenerateCommand, OutputArgs};
use self::preset::PresetCommand;

/// Main CLI structure
#[derive(Parser)]
#[command(name = "cppcfg")]
#[command(about = "Generate .vscode/c_cpp_properties.json for MSVC projects")]
#[command(long_about = r#"cppcfg writes the C/C++ extension settings file for a project so you
don't have to edit .vscode/c_cpp_properties.json by hand.

Every profile targets MSVC on x64 Windows (c17, c++20, windows-msvc-x64).
The pybind profile also adds the pybind11 and Python include directories.

Paths come from flags, then CPPCFG_* environment variables, then a
cppcfg.toml settings file in the project (or config.toml in your user
config directory, overridable with CPPCFG_CONFIG_DIR). Empty values count
as unset.

Examples:
  cppcfg standard --compiler "C:/.../cl.exe"       Plain C++ project
  cppcfg pybind --dir C:/my/project                Python extension project
  cppcfg preset pybind                             Use the built-in default paths
  cppcfg standard --print                          Show the JSON without writing it"#)]
#[command(version)]
pub struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// All available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Write a plain C++ profile
    Standard {
        /// Path to cl.exe
        #[arg(long, env = "CPPCFG_COMPILER", value_name = "PATH")]
        compiler: Option<String>,

        /// Settings file to read default paths from
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Directory holding the user config.toml (default: platform config dir)
        #[arg(long, env = "CPPCFG_CONFIG_DIR", value_name = "DIR")]
        config_dir: Option<PathBuf>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Write a profile for building pybind11 extensions
    #[command(long_about = r#"Write a profile for building pybind11 extensions.

The include path lists the workspace, then the pybind11 headers, then the
Python headers. All three paths are required.

Examples:
  cppcfg pybind --compiler C:/.../cl.exe \
      --python-include C:/Python312/include \
      --pybind11-include C:/Python312/Lib/site-packages/pybind11/include"#)]
    Pybind {
        /// Path to cl.exe
        #[arg(long, env = "CPPCFG_COMPILER", value_name = "PATH")]
        compiler: Option<String>,

        /// Python development headers directory
        #[arg(long, env = "CPPCFG_PYTHON_INCLUDE", value_name = "DIR")]
        python_include: Option<String>,

        /// pybind11 headers directory
        #[arg(long, env = "CPPCFG_PYBIND11_INCLUDE", value_name = "DIR")]
        pybind11_include: Option<String>,

        /// Settings file to read default paths from
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Directory holding the user config.toml (default: platform config dir)
        #[arg(long, env = "CPPCFG_CONFIG_DIR", value_name = "DIR")]
        config_dir: Option<PathBuf>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Write a profile using the built-in default toolchain paths
    Preset {
        /// Profile to write
        #[arg(value_enum)]
        profile: ProfileKind,

        #[command(flatten)]
        output: OutputArgs,
    },
}

/// CLI command dispatcher
pub struct CliDispatcher;

impl CliDispatcher {
    /// Execute a CLI command
    pub fn execute(command: Commands) -> Result<()> {
        match command {
            Commands::Standard {
                compiler,
                config,
                config_dir,
                output,
            } => {
                let cmd = GenerateCommand {
                    profile: ProfileKind::Standard,
                    compiler,
                    python_include: None,
                    pybind11_include: None,
                    config,
                    config_dir,
                    output,
                };
                cmd.run()
            }

            Commands::Pybind {
                compiler,
                python_include,
                pybind11_include,
                config,
                config_dir,
                output,
            } => {
                let cmd = GenerateCommand {
                    profile: ProfileKind::Pybind,
                    compiler,
                    python_include,
                    pybind11_include,
                    config,
                    config_dir,
                    output,
                };
                cmd.run()
            }

            Commands::Preset { profile, output } => PresetCommand { profile, output }.run(),
        }
    }
}
