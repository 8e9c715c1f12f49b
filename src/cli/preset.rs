use crate::cli::generate::{output_properties, OutputArgs};
use crate::models::profile::ProfileKind;
use crate::services::preset_builder::CppConfigAuto;
use crate::utils::error::Result;
use crate::utils::fs_utils::resolve_target_dir;

/// Write one of the built-in properties documents
#[derive(Debug, Clone)]
pub struct PresetCommand {
    pub profile: ProfileKind,
    pub output: OutputArgs,
}

impl PresetCommand {
    /// Execute the command
    pub fn run(&self) -> Result<()> {
        let target = resolve_target_dir(self.output.dir.as_deref())?;
        let props = CppConfigAuto::new().properties(self.profile);
        output_properties(self.profile, props, &target, &self.output)
    }
}
