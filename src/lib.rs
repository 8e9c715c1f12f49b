// cppcfg - VS Code C/C++ properties generator
// Core library functionality

pub mod cli;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use models::profile::ProfileKind;
pub use models::properties::CppProperties;
pub use services::file_emitter::PropertiesEmitter;
pub use services::preset_builder::CppConfigAuto;
pub use services::template_builder::CppConfig;
pub use utils::error::{CppCfgError, Result};
