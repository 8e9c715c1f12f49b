// Builders and the properties file writer

pub mod file_emitter;
pub mod preset_builder;
pub mod template_builder;
