// Data models

pub mod profile;
pub mod properties;
