// Required-field checks shared by the builders

use crate::utils::error::{CppCfgError, Result};

/// Return the value when it is present and non-empty.
///
/// Only the zero-length string counts as empty; whitespace is passed through
/// untouched.
pub fn require_non_empty<'a>(value: Option<&'a str>, field: &str) -> Result<&'a str> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(CppCfgError::missing(field)),
    }
}
