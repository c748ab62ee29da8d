//! Resolve values that may be given inline or as a file path.

use std::fs;
use std::path::PathBuf;

use crate::application::error::PublishError;

/// Return the file contents when `file` is set, otherwise the inline value.
pub fn read_value(val: Option<String>, file: Option<PathBuf>) -> Result<String, PublishError> {
    if let Some(path) = file {
        let data = fs::read_to_string(&path).map_err(|source| PublishError::InputFile {
            path: path.display().to_string(),
            source,
        })?;
        Ok(data)
    } else if let Some(v) = val {
        Ok(v)
    } else {
        Err(PublishError::InvalidInput("value required".into()))
    }
}
