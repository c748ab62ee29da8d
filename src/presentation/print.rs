use std::io::Write;

use serde::Serialize;

use crate::application::error::PublishError;

/// Write `value` as indented JSON followed by a newline.
pub fn print_json<T: Serialize, W: Write>(out: &mut W, value: &T) -> Result<(), PublishError> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|e| PublishError::Render(e.to_string()))?;
    writeln!(out, "{rendered}").map_err(|e| PublishError::Render(e.to_string()))
}
