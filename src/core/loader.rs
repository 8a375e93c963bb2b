use crate::core::parser::{parse_berry_line, trim_field};
use crate::domain::model::Berry;
use crate::domain::ports::Storage;
use crate::utils::error::Result;

/// Reads `path` from storage and parses every non-blank line.
///
/// A missing file surfaces as `CompoteError::FileNotFound`; any other read
/// failure is passed through unchanged.
pub fn load_berries<S: Storage>(storage: &S, path: &str) -> Result<Vec<Berry>> {
    let content = storage.read_file(path)?;
    parse_berries(&content)
}

/// Malformed lines are logged and dropped; only non-line errors are returned.
pub fn parse_berries(content: &str) -> Result<Vec<Berry>> {
    let mut berries = Vec::new();
    let mut skipped = 0usize;

    for (index, line) in content.split('\n').enumerate() {
        if trim_field(line).is_empty() {
            continue;
        }

        match parse_berry_line(line) {
            Ok(berry) => {
                tracing::debug!("Line {}: parsed berry {} ({})", index + 1, berry.name, berry.color);
                berries.push(berry);
            }
            Err(e) if e.is_line_error() => {
                skipped += 1;
                tracing::warn!("Error: line {}: {}", index + 1, e);
            }
            Err(e) => return Err(e),
        }
    }

    if skipped > 0 {
        tracing::warn!("Skipped {} malformed line(s)", skipped);
    }

    Ok(berries)
}
