use crate::domain::model::Berry;
use crate::utils::error::{CompoteError, Result};
use crate::utils::validation::validate_non_empty_field;

const FIELD_DELIMITER: char = '|';
const VITAMIN_DELIMITER: char = ',';
const BYTE_ORDER_MARK: char = '\u{feff}';

/// Trims whitespace and byte-order marks from both ends.
pub(crate) fn trim_field(field: &str) -> &str {
    field.trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK)
}

/// Parses one `name | color | vitamin1,vitamin2,...` row.
///
/// Whitespace around fields and vitamin tokens is ignored. Empty tokens left by
/// stray commas are kept; only a wholly empty vitamin field is rejected.
pub fn parse_berry_line(line: &str) -> Result<Berry> {
    let parts: Vec<&str> = line.split(FIELD_DELIMITER).map(trim_field).collect();

    let [name, color, vitamins] = parts[..] else {
        return Err(CompoteError::Format { parts: parts.len() });
    };

    validate_non_empty_field("name", name)?;
    validate_non_empty_field("color", color)?;
    validate_non_empty_field("vitamin list", vitamins)?;

    let vitamins = vitamins
        .split(VITAMIN_DELIMITER)
        .map(|v| trim_field(v).to_string())
        .collect();

    Ok(Berry::new(name, color, vitamins))
}
