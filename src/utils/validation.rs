use crate::utils::error::{CompoteError, Result};

pub fn validate_non_empty_field(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(CompoteError::Validation {
            message: format!("{} is empty", field_name),
        });
    }
    Ok(())
}
