use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompoteError {
    #[error("Error! Please, provide the row in a correct format: \"name | color | vitamin1,vitamin2,...\" (got {parts} parts)")]
    Format { parts: usize },

    #[error("Error! Invalid line detected: {message}")]
    Validation { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl CompoteError {
    /// Per-line errors are recovered by the loader; everything else is fatal.
    pub fn is_line_error(&self) -> bool {
        matches!(self, Self::Format { .. } | Self::Validation { .. })
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::FileNotFound { path } => format!("Input file '{}' does not exist", path),
            Self::Read { path, .. } => format!("Could not read input file '{}'", path),
            Self::Write { path, .. } => format!("Could not write output file '{}'", path),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::FileNotFound { .. } => {
                "Create berries.txt in the working directory, one \"name | color | vitamins\" row per line"
            }
            Self::Read { .. } => "Check the file permissions and that the file is valid UTF-8",
            Self::Write { .. } => "Check write permissions and free disk space in the working directory",
            Self::Format { .. } | Self::Validation { .. } => "Fix or remove the offending line",
        }
    }
}

pub type Result<T> = std::result::Result<T, CompoteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_errors_are_recoverable() {
        assert!(CompoteError::Format { parts: 1 }.is_line_error());
        assert!(CompoteError::Validation {
            message: "name is empty".into()
        }
        .is_line_error());
        assert!(!CompoteError::FileNotFound {
            path: "berries.txt".into()
        }
        .is_line_error());
    }

    #[test]
    fn friendly_message_hides_io_details() {
        let err = CompoteError::Write {
            path: "out.txt".into(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "os error 13"),
        };
        assert_eq!(err.user_friendly_message(), "Could not write output file 'out.txt'");
        assert!(err.to_string().contains("os error 13"));
    }
}
