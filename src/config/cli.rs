use crate::core::Storage;
use crate::utils::error::{CompoteError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn full_path(&self, path: &str) -> PathBuf {
        self.base_path.join(path)
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &str) -> Result<String> {
        let full_path = self.full_path(path);
        fs::read_to_string(&full_path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => CompoteError::FileNotFound {
                path: full_path.display().to_string(),
            },
            _ => CompoteError::Read {
                path: full_path.display().to_string(),
                source,
            },
        })
    }

    /// Overwrites any existing file.
    fn write_file(&self, path: &str, contents: &str) -> Result<()> {
        let full_path = self.full_path(path);
        fs::write(&full_path, contents).map_err(|source| CompoteError::Write {
            path: full_path.display().to_string(),
            source,
        })
    }
}
