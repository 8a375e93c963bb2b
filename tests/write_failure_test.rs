use berry_compote::core::etl::Stage;
use berry_compote::core::Storage;
use berry_compote::{CompoteEngine, CompoteError, CompotePipeline, FixedFiles, Result};
use std::cell::RefCell;
use std::collections::HashMap;
use std::io::{Error, ErrorKind};

/// In-memory storage that refuses writes to one file.
struct FlakyStorage {
    files: RefCell<HashMap<String, String>>,
    reject: &'static str,
}

impl FlakyStorage {
    fn with_input(input: &str, reject: &'static str) -> Self {
        let mut files = HashMap::new();
        files.insert("berries.txt".to_string(), input.to_string());
        Self {
            files: RefCell::new(files),
            reject,
        }
    }
}

impl Storage for FlakyStorage {
    fn read_file(&self, path: &str) -> Result<String> {
        self.files
            .borrow()
            .get(path)
            .cloned()
            .ok_or_else(|| CompoteError::FileNotFound {
                path: path.to_string(),
            })
    }

    fn write_file(&self, path: &str, contents: &str) -> Result<()> {
        if path == self.reject {
            return Err(CompoteError::Write {
                path: path.to_string(),
                source: Error::new(ErrorKind::PermissionDenied, "permission denied"),
            });
        }
        self.files
            .borrow_mut()
            .insert(path.to_string(), contents.to_string());
        Ok(())
    }
}

const INPUT: &str = "Strawberry | red | C,A\nBlueberry | blue | C,K,B\n";

#[test]
fn test_descriptions_failure_skips_vitamins() {
    let pipeline = CompotePipeline::new(
        FlakyStorage::with_input(INPUT, "compote_descriptions.txt"),
        FixedFiles,
    );
    let mut engine = CompoteEngine::new(pipeline);

    let err = engine.run().unwrap_err();
    assert!(matches!(err, CompoteError::Write { ref path, .. } if path == "compote_descriptions.txt"));
    assert_eq!(engine.stage(), Stage::Failed);
}

#[test]
fn test_vitamins_failure_after_descriptions_written() {
    let storage = FlakyStorage::with_input(INPUT, "compote_vitamins.txt");
    let pipeline = CompotePipeline::new(storage, FixedFiles);
    let mut engine = CompoteEngine::new(pipeline);

    let err = engine.run().unwrap_err();
    assert!(matches!(err, CompoteError::Write { .. }));
    assert_eq!(err.user_friendly_message(), "Could not write output file 'compote_vitamins.txt'");
    assert_eq!(engine.stage(), Stage::Failed);
}

#[test]
fn test_descriptions_persisted_before_vitamins() {
    let pipeline = CompotePipeline::new(
        FlakyStorage::with_input(INPUT, "compote_vitamins.txt"),
        FixedFiles,
    );
    let mut engine = CompoteEngine::new(pipeline);
    assert!(engine.run().is_err());

    let files = engine_storage_files(&engine);
    assert!(files.contains_key("compote_descriptions.txt"));
    assert!(!files.contains_key("compote_vitamins.txt"));
}

fn engine_storage_files(
    engine: &CompoteEngine<CompotePipeline<FlakyStorage, FixedFiles>>,
) -> HashMap<String, String> {
    engine.pipeline().storage().files.borrow().clone()
}
