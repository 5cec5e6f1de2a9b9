use crate::build_info::domain::BuildInfo;
use crate::ports::outbound::DocumentReader;
use crate::scanning::domain::GraphNode;
use crate::shared::error::AppError;
use crate::shared::security::{validate_input_file, MAX_INPUT_FILE_SIZE};
use crate::shared::Result;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading input documents from disk
///
/// Implements the DocumentReader port. Every read goes through the input
/// file checks: no symbolic links, regular files only, 100 MB at most.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    fn read_json<D: DeserializeOwned>(&self, path: &Path, what: &str) -> Result<D> {
        validate_input_file(path, what, MAX_INPUT_FILE_SIZE)?;

        let content = fs::read_to_string(path).map_err(|e| AppError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        let document = serde_json::from_str(&content).map_err(|e| AppError::FileParseError {
            what: what.to_string(),
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;
        Ok(document)
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentReader for FileSystemReader {
    fn read_graph(&self, path: &Path) -> Result<GraphNode> {
        self.read_json(path, "dependency graph")
    }

    fn read_build_info(&self, path: &Path) -> Result<BuildInfo> {
        let build: BuildInfo = self.read_json(path, "build info")?;
        build.validate()?;
        Ok(build)
    }
}
