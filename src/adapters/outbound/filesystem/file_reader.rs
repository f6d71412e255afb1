use crate::ports::outbound::SourceReader;
use crate::shared::error::VibeCheckError;
use crate::shared::security::{read_regular_file, MAX_SOURCE_FILE_SIZE};
use crate::shared::Result;
use std::path::Path;

/// FileSystemReader adapter for reading component sources from disk
///
/// Symbolic links, directories and oversized files are refused before
/// any content is read.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceReader for FileSystemReader {
    fn read_source(&self, path: &Path) -> Result<String> {
        read_regular_file(path, "source file", MAX_SOURCE_FILE_SIZE).map_err(|e| {
            VibeCheckError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
