use std::collections::HashMap;
use std::path::{Path, PathBuf};
use vibe_check::prelude::*;

/// Mock SourceReader serving in-memory files
#[derive(Default)]
pub struct MockSourceReader {
    pub files: HashMap<PathBuf, String>,
}

impl MockSourceReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(PathBuf::from(path), content.to_string());
        self
    }
}

impl SourceReader for MockSourceReader {
    fn read_source(&self, path: &Path) -> Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Mock file not found: {}", path.display()))
    }
}
