use super::PatternLibrary;
use crate::component_matching::domain::Threshold;
use std::path::PathBuf;

/// CheckRequest - Request DTO for checking one source file
#[derive(Debug, Clone)]
pub struct CheckRequest {
    /// Path to the React source file to analyse
    pub file_path: PathBuf,
    /// Minimum combined score for a match to be reported
    pub threshold: Threshold,
    /// Configured pattern libraries; disabled ones are skipped
    pub libraries: Vec<PatternLibrary>,
}

impl CheckRequest {
    pub fn new(file_path: PathBuf, threshold: Threshold, libraries: Vec<PatternLibrary>) -> Self {
        Self {
            file_path,
            threshold,
            libraries,
        }
    }
}
