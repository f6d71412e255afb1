use crate::shared::Result;
use std::path::Path;

/// SourceReader port for reading component source files
///
/// This port abstracts the file system access needed to obtain the
/// text of the file under analysis. The extractor itself never reads files.
pub trait SourceReader {
    /// Reads the full text of a source file
    ///
    /// # Arguments
    /// * `path` - Path to the JavaScript/TypeScript source file
    ///
    /// # Returns
    /// The raw content of the file as a string
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist or is not a regular file
    /// - The file is a symbolic link or exceeds the size limit
    /// - The file cannot be read due to permissions or I/O errors
    fn read_source(&self, path: &Path) -> Result<String>;
}
