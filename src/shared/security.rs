use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size of a component source file (5 MB)
///
/// Hand-written component modules are small; anything larger is almost
/// certainly generated or bundled output and is rejected before parsing.
pub const MAX_SOURCE_FILE_SIZE: u64 = 5 * 1024 * 1024;

/// Maximum size of a local catalog file (20 MB)
pub const MAX_CATALOG_FILE_SIZE: u64 = 20 * 1024 * 1024;

/// Validates that a path is not a symbolic link
///
/// # Security
/// Uses `symlink_metadata()` so the link itself is inspected rather than
/// its target.
///
/// # Arguments
/// * `path` - The path to validate
/// * `operation` - Description of the operation (e.g., "read", "write") for error messages
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read metadata for {} operation on {}: {}",
            operation,
            path.display(),
            e
        )
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, {} operations on symbolic links are not allowed.",
            path.display(),
            operation
        );
    }

    Ok(())
}

/// Validates file size is within acceptable limits
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}

/// Reads a regular, non-symlinked file no larger than `max_size`
///
/// # Arguments
/// * `path` - File to read
/// * `file_description` - Human-readable description used in error messages
///   (e.g., "source file", "catalog file")
/// * `max_size` - Upper bound on the file size in bytes
///
/// # Errors
/// Returns an error if the path is missing, is a symlink or a directory,
/// exceeds `max_size`, or is not valid UTF-8.
pub fn read_regular_file(path: &Path, file_description: &str, max_size: u64) -> Result<String> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e)
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    validate_file_size(metadata.len(), path, max_size)?;

    fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file_description, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_validate_not_symlink_regular_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("Button.tsx");
        fs::write(&file_path, "export {}").unwrap();

        assert!(validate_not_symlink(&file_path, "read").is_ok());
    }

    #[test]
    fn test_validate_not_symlink_nonexistent() {
        let path = PathBuf::from("/nonexistent/Button.tsx");
        assert!(validate_not_symlink(&path, "read").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_validate_not_symlink_rejects_link() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("target.tsx");
        let link = temp_dir.path().join("link.tsx");
        fs::write(&target, "export {}").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let err = validate_not_symlink(&link, "read").unwrap_err();
        assert!(err.to_string().contains("symbolic link"));
    }

    #[test]
    fn test_validate_file_size_exceeds_limit() {
        let path = PathBuf::from("/test/Button.tsx");
        assert!(validate_file_size(1000, &path, MAX_SOURCE_FILE_SIZE).is_ok());

        let err = validate_file_size(MAX_SOURCE_FILE_SIZE + 1, &path, MAX_SOURCE_FILE_SIZE)
            .unwrap_err();
        assert!(err.to_string().contains("too large"));
    }

    #[test]
    fn test_read_regular_file_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("Card.jsx");
        fs::write(&file_path, "const a = 1;").unwrap();

        let content = read_regular_file(&file_path, "source file", MAX_SOURCE_FILE_SIZE).unwrap();
        assert_eq!(content, "const a = 1;");
    }

    #[test]
    fn test_read_regular_file_directory() {
        let temp_dir = TempDir::new().unwrap();
        let err = read_regular_file(temp_dir.path(), "source file", MAX_SOURCE_FILE_SIZE)
            .unwrap_err();
        assert!(err.to_string().contains("not a regular file"));
    }

    #[test]
    fn test_read_regular_file_too_large() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("big.tsx");
        fs::write(&file_path, "x".repeat(64)).unwrap();

        let err = read_regular_file(&file_path, "source file", 16).unwrap_err();
        assert!(err.to_string().contains("too large"));
    }
}
