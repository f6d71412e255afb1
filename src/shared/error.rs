use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between a clean run,
/// a run that found reusable catalog components, and a broken run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - analysis finished (matches are only fatal with `--fail-on-match`)
    Success = 0,
    /// Catalog matches were found and `--fail-on-match` was given
    MatchesFound = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (unreadable file, bad config, network error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::MatchesFound => write!(f, "Matches Found (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for component analysis.
#[derive(Debug, Error)]
pub enum VibeCheckError {
    #[error("Unsupported file: {path}\n\n💡 Hint: Only React source files (.js, .jsx, .ts, .tsx) can be analyzed")]
    UnsupportedFile { path: PathBuf },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid matching threshold: {value}\n\n💡 Hint: The threshold must be a finite number between 0 and 100")]
    InvalidThreshold { value: f64 },

    #[error("Invalid catalog component '{name}': {reason}\n\n💡 Hint: Check the catalog source that provided this component")]
    InvalidCatalogComponent { name: String, reason: String },

    #[error("Failed to load catalog file: {path}\nDetails: {details}\n\n💡 Hint: Catalog files must contain a JSON array of components")]
    CatalogParseError { path: PathBuf, details: String },

    #[error("Pattern library '{library}' could not be fetched\nDetails: {details}")]
    LibraryFetchError { library: String, details: String },

    /// Validation error for builder patterns
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::MatchesFound.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(format!("{}", ExitCode::MatchesFound), "Matches Found (1)");
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_unsupported_file_display() {
        let error = VibeCheckError::UnsupportedFile {
            path: PathBuf::from("styles.css"),
        };
        let display = format!("{}", error);
        assert!(display.contains("Unsupported file"));
        assert!(display.contains("styles.css"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_invalid_threshold_display() {
        let error = VibeCheckError::InvalidThreshold { value: 140.0 };
        let display = format!("{}", error);
        assert!(display.contains("Invalid matching threshold: 140"));
        assert!(display.contains("between 0 and 100"));
    }

    #[test]
    fn test_invalid_catalog_component_display() {
        let error = VibeCheckError::InvalidCatalogComponent {
            name: "Button".to_string(),
            reason: "element type at index 1 is blank".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("'Button'"));
        assert!(display.contains("index 1 is blank"));
    }

    #[test]
    fn test_file_read_error_display() {
        let error = VibeCheckError::FileReadError {
            path: PathBuf::from("/src/Button.tsx"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to read file"));
        assert!(display.contains("/src/Button.tsx"));
        assert!(display.contains("Permission denied"));
    }

    #[test]
    fn test_security_error_display() {
        let error = VibeCheckError::SecurityError {
            path: PathBuf::from("/test/symlink"),
            reason: "Symbolic links are not allowed".to_string(),
            hint: "Use a regular file instead".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Security violation"));
        assert!(display.contains("Use a regular file instead"));
    }

    #[test]
    fn test_error_converts_into_anyhow() {
        let error: anyhow::Error = VibeCheckError::Validation {
            message: "weights must sum to 100".to_string(),
        }
        .into();
        assert!(error.to_string().contains("weights must sum to 100"));
        assert!(error.downcast_ref::<VibeCheckError>().is_some());
    }
}
