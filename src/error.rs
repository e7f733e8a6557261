//! Error types for the qualgen library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for qualgen operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while converting a question source.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The test directory does not exist. Distinct from a missing file:
    /// folder lookup is case sensitive on most platforms.
    #[error("Test folder not found: {} (folder names are case sensitive)", .0.display())]
    MissingFolder(PathBuf),

    /// No file with the expected suffix was found in the test directory.
    #[error("No \"{0}\" file found. Cannot proceed without it")]
    MissingInput(String),

    /// The question/answer grammar did not match; carries the offending text.
    #[error("Malformed question source: {0}")]
    MalformedInput(String),

    /// A settings line could not be split into a key/value pair.
    #[error("Malformed settings line: {0:?} (expected key=value)")]
    MalformedSettings(String),

    /// A required settings key is absent.
    #[error("Missing required property: {0}")]
    MissingProperty(String),

    /// Error during rendering (XML, JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::MissingInput("questions".to_string());
        assert_eq!(
            err.to_string(),
            "No \"questions\" file found. Cannot proceed without it"
        );

        let err = Error::MissingProperty("description".to_string());
        assert_eq!(err.to_string(), "Missing required property: description");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_missing_folder_mentions_case_sensitivity() {
        let err = Error::MissingFolder(PathBuf::from("English"));
        assert!(err.to_string().contains("case sensitive"));
    }
}
